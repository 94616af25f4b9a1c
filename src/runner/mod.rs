use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::error::SweepError;
use crate::parser::parse_timing_line;
use crate::sweep::ParameterPoint;

/// The two benchmarked code paths of the external executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    PolyVec,
    UniquePtrVec,
}

impl Variant {
    /// Comparison order of the variants at every sweep point.
    pub const ALL: [Variant; 2] = [Variant::PolyVec, Variant::UniquePtrVec];

    /// The tag passed to the benchmark executable as its third argument.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::PolyVec => "poly_vec",
            Variant::UniquePtrVec => "unique_ptr_vec",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the benchmark executable once and returns the parsed timing value.
///
/// The executable is invoked as `<exe> <element_count> <iteration_count>
/// <variant>` and only the first line of its standard output is inspected.
/// Its exit status and standard error are ignored: a non-zero exit that
/// still printed a well-formed timing line counts as a successful trial.
pub fn run_trial(
    executable: &Path,
    point: &ParameterPoint,
    variant: Variant,
) -> Result<u64, SweepError> {
    let mut child = Command::new(executable)
        .arg(point.element_count.to_string())
        .arg(point.iteration_count.to_string())
        .arg(variant.as_str())
        .stdout(Stdio::piped())
        .spawn()?;

    let line = first_stdout_line(&mut child);

    // The reader is gone by now, so our end of the pipe is closed and a
    // still-writing child terminates on its next write. Reap it on every
    // path; the exit status is not part of the contract.
    let _ = child.wait();

    parse_timing_line(&line?)
}

/// Reads the first line the child writes to its standard output.
fn first_stdout_line(child: &mut Child) -> Result<String, SweepError> {
    // Stdout was piped at spawn time, so the handle is present.
    let stdout = child.stdout.take().ok_or(SweepError::NoOutput)?;
    let mut reader = BufReader::new(stdout);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(SweepError::NoOutput);
    }
    Ok(line)
}
