use std::io;
use thiserror::Error;

/// Errors raised while driving the benchmark sweep.
///
/// None of these are recoverable where they occur: they propagate unchanged
/// to the entry point, which prints the description and the usage help.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The sweep configuration violates an invariant.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The first line of the benchmark's output did not match the expected
    /// `<digits><unit>s,` timing format.
    #[error("unexpected benchmark output line: {0:?}")]
    Parse(String),

    /// The benchmark executable could not be spawned or its output could not
    /// be read.
    #[error("failed to run benchmark process: {0}")]
    Process(#[from] io::Error),

    /// The benchmark process closed its output stream without producing a
    /// single line.
    #[error("benchmark process produced no output")]
    NoOutput,
}
