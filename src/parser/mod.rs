use regex::Regex;

use crate::error::SweepError;

/// Extracts the timing value from one line of benchmark output.
///
/// The benchmark executable reports its measurement on the first stdout line
/// in the form `<digits> <unit>s , <extra>`, e.g.:
///
/// ```text
/// 123 ms , unique_elems:42
/// ```
///
/// A leading integer, optional whitespace, an optional m/u/n sub-second
/// prefix, the literal "s" and a comma, all case-insensitive. The unit letter
/// is matched but never rescales the result: the raw magnitude is returned
/// as-is, matching what the executable has always emitted (milliseconds).
///
/// The value is parsed as a float and truncated, so a fractional timing
/// value silently loses its fractional part.
pub fn parse_timing_line(line: &str) -> Result<u64, SweepError> {
    let re = Regex::new(r"(?i)^(\d+)\s*[mun]?s\s*,").unwrap();

    let captures = re
        .captures(line)
        .ok_or_else(|| SweepError::Parse(line.to_string()))?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| SweepError::Parse(line.to_string()))?;
    Ok(value as u64)
}
