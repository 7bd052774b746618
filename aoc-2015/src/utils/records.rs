//! Line grammar driver
//!
//! Most puzzles are one record per line. A solver supplies the grammar for a
//! single line (usually an anchored [`Regex`] and a few `parse` calls) and
//! [`parse_lines`] turns the whole input into records, reporting the first
//! bad line with its 1-based number.

use aoc_solver::ParseError;
use regex::Regex;
use thiserror::Error;

/// Raised by a line grammar for a well-formed line naming something unknown
///
/// [`parse_lines`] reports it as [`ParseError::UnknownRule`] instead of a
/// generic invalid line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

/// Parse every non-blank line of `input` with `parse_line`
///
/// Stops at the first failure. Trailing whitespace (including `\r`) is
/// stripped before the grammar sees the line. Records may borrow from `input`.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line.trim_end()).map_err(|err| line_error(idx + 1, err)))
        .collect()
}

/// Attach a 1-based line number to a grammar failure
pub fn line_error(line: usize, err: anyhow::Error) -> ParseError {
    match err.downcast::<UnknownRule>() {
        Ok(UnknownRule(name)) => ParseError::UnknownRule { line, name },
        Err(err) => ParseError::InvalidLine {
            line,
            reason: format!("{:#}", err),
        },
    }
}

/// Match `line` against an anchored `pattern` and return its `N` groups
///
/// Every group of `pattern` must be mandatory and there must be exactly `N`
/// of them.
pub fn capture_fields<'h, const N: usize>(
    pattern: &Regex,
    line: &'h str,
) -> anyhow::Result<[&'h str; N]> {
    let captures = pattern
        .captures(line)
        .ok_or_else(|| anyhow::anyhow!("'{}' does not match `{}`", line, pattern.as_str()))?;
    Ok(captures.extract().1)
}
