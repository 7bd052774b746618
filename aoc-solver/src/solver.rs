//! Core solver traits

use crate::error::{ParseError, SolveError};
use crate::limits::Limits;

/// Trait for parsing puzzle input into the data shared by every part
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .trim()
///             .chars()
///             .map(|c| match c {
///                 '(' => Ok(1),
///                 ')' => Ok(-1),
///                 other => Err(ParseError::InvalidFormat(format!("unexpected '{other}'"))),
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Floors::parse("(()").unwrap(), vec![1, 1, -1]);
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;

    /// Parse with explicit resource ceilings.
    ///
    /// Solvers that search override this and keep `limits` in their shared
    /// data; everyone else gets plain [`parse`](AocParser::parse).
    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        let _ = limits;
        Self::parse(input)
    }
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, etc.).
pub trait PartSolver<const N: u8>: AocParser {
    /// Short description of the answer, printed as `Part N <label>: <answer>`
    const LABEL: &'static str = "";

    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all solvers implement.
///
/// Usually generated by `#[derive(AocSolver)]` from the [`PartSolver`] impls,
/// but it can be written by hand:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Sums;
///
/// impl AocParser for Sums {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("3\n4").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 1).unwrap(), "7");
/// assert_eq!(Sums::solve_part(&mut shared, 2).unwrap(), "4");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;

    /// Label describing the answer of `part`
    fn part_label(part: u8) -> &'static str {
        let _ = part;
        ""
    }
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
