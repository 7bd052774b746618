use aoc_solver::SolveError;
use thiserror::Error;

/// Failures raised while solving an already parsed puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// An instruction addresses coordinates outside the declared grid
    #[error("region {region} is outside the {bounds} grid")]
    OutOfBounds { region: String, bounds: String },
    /// The search space held no acceptable candidate
    #[error("no {0} found")]
    NotFound(String),
    /// A counter-driven search gave up
    #[error("gave up after {0} iterations")]
    IterationLimit(u64),
    /// An exhaustive search would enumerate too many candidates
    #[error("search space of {} candidates exceeds the limit of {limit}", describe_size(.size))]
    SearchSpaceTooLarge { size: Option<u64>, limit: u64 },
    /// Input values too large for the answer type
    #[error("{0} overflows")]
    Overflow(String),
}

fn describe_size(size: &Option<u64>) -> String {
    match size {
        Some(size) => size.to_string(),
        None => "more than u64::MAX".to_string(),
    }
}

impl From<PuzzleError> for SolveError {
    fn from(err: PuzzleError) -> Self {
        SolveError::SolveFailed(Box::new(err))
    }
}
