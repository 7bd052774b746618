//! Resource ceilings handed to solvers at parse time

/// Default ceiling for counter-driven searches
pub const DEFAULT_MAX_ITERATIONS: u64 = 50_000_000;
/// Default ceiling on the number of candidates an exhaustive search may enumerate
pub const DEFAULT_MAX_CANDIDATES: u64 = 10_000_000;

/// Upper bounds a solver must respect instead of looping or enumerating forever.
///
/// Solvers that search receive these through
/// [`AocParser::parse_with_limits`](crate::AocParser::parse_with_limits) and keep
/// them next to their parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of steps for "increment until it holds" loops
    pub max_iterations: u64,
    /// Maximum size of an enumerated search space (permutations, subsets, ...)
    pub max_candidates: u64,
}

impl Limits {
    pub fn new(max_iterations: u64, max_candidates: u64) -> Self {
        Self {
            max_iterations,
            max_candidates,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_CANDIDATES)
    }
}
