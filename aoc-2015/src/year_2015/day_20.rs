use crate::PuzzleError;
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["search", "sieve"])]
pub struct Solver;

/// How elves deliver: presents per house per elf number, and how many
/// houses each elf visits before stopping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub factor: u64,
    pub houses_per_elf: Option<u64>,
}

pub const ENDLESS: Delivery = Delivery {
    factor: 10,
    houses_per_elf: None,
};

pub const LAZY: Delivery = Delivery {
    factor: 11,
    houses_per_elf: Some(50),
};

pub struct SharedData {
    target: u64,
    limits: Limits,
}

/// Lowest house receiving at least `target` presents
///
/// Elf `n` alone brings `factor * n` presents to house `n`, so the answer is
/// at most `ceil(target / factor)` and the sieve never needs to go further.
pub fn lowest_house(target: u64, delivery: Delivery, limits: &Limits) -> Result<u64, PuzzleError> {
    let last = target.div_ceil(delivery.factor).max(1);
    if last > limits.max_iterations {
        return Err(PuzzleError::IterationLimit(limits.max_iterations));
    }
    let last = last as usize;
    debug!(houses = last, "sieving presents");

    let mut presents = vec![0u64; last + 1];
    for elf in 1..=last {
        let visits = (elf..=last).step_by(elf);
        let bring = delivery.factor * elf as u64;
        match delivery.houses_per_elf {
            Some(limit) => visits
                .take(limit as usize)
                .for_each(|house| presents[house] += bring),
            None => visits.for_each(|house| presents[house] += bring),
        }
    }

    presents
        .iter()
        .skip(1)
        .position(|&count| count >= target)
        .map(|idx| idx as u64 + 1)
        .ok_or_else(|| PuzzleError::NotFound(format!("house with {} presents", target)))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Self::parse_with_limits(input, &Limits::default())
    }

    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        let target = input.trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!("'{}' is not a present count", input.trim()))
        })?;
        Ok(SharedData {
            target,
            limits: *limits,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "lowest house";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lowest_house(shared.target, ENDLESS, &shared.limits)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "lowest house";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lowest_house(shared.target, LAZY, &shared.limits)?.to_string())
    }
}
