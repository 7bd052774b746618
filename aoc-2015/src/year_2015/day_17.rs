use crate::PuzzleError;
use crate::utils::records::parse_lines;
use crate::utils::search::{Extremum, ScoredSet, check_search_space, subset_count};
use anyhow::Context;
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 17, tags = ["search", "combinations"])]
pub struct Solver;

pub struct SharedData {
    target: u64,
    containers: Vec<u64>,
    limits: Limits,
    /// Container index sets filling exactly `target`, scored by how many they use
    fillings: Option<ScoredSet<Vec<usize>, usize>>,
}

fn fillings(shared: &mut SharedData) -> Result<&ScoredSet<Vec<usize>, usize>, SolveError> {
    if shared.fillings.is_none() {
        let n = shared.containers.len();
        check_search_space(subset_count(n), &shared.limits)?;
        let containers = &shared.containers;
        let target = shared.target;
        let exact = (1..=n)
            .flat_map(|size| (0..n).combinations(size))
            .filter(|chosen| chosen.iter().map(|&i| containers[i]).sum::<u64>() == target);
        let set = ScoredSet::evaluate(exact, Vec::len);
        if set.is_empty() {
            return Err(PuzzleError::NotFound(format!("combination holding {} litres", target)).into());
        }
        shared.fillings = Some(set);
    }
    shared
        .fillings
        .as_ref()
        .ok_or_else(|| PuzzleError::NotFound("combination".to_string()).into())
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
        let numbers = parse_lines(input, |line| {
            line.trim()
                .parse::<u64>()
                .with_context(|| format!("'{}' is not a volume", line))
        })?;
        let (&target, containers) = numbers
            .split_first()
            .ok_or_else(|| ParseError::MissingData("target volume".to_string()))?;
        Ok(SharedData {
            target,
            containers: containers.to_vec(),
            limits: *limits,
            fillings: None,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "combinations";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fillings(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "minimal combinations";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let set = fillings(shared)?;
        let fewest = set
            .best(Extremum::Min)
            .map(|(_, used)| *used)
            .ok_or_else(|| PuzzleError::NotFound("combination".to_string()))?;
        Ok(set.count_where(|_, used| *used == fewest).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse("25\n20\n15\n10\n5\n5\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn test_all_containers_may_be_used() {
        let mut shared = Solver::parse("30\n10\n20\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_unreachable_target() {
        let mut shared = Solver::parse("7\n2\n4\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_target() {
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_subset_ceiling() {
        let mut shared = Solver::parse_with_limits("5\n1\n2\n3\n4", &Limits::new(0, 15)).unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
