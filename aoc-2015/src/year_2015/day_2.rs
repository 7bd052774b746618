use crate::error::PuzzleError;
use crate::utils::records::parse_lines;
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["records"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    dimensions: [u64; 3],
}

impl Package {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let fields: Vec<u64> = line
            .split('x')
            .map(|field| {
                field
                    .parse()
                    .with_context(|| format!("bad dimension '{}'", field))
            })
            .collect::<anyhow::Result<_>>()?;
        match <[u64; 3]>::try_from(fields) {
            Ok(dimensions) => Ok(Self { dimensions }),
            Err(fields) => bail!("expected 3 dimensions, got {}", fields.len()),
        }
    }

    /// Surface area plus the area of the smallest side
    pub fn paper(&self) -> Option<u64> {
        let sides: Vec<u64> = self
            .dimensions
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.checked_mul(*b))
            .collect::<Option<_>>()?;
        let smallest = sides.iter().copied().min().unwrap_or(0);
        sides
            .iter()
            .try_fold(smallest, |total, side| total.checked_add(side.checked_mul(2)?))
    }

    /// Volume for the bow plus the smallest perimeter
    pub fn ribbon(&self) -> Option<u64> {
        let [a, b, c] = self.dimensions;
        let volume = a.checked_mul(b)?.checked_mul(c)?;
        let longest = a.max(b).max(c);
        let shortest_two = a.checked_add(b)?.checked_add(c)? - longest;
        volume.checked_add(shortest_two.checked_mul(2)?)
    }
}

fn total(
    packages: &[Package],
    measure: fn(&Package) -> Option<u64>,
    what: &str,
) -> Result<u64, PuzzleError> {
    packages
        .iter()
        .try_fold(0u64, |total, package| total.checked_add(measure(package)?))
        .ok_or_else(|| PuzzleError::Overflow(what.to_string()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Package>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, Package::parse)
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "total paper";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared, Package::paper, "total paper")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "total ribbon";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared, Package::ribbon, "total ribbon")?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_paper_and_ribbon() {
        let packages = Solver::parse("2x3x4\n1x1x10\n").unwrap();
        assert_eq!(packages[0].paper(), Some(58));
        assert_eq!(packages[1].paper(), Some(43));
        assert_eq!(packages[0].ribbon(), Some(34));
        assert_eq!(packages[1].ribbon(), Some(14));
    }

    #[test]
    fn test_oversized_package_fails() {
        let mut shared = Solver::parse("9999999999999x9999999999999x1").unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert_eq!(err.to_string(), "Solve failed: total paper overflows");
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        for input in ["2x3", "2x3x4x5", "2xax4"] {
            assert!(matches!(
                Solver::parse(input),
                Err(ParseError::InvalidLine { line: 1, .. })
            ));
        }
    }
}
