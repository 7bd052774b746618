use crate::PuzzleError;
use crate::utils::records::{capture_fields, parse_lines};
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["simulation"])]
pub struct Solver;

pub const RACE_SECONDS: u64 = 2503;

static REINDEER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+) can fly (\d+) km/s for (\d+) seconds?, but then must rest for (\d+) seconds?\.$")
        .expect("valid reindeer pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reindeer<'a> {
    pub name: &'a str,
    pub speed: u64,
    pub flight: u64,
    pub rest: u64,
}

impl<'a> Reindeer<'a> {
    fn parse(line: &'a str) -> anyhow::Result<Self> {
        let [name, speed, flight, rest] = capture_fields(&REINDEER, line)?;
        let number = |field: &str| -> anyhow::Result<u64> {
            field
                .parse()
                .with_context(|| format!("bad number '{}'", field))
        };
        let reindeer = Self {
            name,
            speed: number(speed)?,
            flight: number(flight)?,
            rest: number(rest)?,
        };
        ensure!(
            reindeer.flight > 0 && reindeer.rest > 0,
            "{} must fly and rest for at least a second",
            name
        );
        Ok(reindeer)
    }

    /// Kilometres covered after `seconds`, `None` on overflow
    pub fn distance_after(&self, seconds: u64) -> Option<u64> {
        let cycle = self.flight.checked_add(self.rest)?;
        let flying = (seconds / cycle)
            .checked_mul(self.flight)?
            .checked_add((seconds % cycle).min(self.flight))?;
        flying.checked_mul(self.speed)
    }
}

fn distances(herd: &[Reindeer<'_>], seconds: u64) -> Result<Vec<u64>, PuzzleError> {
    herd.iter()
        .map(|r| {
            r.distance_after(seconds)
                .ok_or_else(|| PuzzleError::Overflow(format!("distance flown by {}", r.name)))
        })
        .collect()
}

pub fn winning_distance(herd: &[Reindeer<'_>], seconds: u64) -> Result<u64, PuzzleError> {
    distances(herd, seconds)?
        .into_iter()
        .max()
        .ok_or_else(|| PuzzleError::NotFound("reindeer".to_string()))
}

/// Every second, each reindeer in the lead gets a point
pub fn winning_points(herd: &[Reindeer<'_>], seconds: u64) -> Result<u64, PuzzleError> {
    let mut points = vec![0u64; herd.len()];
    for second in 1..=seconds {
        let distances = distances(herd, second)?;
        let lead = distances.iter().copied().max().unwrap_or(0);
        distances
            .iter()
            .zip(points.iter_mut())
            .filter(|(distance, _)| **distance == lead)
            .for_each(|(_, score)| *score += 1);
    }
    points
        .into_iter()
        .max()
        .ok_or_else(|| PuzzleError::NotFound("reindeer".to_string()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let herd = parse_lines(input, Reindeer::parse)?;
        if herd.is_empty() {
            return Err(ParseError::MissingData("no reindeer".to_string()));
        }
        Ok(herd)
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "winning distance";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_distance(shared, RACE_SECONDS)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "winning points";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_points(shared, RACE_SECONDS)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.";

    #[test]
    fn test_distances() {
        let herd = Solver::parse(SAMPLE).unwrap();
        assert_eq!(herd[0].distance_after(1), Some(14));
        assert_eq!(herd[0].distance_after(10), Some(140));
        assert_eq!(herd[0].distance_after(137), Some(140));
        assert_eq!(herd[0].distance_after(138), Some(154));
        assert_eq!(herd[0].distance_after(1000), Some(1120));
        assert_eq!(herd[1].distance_after(1000), Some(1056));
        assert_eq!(winning_distance(&herd, 1000), Ok(1120));
    }

    #[test]
    fn test_points() {
        let herd = Solver::parse(SAMPLE).unwrap();
        assert_eq!(winning_points(&herd, 1000), Ok(689));
    }

    #[test]
    fn test_zero_rest_rejected() {
        let input = "Comet can fly 14 km/s for 10 seconds, but then must rest for 0 seconds.";
        assert!(matches!(Solver::parse(input), Err(ParseError::InvalidLine { line: 1, .. })));
    }

    #[test]
    fn test_endless_flight_overflows() {
        let input = "Comet can fly 14 km/s for 18446744073709551615 seconds, but then must rest for 1 second.";
        let mut shared = Solver::parse(input).unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
        assert_eq!(
            winning_distance(&shared, 10),
            Err(PuzzleError::Overflow("distance flown by Comet".to_string()))
        );
    }

    #[test]
    fn test_empty_herd() {
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
