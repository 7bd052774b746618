use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["walk"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    fn apply(self, (x, y): (i64, i64)) -> (i64, i64) {
        match self {
            Move::North => (x, y + 1),
            Move::South => (x, y - 1),
            Move::East => (x + 1, y),
            Move::West => (x - 1, y),
        }
    }
}

/// Houses visited by walkers taking turns over the moves, start included
fn visited_houses(moves: &[Move], walkers: usize) -> usize {
    let mut positions = vec![(0i64, 0i64); walkers];
    let mut visited = HashSet::from([(0, 0)]);
    for (turn, step) in moves.iter().enumerate() {
        let walker = &mut positions[turn % walkers];
        *walker = step.apply(*walker);
        visited.insert(*walker);
    }
    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Move>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '^' => Ok(Move::North),
                'v' => Ok(Move::South),
                '>' => Ok(Move::East),
                '<' => Ok(Move::West),
                other => Err(ParseError::InvalidFormat(format!("invalid direction '{}'", other))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "visited houses";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited_houses(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "visited houses";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited_houses(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn houses(input: &str, walkers: usize) -> usize {
        visited_houses(&Solver::parse(input).unwrap(), walkers)
    }

    #[test]
    fn test_single_walker() {
        assert_eq!(houses(">", 1), 2);
        assert_eq!(houses("^>v<", 1), 4);
        assert_eq!(houses("^v^v^v^v^v", 1), 2);
    }

    #[test]
    fn test_with_robot() {
        assert_eq!(houses("^v", 2), 3);
        assert_eq!(houses("^>v<", 2), 3);
        assert_eq!(houses("^v^v^v^v^v", 2), 11);
    }

    #[test]
    fn test_invalid_direction() {
        assert!(Solver::parse("^^x").is_err());
    }
}
