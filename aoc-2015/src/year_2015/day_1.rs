use crate::PuzzleError;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["walk"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .chars()
            .enumerate()
            .map(|(idx, c)| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "invalid instruction '{}' at position {}",
                    other,
                    idx + 1
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "floor";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "basement position";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let position = shared
            .iter()
            .scan(0i64, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor == -1)
            .ok_or_else(|| PuzzleError::NotFound("step reaching the basement".to_string()))?;
        Ok((position + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn solve(input: &str, part: u8) -> Result<String, SolveError> {
        Solver::solve_part(&mut Solver::parse(input).unwrap(), part)
    }

    #[test]
    fn test_final_floor() {
        for (input, floor) in [
            ("(())", "0"),
            ("()()", "0"),
            ("(((", "3"),
            ("(()(()(", "3"),
            ("))(((((", "3"),
            ("())", "-1"),
            ("))(", "-1"),
            (")))", "-3"),
            (")())())", "-3"),
        ] {
            assert_eq!(solve(input, 1).unwrap(), floor, "input {}", input);
        }
    }

    #[test]
    fn test_basement_position() {
        assert_eq!(solve(")", 2).unwrap(), "1");
        assert_eq!(solve("()())", 2).unwrap(), "5");
    }

    #[test]
    fn test_never_reaching_basement() {
        assert!(matches!(solve("(()", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(Solver::parse("(x)"), Err(ParseError::InvalidFormat(_))));
    }
}
