use crate::utils::search::bounded_find;
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use md5::{Digest, Md5};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["hash", "search"])]
pub struct Solver;

pub struct SharedData<'a> {
    secret: &'a str,
    limits: Limits,
    five_zeroes: Option<u64>,
}

/// Whether MD5(secret ‖ n) starts with `zeroes` hex zeroes
fn has_leading_zeroes(prefix: &Md5, n: u64, zeroes: usize) -> bool {
    let mut hasher = prefix.clone();
    hasher.update(n.to_string());
    let digest = hasher.finalize();
    let full_bytes = zeroes / 2;
    digest[..full_bytes].iter().all(|&b| b == 0) && (zeroes % 2 == 0 || digest[full_bytes] >> 4 == 0)
}

fn mine(secret: &str, start: u64, zeroes: usize, limits: &Limits) -> Result<u64, SolveError> {
    let prefix = Md5::new_with_prefix(secret);
    Ok(bounded_find(start, limits, |n| has_leading_zeroes(&prefix, n, zeroes))?)
}

fn five_zeroes(shared: &mut SharedData<'_>) -> Result<u64, SolveError> {
    if let Some(n) = shared.five_zeroes {
        return Ok(n);
    }
    let n = mine(shared.secret, 1, 5, &shared.limits)?;
    shared.five_zeroes = Some(n);
    Ok(n)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Self::parse_with_limits(input, &Limits::default())
    }

    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        let secret = input.trim();
        if secret.is_empty() {
            return Err(ParseError::MissingData("secret key".to_string()));
        }
        Ok(SharedData {
            secret,
            limits: *limits,
            five_zeroes: None,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "lowest number";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(five_zeroes(shared)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "lowest number";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // six zeroes imply five, so nothing below the first five-zero hash qualifies
        let start = five_zeroes(shared)?;
        Ok(mine(shared.secret, start, 6, &shared.limits)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_five_zeroes() {
        for (secret, expected) in [("abcdef", "609043"), ("pqrstuv", "1048970")] {
            let mut shared = Solver::parse(secret).unwrap();
            assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_leading_zero_check() {
        let prefix = Md5::new_with_prefix("abcdef");
        assert!(has_leading_zeroes(&prefix, 609043, 5));
        assert!(!has_leading_zeroes(&prefix, 609043, 6));
        assert!(!has_leading_zeroes(&prefix, 609042, 5));
    }

    #[test]
    fn test_iteration_limit() {
        let mut shared = Solver::parse_with_limits("abcdef", &Limits::new(1000, 0)).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_empty_secret() {
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }
}
