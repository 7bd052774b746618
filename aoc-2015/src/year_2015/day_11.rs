use crate::utils::search::bounded_successor;
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["search"])]
pub struct Solver;

pub const PASSWORD_LENGTH: usize = 8;
const FORBIDDEN: [u8; 3] = [b'i', b'o', b'l'];

type Rule = fn(&[u8]) -> bool;

fn exact_length(password: &[u8]) -> bool {
    password.len() == PASSWORD_LENGTH
}

fn no_confusing_letters(password: &[u8]) -> bool {
    !password.iter().any(|b| FORBIDDEN.contains(b))
}

fn increasing_run(password: &[u8]) -> bool {
    password
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1)
}

fn two_pairs(password: &[u8]) -> bool {
    // taking the leftmost pair first never loses a later one
    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < password.len() {
        if password[i] == password[i + 1] {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    pairs >= 2
}

const RULES: [(&str, Rule); 4] = [
    ("exact length", exact_length),
    ("no i, o or l", no_confusing_letters),
    ("increasing run of three", increasing_run),
    ("two non-overlapping pairs", two_pairs),
];

pub fn is_valid(password: &[u8]) -> bool {
    RULES.iter().all(|(_, rule)| rule(password))
}

/// Increment like a base-26 number, `z` carrying into the letter before
pub fn increment(password: &[u8]) -> Vec<u8> {
    let mut next = password.to_vec();
    for letter in next.iter_mut().rev() {
        if *letter == b'z' {
            *letter = b'a';
        } else {
            *letter += 1;
            break;
        }
    }
    next
}

/// Increment, then jump past every password sharing a forbidden prefix
fn next_candidate(password: &[u8]) -> Vec<u8> {
    let mut next = increment(password);
    if let Some(pos) = next.iter().position(|b| FORBIDDEN.contains(b)) {
        next[pos] += 1;
        next[pos + 1..].fill(b'a');
    }
    next
}

#[derive(Debug)]
pub struct SharedData {
    passwords: Vec<Vec<u8>>,
    limits: Limits,
}

/// The `n`th valid password after the input (1-based), reusing earlier ones
fn nth_password(shared: &mut SharedData, n: usize) -> Result<String, SolveError> {
    while shared.passwords.len() <= n {
        let last = shared.passwords[shared.passwords.len() - 1].clone();
        let next = bounded_successor(
            last,
            &shared.limits,
            |p: &Vec<u8>| next_candidate(p),
            |p| is_valid(p),
        )?;
        shared.passwords.push(next);
    }
    Ok(String::from_utf8_lossy(&shared.passwords[n]).into_owned())
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
        let password = input.trim();
        if !password.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "'{}' is not made of lowercase letters",
                password
            )));
        }
        if !exact_length(password.as_bytes()) {
            return Err(ParseError::InvalidFormat(format!(
                "passwords have exactly {} letters, got {}",
                PASSWORD_LENGTH,
                password.len()
            )));
        }
        Ok(SharedData {
            passwords: vec![password.as_bytes().to_vec()],
            limits: *limits,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "next password";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        nth_password(shared, 1)
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "next password";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        nth_password(shared, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn next(password: &str) -> String {
        let mut shared = Solver::parse(password).unwrap();
        Solver::solve_part(&mut shared, 1).unwrap()
    }

    #[test]
    fn test_increment_carries() {
        assert_eq!(increment(b"xx"), b"xy");
        assert_eq!(increment(b"xz"), b"ya");
        assert_eq!(increment(b"azz"), b"baa");
        assert_eq!(increment(b"zz"), b"aa");
    }

    #[test]
    fn test_rules() {
        assert!(!no_confusing_letters(b"hijklmmn"));
        assert!(increasing_run(b"hijklmmn"));
        assert!(two_pairs(b"abbceffg"));
        assert!(!increasing_run(b"abbceffg"));
        assert!(!two_pairs(b"abbcegjk"));
        assert!(!two_pairs(b"abcaaabc"));
        // the run may end on the last letter
        assert!(increasing_run(b"aaaaaxyz"));
        assert!(is_valid(b"abcdffaa"));
    }

    #[test]
    fn test_pairs_may_repeat_a_letter() {
        assert!(two_pairs(b"aabcaabc"));
        assert!(two_pairs(b"bcdeaaaa"));
        assert!(is_valid(b"xyzaabaa"));
        // three in a row hold only one non-overlapping pair
        assert!(!two_pairs(b"abcdeaaa"));
    }

    #[test]
    fn test_next_password() {
        assert_eq!(next("abcdefgh"), "abcdffaa");
        assert_eq!(next("ghijklmn"), "ghjaabcc");
    }

    #[test]
    fn test_second_password_follows_first() {
        let mut shared = Solver::parse("abcdefgh").unwrap();
        let second = Solver::solve_part(&mut shared, 2).unwrap();
        assert_eq!(shared.passwords[1], b"abcdffaa");
        assert_eq!(second, "abcdffbb");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Solver::parse("abc").is_err());
        assert!(Solver::parse("abcdefgH").is_err());
    }
}
