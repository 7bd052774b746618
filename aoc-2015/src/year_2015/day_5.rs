use crate::utils::records::parse_lines;
use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["records"])]
pub struct Solver;

const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

/// At least three vowels, a doubled letter and none of the forbidden pairs
pub fn is_nice(word: &str) -> bool {
    let vowels = word.chars().filter(|c| "aeiou".contains(*c)).count();
    let doubled = word.as_bytes().windows(2).any(|w| w[0] == w[1]);
    vowels >= 3 && doubled && !FORBIDDEN.iter().any(|pair| word.contains(pair))
}

/// A pair appearing twice without overlap and a letter repeated with one in between
pub fn is_nice_v2(word: &str) -> bool {
    let bytes = word.as_bytes();
    let repeated_pair = (0..bytes.len().saturating_sub(1))
        .tuple_combinations()
        .any(|(i, j)| j >= i + 2 && bytes[i..i + 2] == bytes[j..j + 2]);
    let sandwich = bytes.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, |line| {
            ensure!(
                line.bytes().all(|b| b.is_ascii_lowercase()),
                "'{}' is not a lowercase word",
                line
            );
            Ok(line)
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "nice words";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|word| is_nice(word)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "nice words";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|word| is_nice_v2(word)).count().to_string())
    }
}
