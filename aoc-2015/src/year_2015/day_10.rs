use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["simulation"])]
pub struct Solver;

const FIRST_ROUNDS: usize = 40;
const SECOND_ROUNDS: usize = 50;

#[derive(Debug)]
pub struct SharedData {
    digits: Vec<u8>,
    rounds_done: usize,
}

/// Describe runs of equal digits: "1211" becomes "111221"
pub fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 2);
    for (count, digit) in digits.iter().dedup_with_count() {
        // counts above 9 take several digits
        next.extend(count.to_string().bytes().map(|b| b - b'0'));
        next.push(*digit);
    }
    next
}

/// Advance the cached sequence to `rounds` total rounds
fn advance_to(shared: &mut SharedData, rounds: usize) -> usize {
    while shared.rounds_done < rounds {
        shared.digits = look_and_say(&shared.digits);
        shared.rounds_done += 1;
    }
    shared.digits.len()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let seed = input.trim();
        if seed.is_empty() {
            return Err(ParseError::MissingData("starting sequence".to_string()));
        }
        let digits = seed
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("'{}' is not a digit", c)))
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            digits,
            rounds_done: 0,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "length";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(advance_to(shared, FIRST_ROUNDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "length";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(advance_to(shared, SECOND_ROUNDS).to_string())
    }
}
