use crate::PuzzleError;
use crate::utils::records::{UnknownRule, capture_fields, parse_lines};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 16, tags = ["records"])]
pub struct Solver;

/// What the ticker tape reported about the right aunt
const TICKER_TAPE: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

static SUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Sue (\d+): (.+)$").expect("valid aunt pattern"));
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+): (\d+)$").expect("valid attribute pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Exact,
    Greater,
    Fewer,
}

impl Comparison {
    fn accepts(self, remembered: u32, reading: u32) -> bool {
        match self {
            Comparison::Exact => remembered == reading,
            Comparison::Greater => remembered > reading,
            Comparison::Fewer => remembered < reading,
        }
    }
}

fn exact(_: usize) -> Comparison {
    Comparison::Exact
}

/// The retroencabulator reads ranges for some attributes
fn ranged(attribute: usize) -> Comparison {
    match TICKER_TAPE[attribute].0 {
        "cats" | "trees" => Comparison::Greater,
        "pomeranians" | "goldfish" => Comparison::Fewer,
        _ => Comparison::Exact,
    }
}

/// An aunt and what is remembered about her, attributes as ticker tape indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aunt {
    pub number: u32,
    attributes: Vec<(usize, u32)>,
}

impl Aunt {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let [number, attributes] = capture_fields(&SUE, line)?;
        let attributes = attributes
            .split(", ")
            .map(|chunk| -> anyhow::Result<(usize, u32)> {
                let [name, count] = capture_fields(&ATTRIBUTE, chunk)?;
                let index = TICKER_TAPE
                    .iter()
                    .position(|(known, _)| *known == name)
                    .ok_or_else(|| UnknownRule(name.to_string()))?;
                let count = count
                    .parse()
                    .with_context(|| format!("bad count '{}'", count))?;
                Ok((index, count))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self {
            number: number
                .parse()
                .with_context(|| format!("bad aunt number '{}'", number))?,
            attributes,
        })
    }

    fn matches(&self, comparison: fn(usize) -> Comparison) -> bool {
        self.attributes
            .iter()
            .all(|&(index, count)| comparison(index).accepts(count, TICKER_TAPE[index].1))
    }
}

fn find_aunt(aunts: &[Aunt], comparison: fn(usize) -> Comparison) -> Result<String, SolveError> {
    let aunt = aunts
        .iter()
        .find(|aunt| aunt.matches(comparison))
        .ok_or_else(|| PuzzleError::NotFound("matching aunt".to_string()))?;
    Ok(aunt.number.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Aunt>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, Aunt::parse)
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "aunt Sue number";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, exact)
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "aunt Sue number";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, ranged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const AUNTS: &str = "\
Sue 1: goldfish: 6, trees: 9, akitas: 0
Sue 2: children: 3, cats: 7, perfumes: 1
Sue 3: cats: 8, goldfish: 2, trees: 4
Sue 4: cars: 2, vizslas: 0, cats: 7";

    #[test]
    fn test_first_exact_match() {
        let mut shared = Solver::parse(AUNTS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_ranged_match() {
        let mut shared = Solver::parse(AUNTS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn test_unknown_attribute() {
        let err = Solver::parse("Sue 1: cats: 1\nSue 2: dogs: 4").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRule {
                line: 2,
                name: "dogs".to_string()
            }
        );
    }

    #[test]
    fn test_no_match() {
        let mut shared = Solver::parse("Sue 1: cats: 1").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
