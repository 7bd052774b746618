use crate::PuzzleError;
use crate::utils::records::{capture_fields, parse_lines};
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 19, tags = ["search", "strings"])]
pub struct Solver;

const ELECTRON: &str = "e";

static REPLACEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+) => (\w+)$").expect("valid replacement pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl<'a> Replacement<'a> {
    fn parse(line: &'a str) -> anyhow::Result<Self> {
        let [from, to] = capture_fields(&REPLACEMENT, line)?;
        Ok(Self { from, to })
    }
}

pub struct SharedData<'a> {
    replacements: Vec<Replacement<'a>>,
    molecule: &'a str,
    limits: Limits,
}

/// Every molecule one replacement away from `molecule`
pub fn single_replacements(replacements: &[Replacement<'_>], molecule: &str) -> HashSet<String> {
    let mut molecules = HashSet::new();
    for rule in replacements {
        // every start position, overlapping occurrences included
        for (at, _) in molecule.char_indices() {
            if molecule[at..].starts_with(rule.from) {
                molecules.insert(format!(
                    "{}{}{}",
                    &molecule[..at],
                    rule.to,
                    &molecule[at + rule.from.len()..]
                ));
            }
        }
    }
    molecules
}

/// Steps needed to build `molecule` from a single electron
///
/// Works backwards: each step undoes the replacement with the longest
/// product present (earlier rules win ties) at its leftmost occurrence, and
/// an electron rule finishes once its product is the whole molecule.
pub fn fewest_steps(
    replacements: &[Replacement<'_>],
    molecule: &str,
    limits: &Limits,
) -> Result<u64, PuzzleError> {
    let mut current = molecule.to_string();
    for steps in 0..limits.max_iterations {
        if current == ELECTRON {
            return Ok(steps);
        }
        if replacements
            .iter()
            .any(|rule| rule.from == ELECTRON && rule.to == current)
        {
            debug!(steps = steps + 1, "molecule reduced to an electron");
            return Ok(steps + 1);
        }

        let mut chosen: Option<(Replacement<'_>, usize)> = None;
        for rule in replacements.iter().filter(|rule| rule.from != ELECTRON) {
            if chosen.is_some_and(|(best, _)| best.to.len() >= rule.to.len()) {
                continue;
            }
            if let Some(at) = current.find(rule.to) {
                chosen = Some((*rule, at));
            }
        }

        let (rule, at) = chosen.ok_or_else(|| {
            PuzzleError::NotFound(format!("replacement reducing '{}'", current))
        })?;
        current.replace_range(at..at + rule.to.len(), rule.from);
    }
    Err(PuzzleError::IterationLimit(limits.max_iterations))
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
        let trimmed = input.trim_end();
        let (rules, molecule) = trimmed
            .rsplit_once('\n')
            .map(|(rules, molecule)| (rules, molecule.trim()))
            .ok_or_else(|| ParseError::MissingData("replacements and molecule".to_string()))?;
        if molecule.is_empty() || !molecule.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::MissingData(format!(
                "molecule on the last line, got '{}'",
                molecule
            )));
        }
        let replacements = parse_lines(rules, Replacement::parse)?;
        if replacements.is_empty() {
            return Err(ParseError::MissingData("replacements".to_string()));
        }
        Ok(SharedData {
            replacements,
            molecule,
            limits: *limits,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "distinct molecules";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(single_replacements(&shared.replacements, shared.molecule)
            .len()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "fewest steps";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fewest_steps(&shared.replacements, shared.molecule, &shared.limits)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const RULES: &str = "e => H\ne => O\nH => HO\nH => OH\nO => HH\n";

    fn solve(molecule: &str, part: u8) -> Result<String, SolveError> {
        let input = format!("{}\n{}\n", RULES, molecule);
        let mut shared = Solver::parse(&input).unwrap();
        Solver::solve_part(&mut shared, part)
    }

    #[test]
    fn test_distinct_molecules() {
        assert_eq!(solve("HOH", 1).unwrap(), "4");
        assert_eq!(solve("HOHOHO", 1).unwrap(), "7");
    }

    #[test]
    fn test_overlapping_occurrences() {
        let rules = [Replacement { from: "HH", to: "X" }];
        let molecules = single_replacements(&rules, "HHH");
        assert_eq!(molecules, HashSet::from(["XH".to_string(), "HX".to_string()]));
    }

    #[test]
    fn test_fewest_steps() {
        assert_eq!(solve("HOH", 2).unwrap(), "3");
        assert_eq!(solve("HOHOHO", 2).unwrap(), "6");
    }

    #[test]
    fn test_stuck_reduction() {
        assert!(matches!(solve("HX", 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_step_limit() {
        let input = format!("{}\nHOHOHO\n", RULES);
        let shared = Solver::parse_with_limits(&input, &Limits::new(3, 0)).unwrap();
        assert_eq!(
            fewest_steps(&shared.replacements, shared.molecule, &shared.limits),
            Err(PuzzleError::IterationLimit(3))
        );
    }

    #[test]
    fn test_parse() {
        let shared = Solver::parse("H => HO\nO => HH\n\nHOH").unwrap();
        assert_eq!(shared.replacements.len(), 2);
        assert_eq!(shared.molecule, "HOH");
        assert!(matches!(
            Solver::parse("H -> HO\n\nHOH"),
            Err(ParseError::InvalidLine { line: 1, .. })
        ));
        assert!(matches!(Solver::parse("HOH"), Err(ParseError::MissingData(_))));
    }
}
