use crate::PuzzleError;
use crate::utils::records::{UnknownRule, capture_fields, parse_lines};
use crate::utils::search::{Extremum, check_search_space, factorial, try_best};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, Limits, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["search", "permutations"])]
pub struct Solver;

static RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+) would (\w+) (\d+) happiness units? by sitting next to (\w+)\.$")
        .expect("valid happiness pattern")
});

/// Happiness change of every guest next to every other guest, by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    names: Vec<&'a str>,
    happiness: Vec<Vec<i64>>,
}

impl<'a> Table<'a> {
    /// Build from `(guest, change, neighbour)` rules covering every ordered pair
    pub fn from_rules(rules: &[(&'a str, i64, &'a str)]) -> Result<Self, ParseError> {
        let names: Vec<&str> = rules
            .iter()
            .flat_map(|&(guest, _, neighbor)| [guest, neighbor])
            .unique()
            .collect();
        if names.is_empty() {
            return Err(ParseError::MissingData("no happiness rules".to_string()));
        }
        let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let mut happiness = vec![vec![None; names.len()]; names.len()];
        for &(guest, change, neighbor) in rules {
            happiness[index[guest]][index[neighbor]] = Some(change);
        }

        let happiness = happiness
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, change)| match change {
                        _ if i == j => Ok(0),
                        Some(change) => Ok(change),
                        None => Err(ParseError::MissingData(format!(
                            "no rule for {} sitting next to {}",
                            names[i], names[j]
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { names, happiness })
    }

    pub fn guests(&self) -> usize {
        self.names.len()
    }

    /// Same table plus a guest who neither gains nor loses anything
    pub fn with_neutral_guest(&self) -> Self {
        let mut happiness: Vec<Vec<i64>> = self
            .happiness
            .iter()
            .map(|row| row.iter().copied().chain([0]).collect())
            .collect();
        happiness.push(vec![0; self.names.len() + 1]);
        let mut names = self.names.clone();
        names.push("myself");
        Self { names, happiness }
    }

    /// Total change around a circular table, each guest counting both neighbours
    ///
    /// `None` when the total does not fit an `i64`.
    pub fn score(&self, seating: &[usize]) -> Option<i64> {
        seating
            .iter()
            .circular_tuple_windows()
            .try_fold(0i64, |total, (&a, &b)| {
                total
                    .checked_add(self.happiness[a][b])?
                    .checked_add(self.happiness[b][a])
            })
    }

    /// Best circular seating
    ///
    /// Rotations score the same, so guest 0 keeps the first seat and only the
    /// others are permuted.
    pub fn best_seating(&self, limits: &Limits) -> Result<(Vec<usize>, i64), PuzzleError> {
        let others = self.guests() - 1;
        check_search_space(factorial(others as u64), limits)?;

        let seatings = (1..self.guests())
            .permutations(others)
            .map(|rest| std::iter::once(0).chain(rest).collect::<Vec<_>>());
        let score = |seating: &Vec<usize>| {
            self.score(seating)
                .ok_or_else(|| PuzzleError::Overflow("happiness of a seating".to_string()))
        };
        try_best(seatings, score, Extremum::Max)?
            .ok_or_else(|| PuzzleError::NotFound("seating".to_string()))
    }
}

fn parse_rule(line: &str) -> anyhow::Result<(&str, i64, &str)> {
    let [guest, direction, amount, neighbor] = capture_fields(&RULE, line)?;
    let amount: i64 = amount
        .parse()
        .with_context(|| format!("bad amount '{}'", amount))?;
    let change = match direction {
        "gain" => amount,
        "lose" => -amount,
        other => return Err(UnknownRule(other.to_string()).into()),
    };
    if guest == neighbor {
        bail!("{} cannot sit next to themselves", guest);
    }
    Ok((guest, change, neighbor))
}

#[derive(Debug)]
pub struct SharedData<'a> {
    table: Table<'a>,
    limits: Limits,
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
        let mut seen = HashMap::new();
        let rules = parse_lines(input, |line| {
            let rule @ (guest, change, neighbor) = parse_rule(line)?;
            if let Some(previous) = seen.insert((guest, neighbor), change) {
                bail!(
                    "second rule for {} next to {} (was {})",
                    guest,
                    neighbor,
                    previous
                );
            }
            Ok(rule)
        })?;
        Ok(SharedData {
            table: Table::from_rules(&rules)?,
            limits: *limits,
        })
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "best happiness";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, score) = shared.table.best_seating(&shared.limits)?;
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "best happiness";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, score) = shared
            .table
            .with_neutral_guest()
            .best_seating(&shared.limits)?;
        Ok(score.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

    #[test]
    fn test_sample_best_seating() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "330");
    }

    #[test]
    fn test_neutral_guest_never_helps() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let with_guest: i64 = Solver::solve_part(&mut shared, 2).unwrap().parse().unwrap();
        assert!(with_guest <= 330);
        assert_eq!(shared.table.with_neutral_guest().guests(), 5);
    }

    #[test]
    fn test_incomplete_table() {
        let input = "A would gain 1 happiness unit by sitting next to B.\nB would gain 1 happiness unit by sitting next to A.\nA would gain 1 happiness unit by sitting next to C.";
        assert!(matches!(Solver::parse(input), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_unknown_direction() {
        let err = Solver::parse("A would win 5 happiness units by sitting next to B.").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRule {
                line: 1,
                name: "win".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_rule() {
        let input = "A would gain 1 happiness unit by sitting next to B.\nA would lose 1 happiness unit by sitting next to B.";
        assert!(matches!(Solver::parse(input), Err(ParseError::InvalidLine { line: 2, .. })));
    }

    #[test]
    fn test_happiness_overflow() {
        let input = "\
A would gain 9223372036854775807 happiness units by sitting next to B.
B would gain 1 happiness unit by sitting next to A.";
        let mut shared = Solver::parse(input).unwrap();
        let err = Solver::solve_part(&mut shared, 1).unwrap_err();
        assert_eq!(err.to_string(), "Solve failed: happiness of a seating overflows");
        assert_eq!(shared.table.score(&[0, 1]), None);
    }

    #[test]
    fn test_candidate_ceiling() {
        let mut shared = Solver::parse_with_limits(SAMPLE, &Limits::new(0, 5)).unwrap();
        // 3! arrangements for part 1, 4! for part 2
        assert!(Solver::solve_part(&mut shared, 1).is_err());
        let mut shared = Solver::parse_with_limits(SAMPLE, &Limits::new(0, 6)).unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_ok());
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    fn symmetric_table(values: &[i64], guests: usize) -> Table<'static> {
        const NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];
        let mut happiness = vec![vec![0; guests]; guests];
        let mut it = values.iter();
        for i in 0..guests {
            for j in i + 1..guests {
                let v = *it.next().unwrap();
                happiness[i][j] = v;
                happiness[j][i] = v;
            }
        }
        Table {
            names: NAMES[..guests].to_vec(),
            happiness,
        }
    }

    proptest! {
        #[test]
        fn prop_rotations_and_reflections_score_alike(
            values in prop::collection::vec(-100i64..100, 10),
            guests in 3usize..=5,
            shift in 0usize..5,
        ) {
            let table = symmetric_table(&values, guests);
            let seating: Vec<usize> = (0..guests).collect();
            let mut rotated = seating.clone();
            rotated.rotate_left(shift % guests);
            let reflected: Vec<usize> = seating.iter().rev().copied().collect();
            prop_assert_eq!(table.score(&seating), table.score(&rotated));
            prop_assert_eq!(table.score(&seating), table.score(&reflected));
        }

        #[test]
        fn prop_fixing_first_seat_loses_nothing(
            values in prop::collection::vec(-100i64..100, 10),
            guests in 3usize..=5,
        ) {
            let table = symmetric_table(&values, guests);
            let all = (0..guests).permutations(guests).filter_map(|s| table.score(&s)).max().unwrap();
            let (_, fixed) = table.best_seating(&Limits::default()).unwrap();
            prop_assert_eq!(all, fixed);
        }
    }
}
