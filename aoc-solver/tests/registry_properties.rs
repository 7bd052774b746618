//! Registry and solver instance behavior

use aoc_solver::{
    AocParser, AocSolver, Limits, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Budget;

/// Numbers plus the iteration ceiling handed over at parse time
struct BudgetData {
    numbers: Vec<u64>,
    max_iterations: u64,
}

impl AocParser for Budget {
    type SharedData<'a> = BudgetData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Self::parse_with_limits(input, &Limits::default())
    }

    fn parse_with_limits<'a>(
        input: &'a str,
        limits: &Limits,
    ) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = input
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.trim().parse().map_err(|_| ParseError::InvalidLine {
                    line: i + 1,
                    reason: format!("expected an integer, got '{}'", line),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(BudgetData {
            numbers,
            max_iterations: limits.max_iterations,
        })
    }
}

impl PartSolver<1> for Budget {
    const LABEL: &'static str = "total";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.numbers.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Budget {
    const LABEL: &'static str = "ceiling";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.max_iterations.to_string())
    }
}

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver::<Budget>(2015, 7)
        .unwrap()
        .build()
}

#[test]
fn test_limits_reach_the_solver() {
    let limits = Limits::new(42, 7);
    let mut solver = registry().create_solver(2015, 7, "1\n2", &limits).unwrap();
    let result = solver.solve(2).unwrap();
    assert_eq!(result.answer, "42");
    assert_eq!(result.label, "ceiling");
    assert_eq!(solver.parts(), 2);
    assert_eq!((solver.year(), solver.day()), (2015, 7));
}

#[test]
fn test_parse_failure_reports_line() {
    let result = registry().create_solver(2015, 7, "1\nx", &Limits::default());
    match result {
        Err(SolverError::ParseError(ParseError::InvalidLine { line, .. })) => assert_eq!(line, 2),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("expected a parse error"),
    }
}

#[test]
fn test_missing_and_invalid_lookups() {
    let registry = registry();
    assert!(matches!(
        registry.create_solver(2015, 8, "", &Limits::default()),
        Err(SolverError::NotFound(2015, 8))
    ));
    assert!(matches!(
        registry.create_solver(2015, 26, "", &Limits::default()),
        Err(SolverError::InvalidYearDay(2015, 26))
    ));
    assert!(matches!(
        registry.create_solver(2014, 1, "", &Limits::default()),
        Err(SolverError::InvalidYearDay(2014, 1))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<Budget>(2015, 7)
        .unwrap()
        .register_solver::<Budget>(2015, 7);
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2015, 7))));
}

#[test]
fn test_out_of_range_part_through_instance() {
    let mut solver = registry()
        .create_solver(2015, 7, "5", &Limits::default())
        .unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

proptest! {
    #[test]
    fn prop_iter_info_is_ordered(days in prop::collection::btree_set(1u8..=25, 1..8)) {
        let mut builder = SolverRegistryBuilder::new();
        // register in reverse to show ordering comes from storage
        for day in days.iter().rev() {
            builder = builder.register_solver::<Budget>(2016, *day).unwrap();
        }
        let registry = builder.build();
        let listed: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
        prop_assert_eq!(listed, days.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(registry.storage().len(), registry.storage().iter_info().count());
    }

    #[test]
    fn prop_total_is_sum(numbers in prop::collection::vec(0u64..1000, 1..20)) {
        let input = numbers.iter().map(u64::to_string).collect::<Vec<_>>().join("\n");
        let mut solver = registry().create_solver(2015, 7, &input, &Limits::default()).unwrap();
        let result = solver.solve(1).unwrap();
        prop_assert_eq!(result.answer.clone(), numbers.iter().sum::<u64>().to_string());
        prop_assert!(result.duration() >= chrono::TimeDelta::zero());
    }
}
