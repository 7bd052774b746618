use crate::PuzzleError;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::{Number, Value};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["json"])]
pub struct Solver;

/// Integer value of a JSON number, `None` for fractions and exponents
///
/// Only integers count towards the sums; numbers are kept as written, so an
/// integer too large for the sum is reported instead of being rounded.
fn integer(n: &Number) -> Result<Option<i128>, PuzzleError> {
    if n.is_f64() {
        return Ok(None);
    }
    n.to_string()
        .parse()
        .map(Some)
        .map_err(|_| PuzzleError::Overflow(format!("number {}", n)))
}

/// Sum every integer in `value`, leaving out subtrees rejected by `skip`
pub fn sum_numbers<F>(value: &Value, skip: &F) -> Result<i128, PuzzleError>
where
    F: Fn(&Value) -> bool,
{
    if skip(value) {
        return Ok(0);
    }
    let mut children: Box<dyn Iterator<Item = &Value>> = match value {
        Value::Number(n) => return Ok(integer(n)?.unwrap_or(0)),
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(fields) => Box::new(fields.values()),
        Value::Null | Value::Bool(_) | Value::String(_) => return Ok(0),
    };
    children.try_fold(0i128, |total, child| {
        total
            .checked_add(sum_numbers(child, skip)?)
            .ok_or_else(|| PuzzleError::Overflow("sum".to_string()))
    })
}

/// Objects holding the value "red" anywhere directly inside
pub fn is_red_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|fields| fields.values().any(|v| v.as_str() == Some("red")))
}

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        serde_json::from_str(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "sum";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &|_: &Value| false)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "sum";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &is_red_object)?.to_string())
    }
}
