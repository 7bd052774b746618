use crate::utils::automaton::Automaton;
use crate::utils::grid::{Grid, Point};
use crate::utils::records::parse_lines;
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["grid", "simulation"])]
pub struct Solver;

pub const ROUNDS: usize = 100;

fn corners(grid: &Grid<bool>) -> Vec<Point> {
    let bounds = grid.bounds();
    let (right, bottom) = (bounds.width - 1, bounds.height - 1);
    vec![
        Point::new(0, 0),
        Point::new(right, 0),
        Point::new(0, bottom),
        Point::new(right, bottom),
    ]
}

pub fn lights_after(mut automaton: Automaton, rounds: usize) -> usize {
    automaton.run(rounds);
    automaton.lit_count()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let rows = parse_lines(input, |line| {
            line.chars()
                .map(|c| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    other => bail!("unexpected '{}' in light row", other),
                })
                .collect::<anyhow::Result<Vec<bool>>>()
        })?;
        Grid::from_rows(rows).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "lights on";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lights_after(Automaton::new(shared.clone()), ROUNDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "lights on";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let automaton = Automaton::with_stuck(shared.clone(), corners(shared));
        Ok(lights_after(automaton, ROUNDS).to_string())
    }
}
