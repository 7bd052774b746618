use crate::utils::grid::{Bounds, Grid, Instruction, RuleTable};
use crate::utils::records::parse_lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

pub const LIGHTS: Bounds = Bounds::new(1000, 1000);

/// Fold the whole program into a fresh grid
pub fn run_program(
    program: &[Instruction],
    bounds: Bounds,
    rules: &RuleTable,
) -> Result<Grid<u32>, SolveError> {
    let mut grid = Grid::new(bounds);
    for instruction in program {
        grid.apply(instruction, rules)?;
    }
    debug!(instructions = program.len(), "light program applied");
    Ok(grid)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    const LABEL: &'static str = "turned on lights";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = run_program(shared, LIGHTS, &RuleTable::SWITCH)?;
        Ok(grid.lit_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    const LABEL: &'static str = "total brightness";

    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = run_program(shared, LIGHTS, &RuleTable::DIMMER)?;
        Ok(grid.total_brightness().to_string())
    }
}
