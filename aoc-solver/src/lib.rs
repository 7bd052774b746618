//! Advent of Code Solver Library
//!
//! A type-safe framework for puzzle solvers that parse a text input once and
//! answer several parts from the parsed data.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`], [`PartSolver`] and [`Solver`]: parse once, solve each part
//!   with mutable access to the shared data (so later parts can reuse cached work)
//! - [`Limits`]: iteration and search-space ceilings handed to solvers at parse time
//! - [`SolverInstance`] / [`DynSolver`]: timed, type-erased solver instances
//! - [`SolverRegistry`]: year/day lookup, filled by hand or from plugins
//!   submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, Limits, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Numbers;
//!
//! impl AocParser for Numbers {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .enumerate()
//!             .map(|(i, line)| {
//!                 line.parse().map_err(|_| ParseError::InvalidLine {
//!                     line: i + 1,
//!                     reason: "expected an integer".to_string(),
//!                 })
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Numbers {
//!     const LABEL: &'static str = "sum";
//!
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Numbers {
//!     const LABEL: &'static str = "product";
//!
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Numbers>(2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "1\n2\n3", &Limits::default()).unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2015, day = 6, tags = ["grid"])]
//! pub struct Solver;
//! ```
//!
//! `SolverRegistryBuilder::register_all_plugins` then picks up every
//! submitted solver of every linked crate.

mod error;
mod instance;
mod limits;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use limits::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_ITERATIONS, Limits};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
