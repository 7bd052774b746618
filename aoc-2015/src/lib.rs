//! Advent of Code 2015 puzzle solutions with automatic registration
//!
//! Every day under [`year_2015`] derives `AutoRegisterSolver`, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to find
//! it. The reusable pieces (line grammars, bounded grids, the cellular
//! automaton and the search drivers) live in [`utils`].

mod error;
pub mod utils;

#[cfg(feature = "year_2015")]
pub mod year_2015;

pub use error::PuzzleError;
