//! Building blocks shared by the solvers

pub mod automaton;
pub mod grid;
pub mod records;
pub mod search;
