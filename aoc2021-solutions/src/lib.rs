//! Advent of Code 2021 solutions
//!
//! Every solver in [`solutions`] registers itself through
//! `#[derive(AutoRegisterSolver)]`; linking this crate is enough for a
//! `SolverRegistryBuilder::register_all_plugins` call to find them.
//! [`utils`] holds the parsing and grid search helpers the days share.

pub mod solutions;
pub mod utils;
