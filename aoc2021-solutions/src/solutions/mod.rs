//! Registered Advent of Code 2021 solvers

pub mod day_01;
pub mod day_09;
pub mod day_15;
