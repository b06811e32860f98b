//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How solvers are spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver in order on the calling thread
    Sequential,
    /// Run different days concurrently; parts of one day stay in order (default)
    #[default]
    Day,
}

/// Advent of Code 2021 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2021", about = "Run Advent of Code 2021 solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{DD}.txt` puzzle inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read this file as the input of the selected day
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
