//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::input::InputStore;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    /// Where puzzle inputs are read from
    pub inputs: InputStore,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: &'static str,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "--threads must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        let inputs = match args.input {
            Some(path) => InputStore::with_override(args.input_dir, path),
            None => InputStore::new(args.input_dir),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            inputs,
            thread_count,
            parallelize_by: args.parallelize_by,
            log_level: log_level(args.verbose),
            quiet: args.quiet,
        })
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc2021").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(config(&["--threads", "0"]), Err(CliError::Config(_))));
        assert_eq!(config(&["--threads", "3"]).unwrap().thread_count, 3);
        assert!(config(&[]).unwrap().thread_count >= 1);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(config(&[]).unwrap().log_level, "warn");
        assert_eq!(config(&["-v"]).unwrap().log_level, "info");
        assert_eq!(config(&["-vv"]).unwrap().log_level, "debug");
        assert_eq!(config(&["-vvvv"]).unwrap().log_level, "trace");
    }

    #[test]
    fn test_input_override() {
        let cfg = config(&["--input-dir", "puzzles", "-d", "15", "-i", "cave.txt"]).unwrap();
        assert_eq!(cfg.inputs.path_for(2021, 15), Path::new("cave.txt"));

        let cfg = config(&["--input-dir", "puzzles"]).unwrap();
        assert_eq!(cfg.inputs.path_for(2021, 9), Path::new("puzzles/2021_day09.txt"));
    }
}
