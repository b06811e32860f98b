//! AOC 2021 CLI - runs the registered Advent of Code 2021 solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import the solutions crate to link its solver plugins
use aoc2021_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, SolverResult, WorkItem};
use itertools::Itertools;
use output::OutputFormatter;
use std::any::Any;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run the selected solvers and return the process exit status
fn run(args: Args) -> Result<u8, CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_level);

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(error::ArcExecutorError::from)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(0);
    }

    let missing = missing_inputs(&executor, &work_items);
    if !missing.is_empty() {
        warn!(
            count = missing.len(),
            "missing input files: {}",
            missing.iter().map(|(year, day)| format!("{year}/day{day:02}")).join(", ")
        );
    }

    info!(
        solvers = work_items.len(),
        threads = config.thread_count,
        strategy = ?config.parallelize_by,
        "running solvers"
    );
    let results = run_executor(executor, &work_items, config.quiet)?;
    Ok(first_failure_code(&results))
}

/// `RUST_LOG` wins over the level chosen with `-v`
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Days whose input file is not present
fn missing_inputs(executor: &Executor, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor, printing results in order as they become ready
fn run_executor(
    executor: Executor,
    work_items: &[WorkItem],
    quiet: bool,
) -> Result<Vec<SolverResult>, CliError> {
    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle.join().map_err(panic_error)??;

    formatter.print_summary(&results);

    Ok(results)
}

/// Turn a worker thread's panic payload into an error
fn panic_error(payload: Box<dyn Any + Send>) -> CliError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    CliError::ExecutorPanicked(message)
}

/// Exit status of the first failed part in output order, 0 if all succeeded
fn first_failure_code(results: &[SolverResult]) -> u8 {
    results
        .iter()
        .find_map(|r| r.answer.as_ref().err())
        .map_or(0, |e| e.exit_code())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use aoc_solver::{ParseError, SolveError, SolverError};
    use chrono::TimeDelta;

    fn result(day: u8, answer: Result<String, ExecutorError>) -> SolverResult {
        SolverResult {
            year: 2021,
            day,
            part: 1,
            answer: answer.map_err(Into::into),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_first_failure_code() {
        assert_eq!(first_failure_code(&[]), 0);
        assert_eq!(first_failure_code(&[result(1, Ok("7".into()))]), 0);

        let results = [
            result(1, Ok("7".into())),
            result(
                9,
                Err(ExecutorError::Solver(SolverError::SolveError(SolveError::NoSolution(
                    "none".into(),
                )))),
            ),
            result(
                15,
                Err(ExecutorError::Solver(SolverError::ParseError(ParseError::MissingData(
                    "empty".into(),
                )))),
            ),
        ];
        assert_eq!(first_failure_code(&results), 5);
    }

    #[test]
    fn test_thread_panic_is_not_a_config_error() {
        let handle = std::thread::spawn(|| -> Result<(), error::ArcExecutorError> {
            panic!("solver exploded")
        });
        let err = handle.join().map_err(panic_error).unwrap_err();

        assert!(matches!(&err, CliError::ExecutorPanicked(m) if m == "solver exploded"));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("Executor thread panicked"));

        let formatted = std::thread::spawn(|| -> u8 { panic!("part {}", 2) }).join().unwrap_err();
        assert!(matches!(panic_error(formatted), CliError::ExecutorPanicked(m) if m == "part 2"));
    }

    #[test]
    fn test_registry_respects_tags() {
        let all = build_registry(&[]).unwrap();
        assert!(all.contains(2021, 1));
        assert!(all.contains(2021, 15));

        let dijkstra = build_registry(&["grid".into(), "dijkstra".into()]).unwrap();
        assert!(!dijkstra.contains(2021, 9));
        assert!(dijkstra.contains(2021, 15));

        assert!(build_registry(&["no-such-tag".into()]).unwrap().is_empty());
    }
}
