//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first result of each day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// The part of the executor shared by reference with worker threads
struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: config.inputs.clone(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.sync_executor_config.inputs
    }

    /// Collect work items by filtering from registry metadata, in
    /// (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send one result per part to `tx`.
    ///
    /// Failed parts are sent as results; the returned error only reports
    /// problems of the executor itself, such as a closed channel.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;
        debug!(
            solvers = work_items.len(),
            strategy = ?cfg.parallelize_by,
            "executing"
        );

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_solver(work, &tx, cfg) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day => self.execute_parallel(work_items, &tx),
        }
    }

    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map_with(tx.clone(), |tx, work| run_solver(&work, tx, cfg).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                    (a, b) => a.or(b),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Report `error` as the outcome of every part of `work`
fn send_failed(
    tx: &Sender<SolverResult>,
    work: &WorkItem,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

/// Read, parse and solve one day; its parts run in order on this thread
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match cfg.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            let error = ExecutorError::InputRead {
                year,
                day,
                path: cfg.inputs.path_for(year, day),
                source,
            };
            warn!(year, day, "{error}");
            return send_failed(tx, work, error.into());
        }
    };

    let mut solver = match cfg.registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => return send_failed(tx, work, ExecutorError::Solver(e).into()),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    match solver.solve(part) {
        Ok(solved) => {
            debug!(year, day, part, elapsed = %solved.duration(), "part solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => {
            debug!(year, day, part, error = %e, "part failed");
            SolverResult::failed(year, day, part, ExecutorError::Solver(SolverError::SolveError(e)).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, RegisterableSolver, SolveError, Solver, SolverRegistryBuilder};
    use itertools::Itertools;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Part 1 sums the numbers, part 2 takes the largest
    struct Totals;

    impl AocParser for Totals {
        type SharedData<'a> = Vec<u32>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                .collect()
        }
    }

    impl Solver for Totals {
        const PARTS: u8 = 2;

        fn solve_part(numbers: &mut Vec<u32>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(numbers.iter().sum::<u32>().to_string()),
                2 => numbers
                    .iter()
                    .max()
                    .map(ToString::to_string)
                    .ok_or_else(|| SolveError::NoSolution("no numbers".into())),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry(days: &[u8]) -> SolverRegistry {
        days.iter()
            .try_fold(SolverRegistryBuilder::new(), |builder, &day| {
                Totals.register_with(builder, 2021, day)
            })
            .unwrap()
            .build()
    }

    fn config(dir: &Path, parallelize_by: ParallelizeBy, part_filter: Option<u8>) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter,
            tags: Vec::new(),
            inputs: InputStore::new(dir.to_path_buf()),
            thread_count: 2,
            parallelize_by,
            log_level: "warn",
            quiet: true,
        }
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        rx.into_iter()
            .sorted_by_key(|r| (r.year, r.day, r.part))
            .collect()
    }

    #[test]
    fn test_collect_work_items_applies_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path(), ParallelizeBy::Sequential, Some(2));
        cfg.day_filter = Some(9);
        let executor = Executor::new(registry(&[1, 9, 15]), &cfg).unwrap();

        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2021,
                day: 9,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_part_beyond_solver_is_skipped() {
        let temp = TempDir::new().unwrap();
        let cfg = config(temp.path(), ParallelizeBy::Day, Some(3));
        let executor = Executor::new(registry(&[1]), &cfg).unwrap();
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_results_for_every_part() {
        for strategy in [ParallelizeBy::Sequential, ParallelizeBy::Day] {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join("2021_day01.txt"), "1\n2\n3\n").unwrap();
            fs::write(temp.path().join("2021_day02.txt"), "10\n4\n").unwrap();
            let executor =
                Executor::new(registry(&[1, 2]), &config(temp.path(), strategy, None)).unwrap();

            let results = run(&executor);
            let answers: Vec<_> = results
                .iter()
                .map(|r| (r.day, r.part, r.answer.as_ref().unwrap().as_str()))
                .collect();
            assert_eq!(answers, [(1, 1, "6"), (1, 2, "3"), (2, 1, "14"), (2, 2, "10")]);

            let parse_reported: Vec<_> = results.iter().map(|r| r.parse_duration.is_some()).collect();
            assert_eq!(parse_reported, [true, false, true, false]);
        }
    }

    #[test]
    fn test_missing_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        let executor =
            Executor::new(registry(&[5]), &config(temp.path(), ParallelizeBy::Sequential, None)).unwrap();

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::InputRead { day: 5, .. }));
            assert_eq!(err.exit_code(), 3);
        }
    }

    #[test]
    fn test_parse_and_solve_failures_are_results() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2021_day03.txt"), "1\nx\n").unwrap();
        fs::write(temp.path().join("2021_day04.txt"), "").unwrap();
        let executor =
            Executor::new(registry(&[3, 4]), &config(temp.path(), ParallelizeBy::Day, None)).unwrap();

        let codes: Vec<_> = run(&executor)
            .iter()
            .map(|r| r.answer.as_ref().map_err(ArcExecutorError::exit_code).err())
            .collect();
        // Day 4 parses to an empty list: part 1 sums to 0, part 2 has no maximum
        assert_eq!(codes, [Some(4), Some(4), None, Some(5)]);
    }
}
