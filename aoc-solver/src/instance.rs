//! Timed solver instances behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// The answer to one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer as the solver formatted it
    pub answer: String,
    /// Wall-clock time just before the part was solved
    pub solve_start: DateTime<Utc>,
    /// Wall-clock time right after the part returned
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving, `solve_end - solve_start`
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input for one (year, day) puzzle, ready to answer its parts
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`, recording how long parsing took.
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `input` - Raw puzzle input; the parsed data may borrow from it
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed data ready for [`DynSolver::solve`]
    /// * `Err(ParseError)` - `S::parse` rejected the input
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        debug!(year, day, bytes = input.len(), "parsed input");

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`SolverInstance`].
///
/// The registry hands these out so the runner can drive solvers of
/// different types through one interface.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} in {}", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the call
    ///
    /// Parts share the parsed data, so a later part may reuse work an
    /// earlier one left behind.
    ///
    /// # Arguments
    /// * `part` - The part number, starting at 1
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer with its start and end timestamps
    /// * `Err(SolveError::PartOutOfRange)` - `part` is 0 or above [`DynSolver::parts`]
    /// * `Err(SolveError)` - Any other failure reported by the solver
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing began
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished
    fn parse_end(&self) -> DateTime<Utc>;

    /// The Advent of Code year this instance was created for
    fn year(&self) -> u16;

    /// The day number (1-25) this instance was created for
    fn day(&self) -> u8;

    /// How many parts the underlying solver answers
    fn parts(&self) -> u8;

    /// Time spent parsing, `parse_end - parse_start`
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
