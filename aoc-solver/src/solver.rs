//! Parsing and solving traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on.
///
/// `SharedData` is a generic associated type so a solver may either own its
/// parsed data or borrow straight from the input string.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2\n").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything the parts want to memoise between them.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// One part of a puzzle, selected at compile time by `N`.
///
/// Implement this once per part and let `#[derive(AocSolver)]` wire the
/// parts into [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver with a fixed number of parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///
///     fn solve_part(depths: &mut Vec<u32>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(depths.iter().max().copied().unwrap_or(0).to_string()),
///             2 => Ok(depths.iter().sum::<u32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut depths = Depths::parse("3\n9\n4").unwrap();
/// assert_eq!(Depths::solve_part(&mut depths, 1).unwrap(), "9");
/// assert_eq!(Depths::solve_part(&mut depths, 2).unwrap(), "16");
/// ```
pub trait Solver: AocParser {
    /// Number of parts, counted from 1
    const PARTS: u8;

    /// Answer `part`.
    ///
    /// Parts run in order against the same `shared` value, so an earlier
    /// part may leave intermediate results behind for a later one.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// before the solver sees them.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
