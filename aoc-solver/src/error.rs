//! Error types shared by every solver

use thiserror::Error;

/// Raised while turning raw puzzle input into a solver's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not have the expected shape
    #[error("invalid input format: {0}")]
    InvalidFormat(String),
    /// The input ended before all required data was read
    #[error("missing input data: {0}")]
    MissingData(String),
}

/// Raised while answering a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares this part but has no implementation for it
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input is well-formed but admits no answer
    #[error("no solution: {0}")]
    NoSolution(String),
    /// Any other failure while solving
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Raised by the registry when creating or running a solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/day{1:02}")]
    NotFound(u16, u8),
    #[error("year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

/// Raised while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("a solver is already registered for {0}/day{1:02}")]
    DuplicateSolver(u16, u8),
    #[error("cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
