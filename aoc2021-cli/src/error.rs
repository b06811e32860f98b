//! Error types for the CLI

use aoc_solver::SolverError;
use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),

    /// The executor thread panicked before reporting back
    #[error("Executor thread panicked: {0}")]
    ExecutorPanicked(String),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Registration(_) | CliError::ExecutorPanicked(_) => 1,
            CliError::Io(_) => 3,
            CliError::Executor(e) => e.exit_code(),
        }
    }
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input file could not be read
    #[error("Input read failed for {year}/{day:02} ({}): {source}", .path.display())]
    InputRead {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver lookup, parse or solve failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ExecutorError {
    /// Process exit status for this failure
    ///
    /// A `Multiple` takes the status of its first member.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExecutorError::InputRead { .. } => 3,
            ExecutorError::Solver(SolverError::ParseError(_)) => 4,
            ExecutorError::Solver(SolverError::SolveError(_)) => 5,
            ExecutorError::Solver(_) | ExecutorError::ChannelSend | ExecutorError::ThreadPool(_) => 1,
            ExecutorError::Multiple(errors) => errors.first().map_or(1, |e| e.exit_code()),
        }
    }
}

impl ArcExecutorError {
    pub fn exit_code(&self) -> u8 {
        self.inner().exit_code()
    }

    /// Combine two Arc-wrapped errors into one, flattening nested `Multiple`s
    /// and keeping `first` ahead of `second`
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
