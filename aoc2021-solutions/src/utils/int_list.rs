//! Newline-separated integer lists

use aoc_solver::ParseError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntListError {
    #[error("integer list is empty")]
    Empty,
    #[error("line {line}: {text:?} is not a valid integer")]
    InvalidInteger { line: usize, text: String },
}

impl From<IntListError> for ParseError {
    fn from(err: IntListError) -> Self {
        match err {
            IntListError::Empty => ParseError::MissingData(err.to_string()),
            _ => ParseError::InvalidFormat(err.to_string()),
        }
    }
}

/// Parse one integer per line; surrounding whitespace on a line is ignored.
pub fn parse_int_list<T: FromStr>(input: &str) -> Result<Vec<T>, IntListError> {
    let body = input.trim_end();
    if body.is_empty() {
        return Err(IntListError::Empty);
    }

    body.lines()
        .enumerate()
        .map(|(idx, line)| {
            line.trim()
                .parse()
                .map_err(|_| IntListError::InvalidInteger {
                    line: idx + 1,
                    text: line.to_string(),
                })
        })
        .collect()
}
