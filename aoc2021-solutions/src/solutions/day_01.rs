//! Day 1: Sonar Sweep

use crate::utils::parse_int_list;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

const WINDOW: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(parse_int_list(input)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
        Ok(count_rising(depths).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
        let sums = sliding_window_sums(depths, WINDOW).map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok(count_rising(&sums).to_string())
    }
}

/// How many values are larger than the one before them
pub fn count_rising(values: &[u32]) -> usize {
    values.iter().tuple_windows().filter(|(prev, next)| next > prev).count()
}

/// Sum of every `window` consecutive values
pub fn sliding_window_sums(values: &[u32], window: usize) -> anyhow::Result<Vec<u32>> {
    anyhow::ensure!(window > 0, "sliding window must be at least one value wide");
    anyhow::ensure!(
        window <= values.len(),
        "sliding window of {window} exceeds {} measurements",
        values.len()
    );
    Ok(values.windows(window).map(|w| w.iter().sum()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_example_parts() {
        let mut depths = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut depths, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut depths, 2).unwrap(), "5");
    }

    #[test]
    fn test_count_rising_edge_cases() {
        assert_eq!(count_rising(&[]), 0);
        assert_eq!(count_rising(&[5]), 0);
        assert_eq!(count_rising(&[3, 3, 2, 4]), 1);
    }

    #[test]
    fn test_sliding_window_sums() {
        assert_eq!(sliding_window_sums(&[1, 2, 3, 4], 3).unwrap(), vec![6, 9]);
        assert_eq!(sliding_window_sums(&[1, 2], 2).unwrap(), vec![3]);
        assert!(sliding_window_sums(&[1, 2], 3).is_err());
        assert!(sliding_window_sums(&[1, 2], 0).is_err());
    }

    #[test]
    fn test_short_input_fails_part_two() {
        let mut depths = Solver::parse("1\n2\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut depths, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Solver::parse("12\nforward 5\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
