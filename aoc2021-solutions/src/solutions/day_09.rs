//! Day 9: Smoke Basin

use crate::utils::{Grid, Pos};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let heights = Grid::parse_digits(input)?;
        debug!(rows = heights.rows(), cols = heights.cols(), "parsed height map");
        Ok(heights)
    }
}

impl PartSolver<1> for Solver {
    fn solve(heights: &mut Grid<u8>) -> Result<String, SolveError> {
        let risk: u32 = low_points(heights)
            .map(|pos| u32::from(heights[pos]) + 1)
            .sum();
        Ok(risk.to_string())
    }
}

/// Cells strictly lower than every orthogonal neighbour
pub fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    heights.iter().filter_map(move |(pos, &height)| {
        heights
            .neighbors4(pos)
            .all(|next| heights[next] > height)
            .then_some(pos)
    })
}
