//! Day 15: Chiton
//!
//! The cave is a grid of risk levels. Part 1 asks for the lowest total risk
//! of any path from the top-left to the bottom-right corner; part 2 asks the
//! same of the cave tiled five times in each direction, where every tile step
//! away from the original raises each risk level by one, wrapping 9 back to 1.

use crate::utils::{Grid, GridError, corner_to_corner_cost};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use tracing::debug;

/// Tiles per side of the full cave
const FULL_CAVE_TILES: usize = 5;
const MAX_RISK: usize = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["2021", "grid", "dijkstra"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let cave = Grid::parse_digits(input)?;
        debug!(rows = cave.rows(), cols = cave.cols(), "parsed cave");
        Ok(cave)
    }
}

impl PartSolver<1> for Solver {
    fn solve(cave: &mut Grid<u8>) -> Result<String, SolveError> {
        lowest_total_risk(cave)
    }
}

impl PartSolver<2> for Solver {
    fn solve(cave: &mut Grid<u8>) -> Result<String, SolveError> {
        let full = expand_risk_levels(cave, FULL_CAVE_TILES, FULL_CAVE_TILES)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        debug!(rows = full.rows(), cols = full.cols(), "expanded cave");
        lowest_total_risk(&full)
    }
}

fn lowest_total_risk(cave: &Grid<u8>) -> Result<String, SolveError> {
    corner_to_corner_cost(cave)
        .map(|risk| risk.to_string())
        .ok_or_else(|| SolveError::NoSolution("bottom-right corner is unreachable".into()))
}

/// Raise `risk` by `steps`, cycling through 1..=9
pub fn wrap_risk(risk: u8, steps: usize) -> u8 {
    if steps == 0 {
        return risk;
    }
    ((usize::from(risk) + steps - 1) % MAX_RISK + 1) as u8
}

/// Tile `base` `vertical` x `horizontal` times, raising each tile's risk
/// levels by its distance from the top-left tile
pub fn expand_risk_levels(
    base: &Grid<u8>,
    vertical: usize,
    horizontal: usize,
) -> Result<Grid<u8>, GridError> {
    base.tiled(vertical, horizontal, |&risk, steps| wrap_risk(risk, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Pos;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn test_example_parts() {
        let mut cave = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut cave, 1).unwrap(), "40");
        assert_eq!(Solver::solve_part(&mut cave, 2).unwrap(), "315");
    }

    #[test]
    fn test_wrap_risk() {
        assert_eq!(wrap_risk(8, 0), 8);
        assert_eq!(wrap_risk(8, 1), 9);
        assert_eq!(wrap_risk(8, 2), 1);
        assert_eq!(wrap_risk(9, 1), 1);
        assert_eq!(wrap_risk(1, 8), 9);
        assert_eq!(wrap_risk(1, 9), 1);
        assert_eq!(wrap_risk(0, 1), 1);
    }

    #[test]
    fn test_expand_single_cell() {
        let base = Grid::parse_digits("8").unwrap();
        let full = expand_risk_levels(&base, 5, 5).unwrap();

        assert_eq!((full.rows(), full.cols()), (5, 5));
        assert_eq!(full[Pos::new(0, 0)], 8);
        assert_eq!(full[Pos::new(0, 1)], 9);
        assert_eq!(full[Pos::new(1, 1)], 1);
        assert_eq!(full[Pos::new(4, 4)], 7);
    }

    #[test]
    fn test_expand_example_first_row() {
        let base = Grid::parse_digits(EXAMPLE).unwrap();
        let full = expand_risk_levels(&base, 5, 5).unwrap();
        let first_row: String = full.row(0).unwrap().iter().map(|r| r.to_string()).collect();

        assert_eq!((full.rows(), full.cols()), (50, 50));
        assert_eq!(first_row, "11637517422274862853338597396444961841755517295286");
    }

    #[test]
    fn test_single_cell_cave() {
        let mut cave = Solver::parse("9\n").unwrap();
        assert_eq!(Solver::solve_part(&mut cave, 1).unwrap(), "0");
        // Every route crosses shifts 1 through 8 once each
        assert_eq!(Solver::solve_part(&mut cave, 2).unwrap(), "36");
    }

    #[test]
    fn test_parse_rejects_ragged_cave() {
        assert!(matches!(
            Solver::parse("123\n45\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
