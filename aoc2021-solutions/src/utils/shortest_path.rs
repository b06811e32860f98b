//! Uniform-cost search over 4-connected grids
//!
//! A path's cost is the sum of the entry costs of every cell it steps into;
//! the start cell itself is free. The frontier is a binary min-heap that
//! allows several entries per cell: instead of decreasing a key in place,
//! a cheaper discovery pushes a new entry, and entries for cells that are
//! already settled are dropped when they surface.

use super::grid::{Grid, Pos};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Cost recorded for cells no path has reached yet
pub const INFINITE_COST: u32 = u32::MAX;

/// Counters describing how much work a search did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, the start entry included
    pub pushed: usize,
    /// Cells whose cost became final
    pub settled: usize,
    /// Popped entries that referred to an already settled cell
    pub stale: usize,
}

/// A resumable Dijkstra search from one start cell.
///
/// `entry_cost` prices stepping into a cell; `None` makes the cell
/// impassable.
pub struct GridSearch<'g, T, F> {
    grid: &'g Grid<T>,
    entry_cost: F,
    costs: Grid<u32>,
    visited: Grid<bool>,
    frontier: BinaryHeap<Reverse<(u32, Pos)>>,
    stats: SearchStats,
}

impl<'g, T, F> GridSearch<'g, T, F>
where
    F: Fn(&T) -> Option<u32>,
{
    /// Start a search at `start`, or `None` if it lies outside the grid
    pub fn new(grid: &'g Grid<T>, start: Pos, entry_cost: F) -> Option<Self> {
        if !grid.contains(start) {
            return None;
        }
        let mut costs = grid.same_shape(INFINITE_COST);
        costs[start] = 0;

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0, start)));

        Some(Self {
            grid,
            entry_cost,
            costs,
            visited: grid.same_shape(false),
            frontier,
            stats: SearchStats {
                pushed: 1,
                ..SearchStats::default()
            },
        })
    }

    /// Expand the search until `target` is settled and return its cost.
    ///
    /// Returns `None` when `target` is outside the grid or cannot be
    /// reached. Costs settled by earlier calls are kept, so asking for a
    /// target that is already settled returns immediately.
    pub fn run_until(&mut self, target: Pos) -> Option<u32> {
        if !self.grid.contains(target) {
            return None;
        }
        if self.visited[target] {
            return Some(self.costs[target]);
        }

        let grid = self.grid;
        while let Some(Reverse((_, pos))) = self.frontier.pop() {
            if self.visited[pos] {
                self.stats.stale += 1;
                continue;
            }
            self.visited[pos] = true;
            self.stats.settled += 1;

            let cost = self.costs[pos];
            for next in grid.neighbors4(pos) {
                if self.visited[next] {
                    continue;
                }
                let Some(step) = (self.entry_cost)(&grid[next]) else {
                    continue;
                };
                let candidate = cost.saturating_add(step);
                if candidate < self.costs[next] {
                    trace!(?next, candidate, "frontier push");
                    self.costs[next] = candidate;
                    self.frontier.push(Reverse((candidate, next)));
                    self.stats.pushed += 1;
                }
            }

            // Every settled cell has had its edges relaxed
            if pos == target {
                debug!(?target, cost, stats = ?self.stats, "target settled");
                return Some(cost);
            }
        }

        debug!(?target, stats = ?self.stats, "frontier exhausted");
        None
    }

    /// Best cost found so far for `pos`, final once [`is_settled`](Self::is_settled)
    pub fn cost(&self, pos: Pos) -> Option<u32> {
        self.costs
            .get(pos)
            .copied()
            .filter(|&cost| cost != INFINITE_COST)
    }

    pub fn is_settled(&self, pos: Pos) -> bool {
        self.visited.get(pos).copied().unwrap_or(false)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Cheapest path cost from `start` to `target` with a custom entry cost
pub fn shortest_path_cost_by<T, F>(grid: &Grid<T>, start: Pos, target: Pos, entry_cost: F) -> Option<u32>
where
    F: Fn(&T) -> Option<u32>,
{
    GridSearch::new(grid, start, entry_cost)?.run_until(target)
}

/// Cheapest path cost where entering a cell costs its weight
pub fn shortest_path_cost(grid: &Grid<u8>, start: Pos, target: Pos) -> Option<u32> {
    shortest_path_cost_by(grid, start, target, |&weight| Some(u32::from(weight)))
}

/// Cheapest path cost from the top-left to the bottom-right cell
pub fn corner_to_corner_cost(grid: &Grid<u8>) -> Option<u32> {
    shortest_path_cost(grid, Pos::new(0, 0), grid.last_pos())
}
