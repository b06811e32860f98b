//! Helpers shared between days

pub mod grid;
pub mod int_list;
pub mod shortest_path;

pub use grid::{Grid, GridError, Pos};
pub use int_list::{IntListError, parse_int_list};
pub use shortest_path::{
    GridSearch, INFINITE_COST, SearchStats, corner_to_corner_cost, shortest_path_cost,
    shortest_path_cost_by,
};
