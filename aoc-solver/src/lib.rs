//! Advent of Code solver framework
//!
//! Each puzzle is a type implementing [`Solver`]: it parses its input once
//! into shared data and then answers one or more parts against that data.
//! Solvers register themselves at link time as [`SolverPlugin`]s, and a
//! [`SolverRegistry`] turns a (year, day, input) triple into a
//! [`DynSolver`] that the runner can drive without knowing the concrete type.
//!
//! # Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegisterableSolver,
//!     SolveError, SolverRegistryBuilder,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(depths: &mut Vec<u32>) -> Result<String, SolveError> {
//!         Ok(depths.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = Depths
//!     .register_with(SolverRegistryBuilder::new(), 2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n3\n2\n5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "11");
//! ```
//!
//! Adding `#[derive(AutoRegisterSolver)]` with `#[aoc(year = .., day = ..)]`
//! submits the solver as a plugin, so
//! [`SolverRegistryBuilder::register_all_plugins`] picks it up.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
