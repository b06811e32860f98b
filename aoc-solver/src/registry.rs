//! Plugin registry mapping (year, day) to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Years addressable by the registry (2015..=2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    let year_offset = year.checked_sub(BASE_YEAR)? as usize;
    if year_offset >= MAX_YEARS || day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some(year_offset * DAYS_PER_YEAR + (day as usize - 1))
}

#[inline]
fn year_day(slot: usize) -> (u16, u8) {
    (
        BASE_YEAR + (slot / DAYS_PER_YEAR) as u16,
        (slot % DAYS_PER_YEAR) as u8 + 1,
    )
}

/// Builds a solver for one input. Shared across the runner's worker threads.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a solver without running it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// A solver type that can add itself to a [`SolverRegistryBuilder`].
///
/// Every `Solver + Sync + 'static` gets this for free, which is what lets
/// unit structs be stored as `&'static dyn RegisterableSolver` in a
/// [`SolverPlugin`].
pub trait RegisterableSolver: Sync {
    /// Register this solver for `year`/`day` on `builder`
    ///
    /// # Arguments
    /// * `builder` - The builder to add the factory to
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    ///
    /// # Returns
    /// * `Ok(SolverRegistryBuilder)` - The builder with the factory added
    /// * `Err(RegistrationError)` - The slot was taken or out of range
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// How many parts the solver answers
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            SolverInstance::<S>::new(year, day, input)
                .map(|instance| Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted at link time through `inventory`.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`, but can be written
/// by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<&str, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(input: &mut &str, _part: u8) -> Result<String, SolveError> {
///         Ok(input.to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin { year: 2021, day: 25, solver: &Echo, tags: &["demo"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels the runner can filter on
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Collects factories, then freezes them into a [`SolverRegistry`]
pub struct SolverRegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register `factory` for `year`/`day`.
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year (2015 onwards)
    /// * `day` - The day number (1-25)
    /// * `parts` - How many parts the solver answers
    /// * `factory` - Parses an input into a boxed [`DynSolver`]
    ///
    /// # Returns
    /// * `Ok(Self)` - The builder with the factory stored
    /// * `Err(RegistrationError::DuplicateSolver)` - A solver already owns this year/day
    /// * `Err(RegistrationError::InvalidYearDay)` - The year/day is outside the supported range
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let entry = &mut self.entries[index];
        if entry.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *entry = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register every plugin linked into the binary
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// # Arguments
    /// * `filter` - Called once per linked [`SolverPlugin`]; `true` keeps it
    ///
    /// # Returns
    /// * `Ok(Self)` - The builder with every accepted plugin registered
    /// * `Err(RegistrationError)` - Two accepted plugins claim the same year/day
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table of solver factories
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Registered solvers in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            let entry = entry.as_ref()?;
            let (year, day) = year_day(index);
            Some(FactoryInfo {
                year,
                day,
                parts: entry.parts,
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let entry = self.entries.get(slot(year, day)?)?.as_ref()?;
        Some(FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `input` - Raw puzzle input; the returned solver may borrow from it
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - A parsed instance ready to solve parts
    /// * `Err(SolverError::InvalidYearDay)` - The year/day is outside the supported range
    /// * `Err(SolverError::NotFound)` - Nothing is registered for this year/day
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}
