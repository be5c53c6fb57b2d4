//! Solver registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years accepted by the registry (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Puzzle days per year
pub const DAYS_PER_YEAR: u8 = 25;

fn is_valid_puzzle(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Creates a parsed solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

fn instantiate<'a, S: Solver + 'static>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// Builder for an immutable [`SolverRegistry`].
///
/// ```
/// use aoc_solver::SolverRegistryBuilder;
///
/// let registry = SolverRegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// for info in registry.iter_info() {
///     println!("{}/{:02} ({} parts)", info.year, info.day, info.parts);
/// }
/// ```
#[derive(Default)]
pub struct SolverRegistryBuilder {
    entries: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `year`/`day`.
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the factory's solvers implement
    /// * `factory` - Parses input into a boxed [`DynSolver`]
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the factory registered, ready for chaining
    /// * `Err(RegistrationError)` - The puzzle id is out of range or already taken
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
        if !is_valid_puzzle(year, day) {
            return Err(RegistrationError::InvalidPuzzle(year, day));
        }
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate(year, day));
        }

        self.entries.insert(
            (year, day),
            FactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register solver type `S` for `year`/`day`
    pub fn register_solver<S: Solver + 'static>(
        self,
        year: u16,
        day: u8,
    ) -> Result<Self, RegistrationError> {
        self.register(year, day, S::PARTS, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// # Arguments
    /// * `filter` - Predicate deciding which plugins to register
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the matching plugins registered
    /// * `Err(RegistrationError)` - Two plugins claim the same puzzle, or one is out of range
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.tags.contains(&"grid"))
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

    /// Freeze the builder into a registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable map from `(year, day)` to solver factories
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), FactoryEntry>,
}

impl SolverRegistry {
    /// Metadata of every registered solver in ascending year/day order
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Metadata for `year`/`day`, if registered
    pub fn get_info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        self.entries.get(&(year, day)).map(|entry| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Check if a solver is registered for `year`/`day`
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `input` - The raw puzzle input
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Parsed solver, ready to solve its parts
    /// * `Err(SolverError)` - Invalid puzzle id, no solver registered, or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !is_valid_puzzle(year, day) {
            return Err(SolverError::InvalidPuzzle(year, day));
        }
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Object-safe registration hook, implemented for every [`Solver`].
///
/// Lets solvers of different types be collected as `&'static dyn RegisterableSolver`.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with `builder` for `year`/`day`
    ///
    /// # Returns
    /// * `Ok(SolverRegistryBuilder)` - Builder with the solver registered
    /// * `Err(RegistrationError)` - The puzzle id is out of range or already taken
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts the solver implements
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
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; can be submitted by hand:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     aoc_solver::SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1,
///         tags: &["strings"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used by `--tags` filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
