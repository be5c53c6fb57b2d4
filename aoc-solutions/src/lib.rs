//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each day is a unit struct deriving
//! `AocSolver` and `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it. Shared input and
//! number helpers live in [`utils`].

pub mod utils;

#[cfg(feature = "year-2023")]
pub mod year_2023;
