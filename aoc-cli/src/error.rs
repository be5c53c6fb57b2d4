//! Error types for the CLI

use aoc_solutions::utils::InputError;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Why a single part has no answer.
///
/// Shared between the parts of a day through `Arc`, since one missing
/// input or parse failure affects all of them.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver creation or execution failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
