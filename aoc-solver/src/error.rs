//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not follow the puzzle's grammar
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or value is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver has no implementation for this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The algorithm could not produce an answer for this input
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry lookups and solver runs
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported range
    #[error("Invalid puzzle id: year {0} day {1}")]
    InvalidPuzzle(u16, u8),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    Duplicate(u16, u8),
    /// Year or day outside the supported range
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidPuzzle(u16, u8),
}
