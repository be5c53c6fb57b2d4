//! Helpers shared by the puzzle solutions

pub mod grid;
pub mod input;
pub mod numbers;

pub use grid::{Direction, Grid};
pub use input::{InputError, load_input, split_lines};
pub use numbers::{lcm, parse_int, parse_ints, prime_factors};

use aoc_solver::{ParseError, SolveError};

/// Flatten an error chain into a [`ParseError`]
pub(crate) fn parse_failure(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

pub(crate) fn solve_failure(err: anyhow::Error) -> SolveError {
    SolveError::SolveFailed(err.into())
}

/// Parse `input` with `S` and solve `part`, panicking on any error
#[cfg(test)]
pub(crate) fn run_part<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("example input should parse");
    S::solve_part(&mut shared, part).expect("example part should solve")
}
