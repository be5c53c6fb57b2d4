//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data shared by every part.
///
/// `SharedData` may borrow from the input (`Vec<&'a str>`, maps keyed by
/// `&'a str`) or own its contents; it is created once per input and handed
/// mutably to each part in turn, so a part may cache work for a later one.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement once per part; `#[derive(AocSolver)]` wires the impls into
/// [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one puzzle day.
///
/// Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Sum::parse("1 2 3").unwrap();
/// assert_eq!(Sum::solve_part(&mut shared, 1).unwrap(), "6");
/// assert_eq!(Sum::PARTS, 1);
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve one part. Parts without an implementation return
    /// [`SolveError::PartNotImplemented`].
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS` first.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
