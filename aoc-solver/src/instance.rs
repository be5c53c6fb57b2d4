//! Solver instances with parse and solve timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use std::marker::PhantomData;

/// Answer for one part together with when it was computed
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving the part
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input for one year/day, ready to solve any of its parts.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
    _solver: PhantomData<fn() -> S>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` with `S`, recording how long parsing took.
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `input` - The raw puzzle input, borrowed for the instance's lifetime
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed data with parse timestamps
    /// * `Err(ParseError)` - The input was rejected by `S::parse`
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        tracing::debug!(
            year,
            day,
            micros = (parse_end - parse_start).num_microseconds(),
            "parsed input"
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
            _solver: PhantomData,
        })
    }
}

/// Type-erased view of a [`SolverInstance`], as handed out by the registry.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{:02} part {part}: {}", solver.year(), solver.day(), result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part` and time it
    ///
    /// # Arguments
    /// * `part` - The part number, `1..=parts()`
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The answer with solve timestamps
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Year this solver was created for
    fn year(&self) -> u16;

    /// Day this solver was created for
    fn day(&self) -> u8;

    /// Number of parts the solver implements
    fn parts(&self) -> u8;

    /// Time spent parsing the input
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        tracing::debug!(
            year = self.year,
            day = self.day,
            part,
            micros = (solve_end - solve_start).num_microseconds(),
            "solved part"
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
