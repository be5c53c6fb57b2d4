//! Property tests for part range checking in `SolverExt`

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with `N` parts that echoes the part it was asked for
struct EchoSolver<const N: u8>;

impl<const N: u8> AocParser for EchoSolver<N> {
    type SharedData<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => EchoSolver::<1>::solve_part_checked_range(&mut (), part),
        2 => EchoSolver::<2>::solve_part_checked_range(&mut (), part),
        _ => EchoSolver::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_out_of_range_rejected(parts in 1u8..=3, part in any::<u8>()) {
        let result = checked(parts, part);

        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }
}

#[test]
fn test_part_zero_rejected() {
    let result = EchoSolver::<2>::solve_part_checked_range(&mut (), 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_part_past_max_rejected() {
    let result = EchoSolver::<2>::solve_part_checked_range(&mut (), 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}
