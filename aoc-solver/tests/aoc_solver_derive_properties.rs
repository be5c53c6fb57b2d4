//! Property tests for the `AocSolver` derive

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|t| {
                t.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {t}")))
            })
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

fn joined(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn solve_part_dispatches_to_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..6),
        part in 1u8..=2
    ) {
        let input = joined(&numbers);
        let mut via_solver = SumProduct::parse(&input).unwrap();
        let mut direct = SumProduct::parse(&input).unwrap();

        let dispatched = <SumProduct as Solver>::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut direct),
            2 => <SumProduct as PartSolver<2>>::solve(&mut direct),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn unknown_part_is_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1 2 3").unwrap();

        match <SumProduct as Solver>::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(SumProduct::PARTS, 2);
}

#[test]
fn test_parse_error_propagates() {
    let err = SumProduct::parse("1 x 3").unwrap_err();
    assert!(err.to_string().contains("not an integer: x"));
}
