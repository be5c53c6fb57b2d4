//! Day 9: Mirage Maintenance

use crate::utils::{parse_failure, parse_ints, split_lines};
use anyhow::Context;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["math"])]
pub struct Solver;

/// Next value of `values` by the difference pyramid. Empty input gives 0.
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let differences: Vec<i64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    values[values.len() - 1] + extrapolate(&differences)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                lines
                    .iter()
                    .enumerate()
                    .map(|(idx, line)| parse_ints(line).with_context(|| format!("line {}", idx + 1)))
                    .collect()
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared.iter().map(|values| extrapolate(values)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared
            .iter()
            .map(|values| {
                let reversed: Vec<i64> = values.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "114");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "2");
    }

    #[test]
    fn test_extrapolate() {
        assert_eq!(extrapolate(&[]), 0);
        assert_eq!(extrapolate(&[7]), 7);
        assert_eq!(extrapolate(&[-1, -3, -5]), -7);
    }
}
