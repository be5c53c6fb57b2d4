//! Day 6: Wait For It

use crate::utils::{parse_failure, parse_int, parse_ints, solve_failure, split_lines};
use anyhow::{Result, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Races<'a> {
    /// `(time, record)` per race
    races: Vec<(u64, u64)>,
    time_row: &'a str,
    distance_row: &'a str,
}

fn strip_label<'a>(line: Option<&&'a str>, label: &str) -> Result<&'a str> {
    line.and_then(|line| line.strip_prefix(label))
        .ok_or_else(|| anyhow!("missing `{label}` row"))
}

/// Number of hold times that beat `record` in a race lasting `time`.
///
/// Distance `hold * (time - hold)` rises up to `time / 2`, so the first
/// winning hold is found by binary search and the winners are symmetric.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |hold: u64| u128::from(hold) * u128::from(time - hold) > u128::from(record);
    let half = time / 2;
    if !beats(half) {
        return 0;
    }

    let (mut lo, mut hi) = (0, half);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if beats(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time - 2 * lo + 1
}

fn joined_number(row: &str) -> Result<u64> {
    let digits: String = row.split_whitespace().collect();
    parse_int(&digits)
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                let time_row = strip_label(lines.first(), "Time:")?;
                let distance_row = strip_label(lines.get(1), "Distance:")?;
                let times: Vec<u64> = parse_ints(time_row)?;
                let distances: Vec<u64> = parse_ints(distance_row)?;
                ensure!(
                    times.len() == distances.len(),
                    "{} times but {} distances",
                    times.len(),
                    distances.len()
                );
                Ok(Races {
                    races: times.into_iter().zip(distances).collect(),
                    time_row,
                    distance_row,
                })
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .races
            .iter()
            .map(|&(time, record)| ways_to_win(time, record))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let time = joined_number(shared.time_row).map_err(solve_failure)?;
        let record = joined_number(shared.distance_row).map_err(solve_failure)?;
        Ok(ways_to_win(time, record).to_string())
    }
}
