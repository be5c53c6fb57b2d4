//! Day 1: Trebuchet?!

use crate::utils::{parse_failure, split_lines};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["strings"])]
pub struct Solver;

const SPELLED_DIGITS: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input).map_err(|e| parse_failure(e.into()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|line| calibration_value(line, false))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|line| calibration_value(line, true))
            .sum();
        Ok(total.to_string())
    }
}

/// Digit starting at byte `pos`, if any.
///
/// Words may overlap, so `"oneight"` holds a digit at both 0 and 2.
fn digit_at(bytes: &[u8], pos: usize, spelled: bool) -> Option<u32> {
    let byte = bytes[pos];
    if byte.is_ascii_digit() {
        return Some(u32::from(byte - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED_DIGITS
        .iter()
        .position(|word| bytes[pos..].starts_with(word))
        .map(|idx| idx as u32 + 1)
}

/// First digit times ten plus last digit; a line without digits is worth 0
fn calibration_value(line: &str, spelled: bool) -> u32 {
    let bytes = line.as_bytes();
    let first = (0..bytes.len()).find_map(|pos| digit_at(bytes, pos, spelled));
    let last = (0..bytes.len())
        .rev()
        .find_map(|pos| digit_at(bytes, pos, spelled));

    match (first, last) {
        (Some(first), Some(last)) => first * 10 + last,
        _ => 0,
    }
}
