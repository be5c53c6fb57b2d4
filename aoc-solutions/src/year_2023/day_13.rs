//! Day 13: Point of Incidence

use crate::utils::{parse_failure, solve_failure, split_lines};
use anyhow::{Result, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["grid"])]
pub struct Solver;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a
fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u32 {
    bytes
        .into_iter()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

#[derive(Debug)]
pub struct Pattern<'a> {
    rows: Vec<&'a [u8]>,
    row_hashes: Vec<u32>,
    col_hashes: Vec<u32>,
}

impl<'a> Pattern<'a> {
    fn new(lines: &[&'a str]) -> Result<Self> {
        let rows: Vec<&[u8]> = lines.iter().map(|line| line.as_bytes()).collect();
        let width = rows.first().map_or(0, |row| row.len());
        ensure!(width > 0, "empty pattern");
        ensure!(
            rows.iter().all(|row| row.len() == width),
            "pattern rows differ in length"
        );

        Ok(Self {
            row_hashes: rows.iter().map(|row| fnv1a(row.iter().copied())).collect(),
            col_hashes: (0..width)
                .map(|col| fnv1a(rows.iter().map(|row| row[col])))
                .collect(),
            rows,
        })
    }

    fn width(&self) -> usize {
        self.rows[0].len()
    }

    fn row_difference(&self, a: usize, b: usize) -> usize {
        self.rows[a]
            .iter()
            .zip(self.rows[b])
            .filter(|(x, y)| x != y)
            .count()
    }

    fn col_difference(&self, a: usize, b: usize) -> usize {
        self.rows.iter().filter(|row| row[a] != row[b]).count()
    }

    /// Reflection score with exactly `smudges` mismatching cells.
    ///
    /// Exact reflections compare checksums, smudged ones compare cells.
    fn score(&self, smudges: usize) -> Option<usize> {
        let (rows, cols) = if smudges == 0 {
            let hash_diff = |hashes: &[u32], a: usize, b: usize| usize::from(hashes[a] != hashes[b]);
            (
                find_mirror(self.rows.len(), |a, b| hash_diff(&self.row_hashes, a, b), 0),
                find_mirror(self.width(), |a, b| hash_diff(&self.col_hashes, a, b), 0),
            )
        } else {
            (
                find_mirror(self.rows.len(), |a, b| self.row_difference(a, b), smudges),
                find_mirror(self.width(), |a, b| self.col_difference(a, b), smudges),
            )
        };

        rows.map(|split| split * 100).or(cols)
    }
}

/// First split point in `1..len` whose mirrored pairs differ by exactly
/// `budget` in total, as measured by `difference`.
fn find_mirror(len: usize, difference: impl Fn(usize, usize) -> usize, budget: usize) -> Option<usize> {
    (1..len).find(|&split| {
        let mut total = 0;
        for (a, b) in (0..split).rev().zip(split..len) {
            total += difference(a, b);
            if total > budget {
                return false;
            }
        }
        total == budget
    })
}

fn total_score(patterns: &[Pattern<'_>], smudges: usize) -> Result<String, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(idx, pattern)| {
            pattern
                .score(smudges)
                .ok_or_else(|| anyhow!("pattern {} has no reflection line", idx + 1))
        })
        .sum::<Result<usize>>()
        .map(|total| total.to_string())
        .map_err(solve_failure)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                lines
                    .split(|line| line.is_empty())
                    .filter(|block| !block.is_empty())
                    .map(Pattern::new)
                    .collect()
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_score(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_score(shared, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "405");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "400");
    }

    #[test]
    fn test_fnv1a() {
        assert_eq!(fnv1a(*b""), 0x811c_9dc5);
        assert_eq!(fnv1a(*b"a"), 0xe40c_292c);
    }

    #[test]
    fn test_find_mirror_at_edge() {
        let values = [1, 2, 2];
        assert_eq!(find_mirror(3, |a, b| usize::from(values[a] != values[b]), 0), Some(2));
        assert_eq!(find_mirror(3, |a, b| usize::from(values[a] != values[b]), 1), Some(1));
    }
}
