//! Day 3: Gear Ratios

use crate::utils::{Grid, parse_failure, split_lines};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

/// A number printed on one row of the schematic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartNumber {
    value: u32,
    row: usize,
    /// Inclusive column span
    start: usize,
    end: usize,
}

#[derive(Debug)]
pub struct Schematic {
    grid: Grid<u8>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(byte: u8) -> bool {
    byte != b'.' && !byte.is_ascii_digit()
}

impl Schematic {
    fn new(grid: Grid<u8>) -> Self {
        let mut numbers = Vec::new();
        for row in 0..grid.height() {
            let cells = grid.row(row);
            let mut col = 0;
            while col < cells.len() {
                if !cells[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                let mut value = 0u32;
                while col < cells.len() && cells[col].is_ascii_digit() {
                    value = value * 10 + u32::from(cells[col] - b'0');
                    col += 1;
                }
                numbers.push(PartNumber {
                    value,
                    row,
                    start,
                    end: col - 1,
                });
            }
        }
        Self { grid, numbers }
    }

    /// Cells in the 8-neighbourhood ring around `number`
    fn surrounding(&self, number: &PartNumber) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let rows = number.row.saturating_sub(1)..=number.row + 1;
        let cols = number.start.saturating_sub(1)..=number.end + 1;
        let (row, start, end) = (number.row, number.start, number.end);

        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .filter(move |&(r, c)| !(r == row && (start..=end).contains(&c)))
            .filter_map(move |(r, c)| self.grid.get(r, c).map(|&byte| (r, c, byte)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| Grid::from_lines(&lines))
            .map(Schematic::new)
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .numbers
            .iter()
            .filter(|number| shared.surrounding(number).any(|(_, _, byte)| is_symbol(byte)))
            .map(|number| number.value)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<(usize, usize), Vec<u32>> = HashMap::new();
        for number in &shared.numbers {
            for (row, col, _) in shared.surrounding(number).filter(|&(_, _, byte)| byte == b'*') {
                gears.entry((row, col)).or_default().push(number.value);
            }
        }

        let total: u64 = gears
            .values()
            .filter(|values| values.len() == 2)
            .map(|values| u64::from(values[0]) * u64::from(values[1]))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "4361");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "467835");
    }

    #[test]
    fn test_numbers_at_row_end() {
        let schematic = <Solver as AocParser>::parse("..12\n*..7\n").unwrap();
        let values: Vec<_> = schematic.numbers.iter().map(|n| (n.value, n.start, n.end)).collect();
        assert_eq!(values, vec![(12, 2, 3), (7, 3, 3)]);
    }

    #[test]
    fn test_diagonal_adjacency() {
        assert_eq!(run_part::<Solver>("5..\n.#.\n..3\n", 1), "8");
        assert_eq!(run_part::<Solver>("5..\n...\n..3\n", 1), "0");
    }
}
