//! Day 11: Cosmic Expansion

use crate::utils::{Grid, parse_failure, split_lines};
use anyhow::{Result, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["grid"])]
pub struct Solver;

const YOUNG_EXPANSION: u64 = 2;
const OLD_EXPANSION: u64 = 1_000_000;

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<(usize, usize)>,
    /// Number of empty rows strictly above each row index
    empty_rows_before: Vec<u64>,
    empty_cols_before: Vec<u64>,
}

fn empty_before(len: usize, occupied: impl Iterator<Item = usize>) -> Vec<u64> {
    let mut used = vec![false; len];
    for idx in occupied {
        used[idx] = true;
    }
    used.iter()
        .scan(0, |empty, &used| {
            let before = *empty;
            if !used {
                *empty += 1;
            }
            Some(before)
        })
        .collect()
}

impl Image {
    fn new(grid: &Grid<bool>) -> Self {
        let galaxies: Vec<_> = grid.positions(|&galaxy| galaxy).collect();
        Self {
            empty_rows_before: empty_before(grid.height(), galaxies.iter().map(|g| g.0)),
            empty_cols_before: empty_before(grid.width(), galaxies.iter().map(|g| g.1)),
            galaxies,
        }
    }

    /// Sum of pairwise distances with each empty row/column counted `factor` times
    fn total_distance(&self, factor: u64) -> u64 {
        let expanded = |&(row, col): &(usize, usize)| {
            (
                row as u64 + self.empty_rows_before[row] * (factor - 1),
                col as u64 + self.empty_cols_before[col] * (factor - 1),
            )
        };

        self.galaxies
            .iter()
            .map(expanded)
            .tuple_combinations()
            .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                Grid::parse_with(&lines, |byte| match byte {
                    b'#' => Ok(true),
                    b'.' => Ok(false),
                    other => bail!("unexpected {:?} in image", other as char),
                })
            })
            .map(|grid| Image::new(&grid))
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(YOUNG_EXPANSION).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_distance(OLD_EXPANSION).to_string())
    }
}
