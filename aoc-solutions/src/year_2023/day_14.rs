//! Day 14: Parabolic Reflector Dish

use crate::utils::{Direction, Grid, parse_failure, solve_failure, split_lines};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["grid", "cycle-detection"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;
const SPIN_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const EMPTY: u8 = b'.';

/// `(row, col)` of the `k`-th cell of `lane`, counted from the wall `dir` faces
fn lane_cell(grid: &Grid<u8>, dir: Direction, lane: usize, k: usize) -> (usize, usize) {
    match dir {
        Direction::Up => (k, lane),
        Direction::Down => (grid.height() - 1 - k, lane),
        Direction::Left => (lane, k),
        Direction::Right => (lane, grid.width() - 1 - k),
    }
}

/// Roll every round rock as far as it goes in `dir`
fn tilt(grid: &mut Grid<u8>, dir: Direction) {
    let (lanes, lane_len) = match dir {
        Direction::Up | Direction::Down => (grid.width(), grid.height()),
        Direction::Left | Direction::Right => (grid.height(), grid.width()),
    };

    for lane in 0..lanes {
        let mut free = 0;
        for k in 0..lane_len {
            let (row, col) = lane_cell(grid, dir, lane, k);
            match grid.get(row, col).copied() {
                Some(CUBE) => free = k + 1,
                Some(ROUND) => {
                    if free != k {
                        let (to_row, to_col) = lane_cell(grid, dir, lane, free);
                        if let Some(cell) = grid.get_mut(row, col) {
                            *cell = EMPTY;
                        }
                        if let Some(cell) = grid.get_mut(to_row, to_col) {
                            *cell = ROUND;
                        }
                    }
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn spin_cycle(grid: &mut Grid<u8>) {
    for dir in SPIN_ORDER {
        tilt(grid, dir);
    }
}

/// Total load on the north support beams
fn north_load(grid: &Grid<u8>) -> usize {
    grid.positions(|&cell| cell == ROUND)
        .map(|(row, _)| grid.height() - row)
        .sum()
}

/// Load after `cycles` spin cycles, skipping ahead once a state repeats
fn load_after_cycles(grid: &Grid<u8>, cycles: usize) -> Option<usize> {
    let mut grid = grid.clone();
    let mut seen: HashMap<Vec<u8>, usize> = HashMap::from([(grid.cells().to_vec(), 0)]);
    let mut loads = vec![north_load(&grid)];

    for done in 1..=cycles {
        spin_cycle(&mut grid);
        loads.push(north_load(&grid));

        if let Some(&first) = seen.get(grid.cells()) {
            let period = done - first;
            debug!(first, period, "spin cycle repeats");
            return loads.get(first + (cycles - first) % period).copied();
        }
        seen.insert(grid.cells().to_vec(), done);
    }
    loads.last().copied()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                let grid = Grid::from_lines(&lines)?;
                ensure!(
                    grid.cells().iter().all(|&c| matches!(c, ROUND | CUBE | EMPTY)),
                    "platform may only contain `O`, `#` and `.`"
                );
                Ok(grid)
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        tilt(&mut grid, Direction::Up);
        Ok(north_load(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        load_after_cycles(shared, SPIN_CYCLES)
            .map(|load| load.to_string())
            .ok_or_else(|| solve_failure(anyhow!("cycle bookkeeping lost a load value")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::run_part;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    fn rows(grid: &Grid<u8>) -> Vec<String> {
        (0..grid.height())
            .map(|row| String::from_utf8_lossy(grid.row(row)).into_owned())
            .collect()
    }

    #[test]
    fn test_part_1_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 1), "136");
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(run_part::<Solver>(EXAMPLE, 2), "64");
    }

    #[test]
    fn test_one_spin_cycle() {
        let mut grid = <Solver as AocParser>::parse(EXAMPLE).unwrap();
        spin_cycle(&mut grid);
        assert_eq!(
            rows(&grid),
            vec![
                ".....#....",
                "....#...O#",
                "...OO##...",
                ".OO#......",
                ".....OOO#.",
                ".O#...O#.#",
                "....O#....",
                "......OOOO",
                "#...O###..",
                "#..OO#....",
            ]
        );
    }

    #[test]
    fn test_tilt_stops_at_cubes() {
        let mut grid = Grid::from_lines(&[".O#.O"]).unwrap();
        tilt(&mut grid, Direction::Right);
        assert_eq!(grid.row(0), b".O#.O");
        tilt(&mut grid, Direction::Left);
        assert_eq!(grid.row(0), b"O.#O.");
    }
}
