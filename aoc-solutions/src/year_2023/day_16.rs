//! Day 16: The Floor Will Be Lava

use crate::utils::{Direction, Grid, parse_failure, split_lines};
use anyhow::bail;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// `/`
    MirrorForward,
    /// `\`
    MirrorBack,
    SplitVertical,
    SplitHorizontal,
}

impl Cell {
    /// Outgoing directions for a beam entering while travelling `dir`
    fn deflect(self, dir: Direction) -> (Direction, Option<Direction>) {
        use Direction::*;
        match (self, dir) {
            (Cell::MirrorForward, Right) => (Up, None),
            (Cell::MirrorForward, Left) => (Down, None),
            (Cell::MirrorForward, Up) => (Right, None),
            (Cell::MirrorForward, Down) => (Left, None),
            (Cell::MirrorBack, Right) => (Down, None),
            (Cell::MirrorBack, Left) => (Up, None),
            (Cell::MirrorBack, Up) => (Left, None),
            (Cell::MirrorBack, Down) => (Right, None),
            (Cell::SplitVertical, Left | Right) => (Up, Some(Down)),
            (Cell::SplitHorizontal, Up | Down) => (Left, Some(Right)),
            _ => (dir, None),
        }
    }
}

/// Number of cells a beam entering at `(row, col)` heading `dir` passes through
fn energized(grid: &Grid<Cell>, row: usize, col: usize, dir: Direction) -> usize {
    let width = grid.width();
    let mut seen = vec![0u8; grid.cells().len()];
    let mut beams = vec![(row, col, dir)];

    while let Some((row, col, dir)) = beams.pop() {
        let Some(&cell) = grid.get(row, col) else {
            continue;
        };
        let mask = &mut seen[row * width + col];
        if *mask & dir.bit() != 0 {
            continue;
        }
        *mask |= dir.bit();

        let (first, second) = cell.deflect(dir);
        for out in std::iter::once(first).chain(second) {
            if let Some((r, c)) = grid.step(row, col, out) {
                beams.push((r, c, out));
            }
        }
    }

    seen.iter().filter(|&&mask| mask != 0).count()
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Cell>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| {
                Grid::parse_with(&lines, |byte| {
                    Ok(match byte {
                        b'.' => Cell::Empty,
                        b'/' => Cell::MirrorForward,
                        b'\\' => Cell::MirrorBack,
                        b'|' => Cell::SplitVertical,
                        b'-' => Cell::SplitHorizontal,
                        other => bail!("unknown contraption tile {:?}", other as char),
                    })
                })
            })
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, 0, 0, Direction::Right).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (height, width) = (shared.height(), shared.width());
        let from_columns = (0..width).flat_map(|col| {
            [(0, col, Direction::Down), (height - 1, col, Direction::Up)]
        });
        let from_rows = (0..height).flat_map(|row| {
            [(row, 0, Direction::Right), (row, width - 1, Direction::Left)]
        });

        let best = from_columns
            .chain(from_rows)
            .map(|(row, col, dir)| energized(shared, row, col, dir))
            .max()
            .unwrap_or_default();
        Ok(best.to_string())
    }
}
