//! Day 10: Pipe Maze

use crate::utils::{Direction, Grid, parse_failure, split_lines};
use anyhow::{Result, anyhow, bail, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Vertical,
    Horizontal,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
    Ground,
    Start,
}

/// Candidate shapes for the start tile, tried in this order
const START_CANDIDATES: [Tile; 6] = [
    Tile::Vertical,
    Tile::NorthWest,
    Tile::NorthEast,
    Tile::SouthWest,
    Tile::SouthEast,
    Tile::Horizontal,
];

impl Tile {
    fn from_byte(byte: u8) -> Result<Self> {
        Ok(match byte {
            b'|' => Tile::Vertical,
            b'-' => Tile::Horizontal,
            b'L' => Tile::NorthEast,
            b'J' => Tile::NorthWest,
            b'7' => Tile::SouthWest,
            b'F' => Tile::SouthEast,
            b'.' => Tile::Ground,
            b'S' => Tile::Start,
            other => bail!("unknown tile {:?}", other as char),
        })
    }

    fn connections(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Tile::Vertical => &[Up, Down],
            Tile::Horizontal => &[Left, Right],
            Tile::NorthEast => &[Up, Right],
            Tile::NorthWest => &[Up, Left],
            Tile::SouthWest => &[Down, Left],
            Tile::SouthEast => &[Down, Right],
            Tile::Ground | Tile::Start => &[],
        }
    }

    fn connects(self, dir: Direction) -> bool {
        self.connections().contains(&dir)
    }
}

#[derive(Debug)]
pub struct Maze {
    grid: Grid<Tile>,
    start: (usize, usize),
    /// Loop membership and farthest distance, filled on first use
    main_loop: Option<(Vec<bool>, u32)>,
}

/// Positions `(row, col)` connects to, never crossing an edge the tile lacks
fn neighbours(grid: &Grid<Tile>, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let tile = grid.get(row, col).copied().unwrap_or(Tile::Ground);
    tile.connections()
        .iter()
        .filter_map(move |&dir| grid.step(row, col, dir))
}

fn infer_start(grid: &Grid<Tile>, (row, col): (usize, usize)) -> Result<Tile> {
    let links = |dir: Direction| {
        grid.step(row, col, dir)
            .and_then(|(r, c)| grid.get(r, c))
            .is_some_and(|tile| tile.connects(dir.opposite()))
    };

    START_CANDIDATES
        .into_iter()
        .find(|tile| tile.connections().iter().all(|&dir| links(dir)))
        .ok_or_else(|| anyhow!("start tile at ({row}, {col}) does not join two pipes"))
}

fn parse_maze(lines: &[&str]) -> Result<Maze> {
    let mut grid = Grid::parse_with(lines, Tile::from_byte)?;

    let start = {
        let mut starts = grid.positions(|&tile| tile == Tile::Start);
        let start = starts.next().ok_or_else(|| anyhow!("no start tile"))?;
        ensure!(starts.next().is_none(), "more than one start tile");
        start
    };

    let shape = infer_start(&grid, start)?;
    if let Some(tile) = grid.get_mut(start.0, start.1) {
        *tile = shape;
    }

    Ok(Maze {
        grid,
        start,
        main_loop: None,
    })
}

impl Maze {
    fn main_loop(&mut self) -> &(Vec<bool>, u32) {
        let (grid, start) = (&self.grid, self.start);
        self.main_loop.get_or_insert_with(|| {
            let width = grid.width();
            let mut on_loop = vec![false; grid.cells().len()];
            let mut farthest = 0;
            let mut queue = VecDeque::from([(start, 0u32)]);
            on_loop[start.0 * width + start.1] = true;

            while let Some(((row, col), dist)) = queue.pop_front() {
                farthest = farthest.max(dist);
                for (r, c) in neighbours(grid, row, col) {
                    let seen = &mut on_loop[r * width + c];
                    if !*seen {
                        *seen = true;
                        queue.push_back(((r, c), dist + 1));
                    }
                }
            }
            (on_loop, farthest)
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_lines(input)
            .map_err(anyhow::Error::from)
            .and_then(|lines| parse_maze(&lines))
            .map_err(parse_failure)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.main_loop().1.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let on_loop = shared.main_loop().0.clone();
        let grid = &shared.grid;

        // a ray along a row flips inside/outside at every loop tile
        // reaching north
        let mut enclosed = 0;
        for row in 0..grid.height() {
            let mut inside = false;
            for (col, &tile) in grid.row(row).iter().enumerate() {
                if on_loop[row * grid.width() + col] {
                    if tile.connects(Direction::Up) {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1;
                }
            }
        }
        Ok(enclosed.to_string())
    }
}
