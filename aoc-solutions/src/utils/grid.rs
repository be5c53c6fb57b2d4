//! Rectangular grids addressed by `(row, col)`

use anyhow::{Result, bail, ensure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-bit mask, handy for per-cell visited sets
    pub fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 4,
            Direction::Right => 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from equal-length lines, converting each byte with `cell`.
    pub fn parse_with<F>(lines: &[&str], mut cell: F) -> Result<Self>
    where
        F: FnMut(u8) -> Result<T>,
    {
        let Some(first) = lines.first() else {
            bail!("grid has no rows");
        };
        let width = first.len();
        ensure!(width > 0, "grid has an empty first row");

        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            ensure!(
                line.len() == width,
                "row {} has length {}, expected {width}",
                row + 1,
                line.len()
            );
            for &byte in line.as_bytes() {
                cells.push(cell(byte)?);
            }
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.height && col < self.width).then(|| &self.cells[row * self.width + col])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        (row < self.height && col < self.width).then(|| &mut self.cells[row * self.width + col])
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Position one step from `(row, col)` in `dir`, if still inside the grid
    pub fn step(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let next = match dir {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        (next.0 < self.height && next.1 < self.width).then_some(next)
    }

    /// Positions of all cells matching `pred`, row by row
    pub fn positions<'a, P>(&'a self, pred: P) -> impl Iterator<Item = (usize, usize)> + 'a
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| pred(cell))
            .map(move |(idx, _)| (idx / self.width, idx % self.width))
    }
}

impl Grid<u8> {
    /// Grid of raw bytes
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        Self::parse_with(lines, Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::from_lines(&["ab", "cd", "ef"]).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.get(2, 1), Some(&b'f'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.row(1), b"cd");
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_lines(&["abc", "de"]).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(Grid::from_lines(&[]).is_err());
    }

    #[test]
    fn test_step_stays_inside() {
        let grid = Grid::from_lines(&["...", "..."]).unwrap();
        assert_eq!(grid.step(0, 0, Direction::Up), None);
        assert_eq!(grid.step(0, 0, Direction::Left), None);
        assert_eq!(grid.step(0, 2, Direction::Right), None);
        assert_eq!(grid.step(1, 1, Direction::Down), None);
        assert_eq!(grid.step(0, 1, Direction::Down), Some((1, 1)));
    }

    #[test]
    fn test_positions() {
        let grid = Grid::from_lines(&["#.", ".#"]).unwrap();
        let found: Vec<_> = grid.positions(|&b| b == b'#').collect();
        assert_eq!(found, vec![(0, 0), (1, 1)]);
    }
}
