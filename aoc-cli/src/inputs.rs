//! Puzzle input lookup on disk

use aoc_solutions::utils::{InputError, load_input};
use std::path::PathBuf;

/// Read-only store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`. An explicit
/// file, when given, is used for every puzzle instead.
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf, explicit: Option<PathBuf>) -> Self {
        Self {
            input_dir,
            explicit,
        }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.explicit {
            Some(path) => path.clone(),
            None => self
                .input_dir
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        load_input(self.input_path(year, day))
    }
}
