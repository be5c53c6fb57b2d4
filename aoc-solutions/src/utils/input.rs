//! Whole-file input loading and line splitting

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input file {} is empty", path.display())]
    Empty { path: PathBuf },
    #[error("input contains no lines")]
    NoLines,
}

impl InputError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InputError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Read a puzzle input file into memory.
///
/// Fails if the file cannot be read or is empty.
pub fn load_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}

/// Split input into lines.
///
/// One trailing empty line left by a final newline is dropped, so a file of
/// `n` newline-terminated records yields exactly `n` lines. Blank lines in
/// the middle are kept since several puzzles use them as separators.
pub fn split_lines(input: &str) -> Result<Vec<&str>, InputError> {
    let mut lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.last() == Some(&"") {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(InputError::NoLines);
    }
    Ok(lines)
}
