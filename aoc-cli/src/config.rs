//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the `{year}/day{DD}.txt` input tree
    pub input_dir: PathBuf,
    /// Input file used instead of the input tree
    pub input_file: Option<PathBuf>,
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, rejecting inconsistent combinations
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(input) = &args.input {
            if args.day.is_none() {
                return Err(CliError::Config("--input requires --day".to_string()));
            }
            if !input.is_file() {
                return Err(CliError::Config(format!(
                    "input file {} does not exist",
                    input.display()
                )));
            }
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: args.input_dir,
            input_file: args.input,
            quiet: args.quiet,
        })
    }
}
