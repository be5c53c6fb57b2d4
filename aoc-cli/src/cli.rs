//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Explicit input file, only valid together with --day
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding inputs as {year}/day{DD}.txt
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging when RUST_LOG is unset
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from(["aoc", "-y", "2023", "-d", "5", "-p", "2", "-t", "grid,bfs"]).unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2023), Some(5), Some(2)));
        assert_eq!(args.tags, vec!["grid", "bfs"]);
    }

    #[test]
    fn test_day_and_part_ranges() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }

    proptest! {
        #[test]
        fn prop_day_and_part_bounds(day in 0u8..=40, part in 0u8..=5) {
            let day_arg = day.to_string();
            let parsed = Args::try_parse_from(["aoc", "--day", day_arg.as_str()]);
            prop_assert_eq!(parsed.is_ok(), (1..=25).contains(&day));

            let part_arg = part.to_string();
            let parsed = Args::try_parse_from(["aoc", "--part", part_arg.as_str()]);
            let expected = (1..=2).contains(&part).then_some(Some(part));
            prop_assert_eq!(parsed.map(|args| args.part).ok(), expected);
        }
    }
}
