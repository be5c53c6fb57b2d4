//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() && !config.quiet {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            eprintln!("  - {}/day{:02}", year, day);
        }
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filter_requires_all_tags() {
        let grid = build_registry(&["grid".to_string()]).unwrap();
        assert!(grid.contains(2023, 10));
        assert!(grid.contains(2023, 16));
        assert!(!grid.contains(2023, 1));

        let both = build_registry(&["grid".to_string(), "bfs".to_string()]).unwrap();
        assert_eq!(both.len(), 1);
        assert!(both.contains(2023, 10));
    }

    #[test]
    fn test_all_2023_days_registered() {
        let registry = build_registry(&[]).unwrap();
        let days: Vec<u8> = registry
            .iter_info()
            .filter(|info| info.year == 2023)
            .map(|info| info.day)
            .collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 19]);
        assert!(registry.iter_info().all(|info| info.parts == 2));
    }
}
