//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{info, warn};

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Set on the first part solved from a parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items one after another in ascending year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is missing
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items, handing each result to `sink` as it is ready
    pub fn execute(&self, mut sink: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_solver(&work, &mut sink);
        }
    }

    fn run_solver(&self, work: &WorkItem, sink: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);
        info!(year, day, parts = ?work.parts, "running solver");

        let input = match self.inputs.load(year, day) {
            Ok(input) => input,
            Err(source) => {
                warn!(year, day, error = %source, "input unavailable");
                let error = Arc::new(ExecutorError::Input { year, day, source });
                send_error(work, &error, sink);
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                send_error(work, &Arc::new(e.into()), sink);
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            sink(solve_part(year, day, part, &mut *solver, parse_duration.take()));
        }
    }
}

/// Report the same error for every part of `work`
fn send_error(work: &WorkItem, error: &Arc<ExecutorError>, sink: &mut impl FnMut(SolverResult)) {
    for part in work.parts.clone() {
        sink(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Arc::clone(error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(Arc::new(aoc_solver::SolverError::from(e).into())),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use aoc_solver::SolverRegistryBuilder;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn executor(dir: &TempDir, argv: &[&str]) -> Executor {
        let dir = dir.path().to_str().unwrap();
        let args = Args::try_parse_from(
            ["aoc", "--input-dir", dir].into_iter().chain(argv.iter().copied()),
        )
        .unwrap();
        let config = Config::from_args(args).unwrap();
        let registry = SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2023)
            .unwrap()
            .build();
        Executor::new(registry, &config)
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result));
        results
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let items = executor(&temp, &["--day", "6", "--part", "2"]).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2023,
                day: 6,
                parts: 2..=2
            }]
        );

        let items = executor(&temp, &[]).collect_work_items();
        assert!(items.windows(2).all(|w| (w[0].year, w[0].day) < (w[1].year, w[1].day)));
        assert!(items.iter().all(|w| w.parts == (1..=2)));
    }

    #[test]
    fn test_runs_parts_in_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(
            temp.path().join("2023/day06.txt"),
            "Time:      7  15   30\nDistance:  9  40  200\n",
        )
        .unwrap();

        let results = run(&executor(&temp, &["--day", "6"]));
        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_deref().unwrap()))
            .collect();
        assert_eq!(answers, vec![(1, "288"), (2, "71503")]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&temp, &["--day", "9"]);
        assert_eq!(executor.missing_inputs(&executor.collect_work_items()), vec![(2023, 9)]);

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(**err, ExecutorError::Input { year: 2023, day: 9, .. }));
        }
    }

    #[test]
    fn test_parse_failure_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(temp.path().join("2023/day02.txt"), "Game x: 1 red\n").unwrap();

        let results = run(&executor(&temp, &["--day", "2", "--part", "1"]));
        assert_eq!(results.len(), 1);
        let err = results[0].answer.as_ref().unwrap_err();
        assert!(matches!(
            **err,
            ExecutorError::Solver(aoc_solver::SolverError::Parse(_))
        ));
    }
}
