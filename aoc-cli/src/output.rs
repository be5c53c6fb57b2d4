//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {successes} solved, {failures} failed");
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `2023/05 Part 2: 46 (parse: 1.20ms, solve: 35µs)`, or the error for a failed part
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use std::sync::Arc;

    fn result(answer: Result<String, ExecutorError>, parse: Option<TimeDelta>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 5,
            part: 2,
            answer: answer.map_err(Arc::new),
            parse_duration: parse,
            solve_duration: TimeDelta::microseconds(35),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(35)), "35µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1200)), "1.20ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_answer_line() {
        let line = format_result(&result(
            Ok("46".to_string()),
            Some(TimeDelta::microseconds(1200)),
        ));
        assert_eq!(line, "2023/05 Part 2: 46 (parse: 1.20ms, solve: 35µs)");

        let line = format_result(&result(Ok("46".to_string()), None));
        assert_eq!(line, "2023/05 Part 2: 46 (solve: 35µs)");
    }

    #[test]
    fn test_error_line() {
        let err = ExecutorError::Solver(aoc_solver::SolverError::NotFound(2023, 5));
        let line = format_result(&result(Err(err), None));
        assert!(line.starts_with("2023/05 Part 2: Error - "));
        assert!(line.contains("not found"));
    }
}
