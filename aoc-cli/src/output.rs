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

    /// Format and print a single result; failures go to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (self.quiet, &result.answer) {
            (true, Ok(answer)) => println!("{}", answer),
            (true, Err(e)) => eprintln!("Error: {}", e),
            (false, Ok(_)) => println!("{}", format_result(result)),
            (false, Err(_)) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    ///
    /// Shows both total compute time (sum of durations) and actual elapsed
    /// wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// `2015/06 Part 1 turned on lights: 377891 (parse: 1.20ms, solve: 35.10ms)`
/// or `2015/06 Part 1: Error - <diagnostic>`
fn format_result(result: &SolverResult) -> String {
    let mut prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            if !result.label.is_empty() {
                prefix.push(' ');
                prefix.push_str(result.label);
            }
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
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
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExecutorError, InputError};
    use std::path::PathBuf;

    fn solved(label: &'static str) -> SolverResult {
        SolverResult {
            year: 2015,
            day: 6,
            part: 1,
            label,
            answer: Ok("377891".to_string()),
            solve_duration: TimeDelta::microseconds(35_100),
            parse_duration: Some(TimeDelta::microseconds(1_200)),
        }
    }

    #[test]
    fn test_format_solved() {
        assert_eq!(
            format_result(&solved("turned on lights")),
            "2015/06 Part 1 turned on lights: 377891 (parse: 1.20ms, solve: 35.10ms)"
        );
        assert_eq!(
            format_result(&solved("")),
            "2015/06 Part 1: 377891 (parse: 1.20ms, solve: 35.10ms)"
        );
    }

    #[test]
    fn test_format_failed() {
        let error = ExecutorError::Input(InputError::Missing {
            year: 2015,
            day: 6,
            path: PathBuf::from("inputs/2015_day06.txt"),
        });
        let result = SolverResult {
            answer: Err(error.into()),
            parse_duration: None,
            ..solved("turned on lights")
        };
        assert_eq!(
            format_result(&result),
            "2015/06 Part 1: Error - Missing input for 2015/06: inputs/2015_day06.txt not found"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(std::time::Duration::from_millis(3)), "3.00ms");
    }
}
