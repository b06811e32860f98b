//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Answers go to stdout and failures to stderr, in both modes
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
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

/// `2021/15 Part 1: 40 (parse: 31µs, solve: 52µs)`, or the error for a failed part
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
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

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;
    use aoc_solver::{SolveError, SolverError};

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(31)), "31µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2_500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(1_250)), "1.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-7)), "-7µs");
        assert_eq!(format_std_duration(Duration::from_micros(999)), "999µs");
    }

    #[test]
    fn test_format_answer_line() {
        let result = SolverResult {
            year: 2021,
            day: 15,
            part: 1,
            answer: Ok("40".into()),
            parse_duration: Some(TimeDelta::microseconds(31)),
            solve_duration: TimeDelta::microseconds(52),
        };
        assert_eq!(format_result(&result), "2021/15 Part 1: 40 (parse: 31µs, solve: 52µs)");

        let second = SolverResult {
            part: 2,
            parse_duration: None,
            ..result
        };
        assert_eq!(format_result(&second), "2021/15 Part 2: 40 (solve: 52µs)");
    }

    #[test]
    fn test_format_failed_line() {
        let result = SolverResult {
            year: 2021,
            day: 9,
            part: 1,
            answer: Err(ExecutorError::Solver(SolverError::SolveError(SolveError::NoSolution(
                "walled".into(),
            )))
            .into()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        };
        let line = format_result(&result);
        assert!(line.starts_with("2021/09 Part 1: Error - "));
        assert!(line.contains("walled"));
    }
}
