//! CLI result presenter.

use std::time::Duration;

use picalc_orchestration::interfaces::{ResultPresenter, RunResult};

use crate::output::{absolute_error, format_approximation, format_duration, format_number};

/// CLI result presenter.
///
/// Prints the approximation and its absolute error versus π to 16 decimal
/// places, plus the run duration.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        backend: &str,
        terms: u64,
        workers: usize,
        value: f64,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{}", format_approximation(value));
            return;
        }

        println!("Backend: {backend}");
        println!("Terms: {}", format_number(terms));
        println!("Duration: {}", format_duration(duration));

        if details {
            println!("Workers: {workers}");
            println!("Terms per worker: {}", format_number(terms / workers as u64));
        }
        if self.verbose {
            println!(
                "Reference: {}",
                format_approximation(std::f64::consts::PI)
            );
        }

        println!(
            "PI is approximately {}, Error is {}",
            format_approximation(value),
            format_approximation(absolute_error(value))
        );
    }

    fn present_comparison(&self, results: &[RunResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.backend,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
