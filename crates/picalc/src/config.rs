//! Application configuration from CLI flags and environment.

use std::num::NonZeroUsize;

use clap::Parser;

use picalc_core::constants::{DEFAULT_TERMS, DEFAULT_WORKERS};

/// picalc — partitioned Leibniz-series pi approximator.
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
pub struct AppConfig {
    /// Number of series terms to evaluate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TERMS, env = "PICALC_TERMS")]
    pub terms: u64,

    /// Back-end to run: sequential, strided, threads, pool, or all.
    #[arg(long, default_value = "all")]
    pub backend: String,

    /// Number of worker partitions (0 = detect available parallelism).
    #[arg(short, long, default_value = "0")]
    pub workers: usize,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path for a JSON run report.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the approximation).
    #[arg(short, long)]
    pub quiet: bool,

    /// Timeout duration (e.g., "5m", "30s").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> std::time::Duration {
        parse_duration(&self.timeout).unwrap_or(std::time::Duration::from_secs(300))
    }

    /// Resolve the worker count.
    ///
    /// `0` detects available parallelism and clamps it to the term count so
    /// short runs stay valid. An explicit count is forwarded unchanged and
    /// left for the core to validate.
    #[must_use]
    pub fn resolve_workers(&self) -> usize {
        if self.workers != 0 {
            return self.workers;
        }
        let detected =
            std::thread::available_parallelism().map_or(DEFAULT_WORKERS, NonZeroUsize::get);
        let ceiling = usize::try_from(self.terms).unwrap_or(usize::MAX).max(1);
        detected.min(ceiling)
    }
}

/// Parse a duration string like "5m", "1h", "30s".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
