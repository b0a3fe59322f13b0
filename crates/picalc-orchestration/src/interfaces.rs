//! Orchestration interfaces.

use std::time::Duration;

use picalc_core::error::PiError;

/// Result of a single back-end run.
#[derive(Debug)]
pub struct RunResult {
    /// Back-end name.
    pub backend: String,
    /// The approximation or the failure that aborted the run.
    pub outcome: Result<f64, PiError>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl RunResult {
    /// The approximation, if the run succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful run.
    fn present_result(
        &self,
        backend: &str,
        terms: u64,
        workers: usize,
        value: f64,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of all runs.
    fn present_comparison(&self, results: &[RunResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
