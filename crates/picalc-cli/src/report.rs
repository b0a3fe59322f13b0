//! JSON run reports for the `--output` flag.

use std::io;
use std::path::Path;

use serde::Serialize;

use picalc_orchestration::interfaces::RunResult;

use crate::output::absolute_error;

/// A machine-readable record of one approximation run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Number of series terms evaluated.
    pub terms: u64,
    /// Number of partitions per back-end.
    pub workers: usize,
    /// The reference constant the error is measured against.
    pub reference: f64,
    /// One entry per back-end run.
    pub runs: Vec<BackendReport>,
}

/// One back-end's contribution to a [`RunReport`].
#[derive(Debug, Serialize)]
pub struct BackendReport {
    /// Back-end name.
    pub backend: String,
    /// The approximation, absent when the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Absolute error versus the reference, absent when the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
    /// Failure description, absent when the run succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// Wall-clock duration in seconds.
    pub duration_secs: f64,
}

impl RunReport {
    /// Build a report from collected run results.
    #[must_use]
    pub fn from_results(terms: u64, workers: usize, results: &[RunResult]) -> Self {
        let runs = results
            .iter()
            .map(|result| BackendReport {
                backend: result.backend.clone(),
                value: result.value(),
                error: result.value().map(absolute_error),
                failure: result.outcome.as_ref().err().map(ToString::to_string),
                duration_secs: result.duration.as_secs_f64(),
            })
            .collect();
        Self {
            terms,
            workers,
            reference: std::f64::consts::PI,
            runs,
        }
    }
}

/// Write a report to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: impl AsRef<Path>, report: &RunReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, json)
}
