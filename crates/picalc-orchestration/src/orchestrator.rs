//! Core orchestration: back-end execution and agreement analysis.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use picalc_core::constants::AGREEMENT_TOLERANCE;
use picalc_core::error::PiError;
use picalc_core::executor::Executor;
use picalc_core::observer::{NoOpObserver, ProgressObserver};
use picalc_core::options::Options;
use picalc_core::progress::CancellationToken;

use crate::interfaces::RunResult;

/// Execute a run with each given executor.
pub fn execute_runs(
    executors: &[Arc<dyn Executor>],
    terms: u64,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Vec<RunResult> {
    execute_runs_with_observer(executors, terms, opts, cancel, timeout, &NoOpObserver::new())
}

/// Execute a run with each given executor, forwarding progress updates to
/// the observer.
///
/// A single executor runs directly on the calling thread; multiple
/// executors fan out across the rayon pool. The timeout is checked between
/// dispatches, not mid-evaluation.
pub fn execute_runs_with_observer(
    executors: &[Arc<dyn Executor>],
    terms: u64,
    opts: &Options,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
    observer: &dyn ProgressObserver,
) -> Vec<RunResult> {
    let start_time = Instant::now();

    if executors.len() == 1 {
        let executor = &executors[0];
        let start = Instant::now();
        let outcome = executor.approximate(cancel, observer, 0, terms, opts);
        return vec![RunResult {
            backend: executor.name().to_string(),
            outcome,
            duration: start.elapsed(),
        }];
    }

    // Multiple executors: fan out across the rayon pool
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    executors
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(index, executor)| {
            let start = Instant::now();

            if let Some(timeout) = timeout {
                if start_time.elapsed() > timeout {
                    return RunResult {
                        backend: executor.name().to_string(),
                        outcome: Err(PiError::Timeout(format!("{timeout:?}"))),
                        duration: start.elapsed(),
                    };
                }
            }

            debug!(backend = executor.name(), terms, "dispatching run");
            let outcome = executor.approximate(cancel, observer, index, terms, opts);
            RunResult {
                backend: executor.name().to_string(),
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Check that all successful runs agree within [`AGREEMENT_TOLERANCE`]
/// relative.
///
/// Back-ends reduce the same partials in different orders, so exact
/// equality is not expected.
pub fn analyze_agreement(results: &[RunResult]) -> Result<(), PiError> {
    let valid: Vec<(&str, f64)> = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r.backend.as_str(), v)))
        .collect();

    if valid.is_empty() {
        return Err(PiError::Computation("no successful runs".into()));
    }

    let (_, reference) = valid[0];
    for &(backend, value) in &valid[1..] {
        if !within_tolerance(reference, value) {
            debug!(backend, reference, value, "agreement check failed");
            return Err(PiError::Mismatch);
        }
    }
    Ok(())
}

fn within_tolerance(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= AGREEMENT_TOLERANCE * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use picalc_core::executor::PiCalculator;
    use picalc_core::registry::{BackendFactory, DefaultFactory};
    use picalc_core::sequential::Sequential;

    fn ok(backend: &str, value: f64) -> RunResult {
        RunResult {
            backend: backend.into(),
            outcome: Ok(value),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(backend: &str) -> RunResult {
        RunResult {
            backend: backend.into(),
            outcome: Err(PiError::Computation("boom".into())),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_executor() {
        let executor: Arc<dyn Executor> =
            Arc::new(PiCalculator::new(Arc::new(Sequential::new())));
        let opts = Options::default();
        let cancel = CancellationToken::new();
        let results = execute_runs(&[executor], 1_000_000, &opts, &cancel, None);
        assert_eq!(results.len(), 1);
        let value = results[0].value().unwrap();
        assert!((value - std::f64::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn execute_all_backends_in_parallel() {
        let factory = DefaultFactory::new();
        let executors: Vec<Arc<dyn Executor>> = factory
            .available()
            .into_iter()
            .map(|name| factory.get(name).unwrap())
            .collect();
        let opts = Options::default();
        let cancel = CancellationToken::new();
        let results = execute_runs(&executors, 100_000, &opts, &cancel, None);
        assert_eq!(results.len(), 4);
        for result in &results {
            assert!(
                result.outcome.is_ok(),
                "{} failed: {:?}",
                result.backend,
                result.outcome
            );
        }
        assert!(analyze_agreement(&results).is_ok());
    }

    #[test]
    fn execute_with_cancellation() {
        let executor: Arc<dyn Executor> =
            Arc::new(PiCalculator::new(Arc::new(Sequential::new())));
        let opts = Options::default();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let results = execute_runs(&[executor], 1_000_000, &opts, &cancel, None);
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0].outcome, Err(PiError::Cancelled)));
    }

    #[test]
    fn execute_with_generous_timeout() {
        let executor: Arc<dyn Executor> =
            Arc::new(PiCalculator::new(Arc::new(Sequential::new())));
        let opts = Options::default();
        let cancel = CancellationToken::new();
        let timeout = Some(Duration::from_secs(30));
        let results = execute_runs(&[executor], 10_000, &opts, &cancel, timeout);
        assert!(results[0].outcome.is_ok());
    }

    #[test]
    fn execute_propagates_invalid_arguments() {
        let executor: Arc<dyn Executor> =
            Arc::new(PiCalculator::new(Arc::new(Sequential::new())));
        let opts = Options {
            workers: 100,
            ..Options::default()
        };
        let cancel = CancellationToken::new();
        let results = execute_runs(&[executor], 10, &opts, &cancel, None);
        assert!(matches!(
            results[0].outcome,
            Err(PiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let pi = std::f64::consts::PI;
        let results = vec![ok("A", pi), ok("B", pi)];
        assert!(analyze_agreement(&results).is_ok());
    }

    #[test]
    fn analyze_within_tolerance() {
        let pi = std::f64::consts::PI;
        let results = vec![ok("A", pi), ok("B", pi + 1e-14)];
        assert!(analyze_agreement(&results).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", std::f64::consts::PI), ok("B", 3.15)];
        assert!(matches!(
            analyze_agreement(&results),
            Err(PiError::Mismatch)
        ));
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![failed("A"), failed("B")];
        assert!(matches!(
            analyze_agreement(&results),
            Err(PiError::Computation(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_agreement(&[]),
            Err(PiError::Computation(_))
        ));
    }

    #[test]
    fn analyze_ignores_failed_entries() {
        let pi = std::f64::consts::PI;
        let results = vec![ok("A", pi), failed("B"), ok("C", pi)];
        assert!(analyze_agreement(&results).is_ok());
    }

    #[test]
    fn analyze_single_valid_result() {
        let results = vec![ok("A", std::f64::consts::PI)];
        assert!(analyze_agreement(&results).is_ok());
    }
}
