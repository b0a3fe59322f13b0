//! # picalc-core
//!
//! Core library for the picalc partitioned π approximator.
//! Implements the Leibniz-series partitioner, evaluator, and reducer, plus
//! the execution back-ends that realize the fan-out/fan-in contract.

pub mod constants;
pub mod error;
pub mod executor;
pub mod observer;
pub mod options;
pub mod partition;
pub mod pool;
pub mod progress;
pub mod reduce;
pub mod registry;
pub mod sequential;
pub mod series;
pub mod strided;
pub mod threads;

// Re-exports
pub use constants::{exit_codes, AGREEMENT_TOLERANCE, DEFAULT_TERMS, DEFAULT_WORKERS};
pub use error::PiError;
pub use executor::{CoreExecutor, Executor, PiCalculator};
pub use observer::{NoOpObserver, ProgressObserver};
pub use options::Options;
pub use partition::{partition, Range};
pub use progress::{CancellationToken, ProgressUpdate};
pub use registry::{BackendFactory, DefaultFactory};

/// Approximate π with `terms` series terms split across `workers` partitions.
///
/// This is a convenience function for simple use cases. For back-end
/// selection, progress reporting, or cancellation, use the `Executor` trait
/// directly.
///
/// # Example
/// ```
/// let pi = picalc_core::approximate_pi(1_000_000, 4).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-5);
/// ```
pub fn approximate_pi(terms: u64, workers: usize) -> Result<f64, PiError> {
    use std::sync::Arc;

    use executor::Executor;
    use observer::NoOpObserver;
    use sequential::Sequential;

    let calc = PiCalculator::new(Arc::new(Sequential::new()));
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let opts = Options {
        workers,
        ..Options::default()
    };
    calc.approximate(&cancel, &observer, 0, terms, &opts)
}
