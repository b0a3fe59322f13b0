//! Strided back-end: sequential evaluation using the parity-split sweep.
//!
//! Same partitioned reduction as [`crate::sequential`], but each range is
//! summed as two stride-2 sweeps (positive terms, then negative terms)
//! instead of one alternating pass.

use crate::error::PiError;
use crate::executor::CoreExecutor;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::partition::partition;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::reduce::reduce;
use crate::series;

/// Strided executor.
pub struct Strided;

impl Strided {
    /// Create a new `Strided` executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Strided {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreExecutor for Strided {
    fn approximate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        exec_index: usize,
        terms: u64,
        opts: &Options,
    ) -> Result<f64, PiError> {
        let ranges = partition(terms, opts.workers)?;
        let total = ranges.len() as u64;

        let mut partials = Vec::with_capacity(ranges.len());
        for (index, range) in ranges.into_iter().enumerate() {
            cancel.check_cancelled()?;
            partials.push(series::sum_range_strided(range));
            observer.on_progress(&ProgressUpdate::new(
                exec_index,
                self.name(),
                index as u64 + 1,
                total,
            ));
        }
        Ok(reduce(&partials))
    }

    fn name(&self) -> &'static str {
        "Strided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpObserver;
    use crate::sequential::Sequential;

    fn run(backend: &dyn CoreExecutor, terms: u64, workers: usize) -> f64 {
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();
        let opts = Options {
            workers,
            ..Options::default()
        };
        backend
            .approximate_core(&cancel, &observer, 0, terms, &opts)
            .unwrap()
    }

    #[test]
    fn agrees_with_sequential() {
        let strided = Strided::new();
        let sequential = Sequential::new();
        for terms in [4u64, 100, 99_991] {
            let a = run(&strided, terms, 4);
            let b = run(&sequential, terms, 4);
            assert!((a - b).abs() < 1e-9, "terms={terms}: {a} vs {b}");
        }
    }

    #[test]
    fn converges_toward_pi() {
        let pi = run(&Strided::new(), 1_000_000, 4);
        assert!((pi - std::f64::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn cancellation_between_partitions() {
        let backend = Strided::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let observer = NoOpObserver::new();
        let result = backend.approximate_core(&cancel, &observer, 0, 100, &Options::default());
        assert!(matches!(result, Err(PiError::Cancelled)));
    }
}
