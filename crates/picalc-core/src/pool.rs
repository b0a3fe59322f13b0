//! Pool back-end: rayon data-parallel map over partitions.
//!
//! The scatter/gather shape: ranges are scattered across the rayon pool,
//! `collect` is the barrier, and the reduction runs on the calling thread
//! once every partial exists.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::PiError;
use crate::executor::CoreExecutor;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::partition::partition;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::reduce::reduce;
use crate::series;

/// Rayon pool executor.
pub struct Pool;

impl Pool {
    /// Create a new `Pool` executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreExecutor for Pool {
    fn approximate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        exec_index: usize,
        terms: u64,
        opts: &Options,
    ) -> Result<f64, PiError> {
        cancel.check_cancelled()?;
        let ranges = partition(terms, opts.workers)?;
        let total = ranges.len() as u64;
        let completed = AtomicU64::new(0);

        let partials: Vec<f64> = ranges
            .into_par_iter()
            .map(|range| {
                let partial = series::sum_range(range);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                observer.on_progress(&ProgressUpdate::new(exec_index, self.name(), done, total));
                partial
            })
            .collect();

        Ok(reduce(&partials))
    }

    fn name(&self) -> &'static str {
        "Pool"
    }
}
