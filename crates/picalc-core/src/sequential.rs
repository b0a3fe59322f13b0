//! Sequential back-end: evaluate partitions one by one on the calling
//! thread.
//!
//! The direct term-by-term loop of the C reference, kept partitioned so the
//! run reports progress per range and stays comparable with the concurrent
//! back-ends.

use crate::error::PiError;
use crate::executor::CoreExecutor;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::partition::partition;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::reduce::reduce;
use crate::series;

/// Sequential executor.
///
/// # Example
/// ```
/// use picalc_core::sequential::Sequential;
/// use picalc_core::executor::CoreExecutor;
/// use picalc_core::observer::NoOpObserver;
/// use picalc_core::options::Options;
/// use picalc_core::progress::CancellationToken;
///
/// let backend = Sequential::new();
/// let cancel = CancellationToken::new();
/// let observer = NoOpObserver::new();
/// let opts = Options::default();
/// let pi = backend.approximate_core(&cancel, &observer, 0, 1_000_000, &opts).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-5);
/// ```
pub struct Sequential;

impl Sequential {
    /// Create a new `Sequential` executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreExecutor for Sequential {
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
            partials.push(series::sum_range(range));
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
        "Sequential"
    }
}
