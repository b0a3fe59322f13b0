//! Thread back-end: one worker thread per partition, partials gathered over
//! a channel.
//!
//! Each worker owns exactly one range and produces exactly one immutable
//! partial; the reduction runs only after all partials have been received.
//! Workers do not communicate with each other.

use std::thread;

use crossbeam_channel::bounded;

use crate::error::PiError;
use crate::executor::CoreExecutor;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::partition::partition;
use crate::progress::{CancellationToken, ProgressUpdate};
use crate::reduce::reduce;
use crate::series;

/// Scoped-thread executor.
pub struct Threads;

impl Threads {
    /// Create a new `Threads` executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Threads {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreExecutor for Threads {
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
        let total = ranges.len();

        // One slot per worker; every worker sends exactly once
        let (tx, rx) = bounded::<(usize, f64)>(total);

        thread::scope(|scope| {
            for (index, range) in ranges.iter().copied().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let _ = tx.send((index, series::sum_range(range)));
                });
            }
            drop(tx);

            // Barrier: the reduction must not start until all partials exist
            let mut partials = vec![0.0f64; total];
            for received in 0..total {
                let (index, partial) = rx.recv().map_err(|_| {
                    PiError::Computation("worker exited without a result".into())
                })?;
                partials[index] = partial;
                observer.on_progress(&ProgressUpdate::new(
                    exec_index,
                    self.name(),
                    received as u64 + 1,
                    total as u64,
                ));
            }
            Ok(reduce(&partials))
        })
    }

    fn name(&self) -> &'static str {
        "Threads"
    }
}
