//! Executor traits and the `PiCalculator` decorator.
//!
//! `Executor` is the public trait consumed by orchestration.
//! `CoreExecutor` is the internal trait implemented by back-ends.
//! `PiCalculator` is a decorator that validates the partitioning request and
//! checks cancellation before delegating.

use std::sync::Arc;

use crate::error::PiError;
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::partition;
use crate::progress::{CancellationToken, ProgressUpdate};

/// Public trait for π approximators, consumed by orchestration.
pub trait Executor: Send + Sync {
    /// Approximate π over `terms` series terms with the given options.
    fn approximate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        exec_index: usize,
        terms: u64,
        opts: &Options,
    ) -> Result<f64, PiError>;

    /// Get the name of this executor.
    fn name(&self) -> &'static str;
}

/// Internal trait for back-end implementations.
/// Wrapped by `PiCalculator`, which adds validation and cancellation checks.
pub trait CoreExecutor: Send + Sync {
    /// Evaluate the partitioned reduction.
    ///
    /// Callers guarantee `(terms, opts.workers)` has already been validated.
    fn approximate_core(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        exec_index: usize,
        terms: u64,
        opts: &Options,
    ) -> Result<f64, PiError>;

    /// Get the name of this back-end.
    fn name(&self) -> &'static str;
}

/// Decorator that wraps a `CoreExecutor` with argument validation and a
/// pre-flight cancellation check.
pub struct PiCalculator {
    inner: Arc<dyn CoreExecutor>,
}

impl PiCalculator {
    /// Create a new `PiCalculator` wrapping the given back-end.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreExecutor>) -> Self {
        Self { inner }
    }
}

impl Executor for PiCalculator {
    fn approximate(
        &self,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
        exec_index: usize,
        terms: u64,
        opts: &Options,
    ) -> Result<f64, PiError> {
        // Invalid requests fail before any evaluation is attempted
        partition::validate(terms, opts.workers)?;

        if cancel.is_cancelled() {
            return Err(PiError::Cancelled);
        }

        let value = self
            .inner
            .approximate_core(cancel, observer, exec_index, terms, opts)?;
        observer.on_progress(&ProgressUpdate::done(exec_index, self.inner.name()));
        Ok(value)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpObserver;
    use crate::sequential::Sequential;

    fn calculator() -> PiCalculator {
        PiCalculator::new(Arc::new(Sequential::new()))
    }

    #[test]
    fn rejects_invalid_arguments_before_running() {
        let calc = calculator();
        let cancel = CancellationToken::new();
        let observer = NoOpObserver::new();

        let opts = Options {
            workers: 8,
            ..Options::default()
        };
        assert!(matches!(
            calc.approximate(&cancel, &observer, 0, 4, &opts),
            Err(PiError::InvalidArgument(_))
        ));

        let opts = Options {
            workers: 0,
            ..Options::default()
        };
        assert!(matches!(
            calc.approximate(&cancel, &observer, 0, 100, &opts),
            Err(PiError::InvalidArgument(_))
        ));

        assert!(matches!(
            calc.approximate(&cancel, &observer, 0, 0, &Options::default()),
            Err(PiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cancelled_before_start() {
        let calc = calculator();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let observer = NoOpObserver::new();
        assert!(matches!(
            calc.approximate(&cancel, &observer, 0, 1_000, &Options::default()),
            Err(PiError::Cancelled)
        ));
    }

    #[test]
    fn emits_done_update() {
        use std::sync::atomic::{AtomicBool, Ordering};

        struct DoneObserver {
            saw_done: AtomicBool,
        }
        impl ProgressObserver for DoneObserver {
            fn on_progress(&self, update: &ProgressUpdate) {
                if update.done {
                    self.saw_done.store(true, Ordering::Relaxed);
                }
            }
        }

        let calc = calculator();
        let cancel = CancellationToken::new();
        let observer = DoneObserver {
            saw_done: AtomicBool::new(false),
        };
        calc.approximate(&cancel, &observer, 0, 1_000, &Options::default())
            .unwrap();
        assert!(observer.saw_done.load(Ordering::Relaxed));
    }

    #[test]
    fn name_delegates_to_inner() {
        assert_eq!(calculator().name(), "Sequential");
    }
}
