//! Progress tracking and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::PiError;

/// Progress update sent from back-ends to observers.
///
/// One update is emitted per completed partition, plus a final `done`
/// notification once the reduction has run.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Executor index (for multi-back-end runs).
    pub exec_index: usize,
    /// Name of the back-end producing this update.
    pub backend: &'static str,
    /// Current progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Number of partitions evaluated so far.
    pub completed_parts: u64,
    /// Total number of partitions.
    pub total_parts: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(exec_index: usize, backend: &'static str, completed: u64, total: u64) -> Self {
        let progress = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };
        Self {
            exec_index,
            backend,
            progress,
            completed_parts: completed,
            total_parts: total,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(exec_index: usize, backend: &'static str) -> Self {
        Self {
            exec_index,
            backend,
            progress: 1.0,
            completed_parts: 0,
            total_parts: 0,
            done: true,
        }
    }
}

/// Cooperative cancellation token using an atomic bool.
///
/// Cancellation aborts the entire run; there is no partial-failure
/// recovery.
///
/// # Example
/// ```
/// use picalc_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    ///
    /// Use this as a checkpoint between partitions.
    pub fn check_cancelled(&self) -> Result<(), PiError> {
        if self.is_cancelled() {
            Err(PiError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
