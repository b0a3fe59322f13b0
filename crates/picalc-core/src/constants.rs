//! Constants for series evaluation and run configuration.

/// Default number of series terms when none is requested.
pub const DEFAULT_TERMS: u64 = 10_000_000;

/// Default partition count when parallelism detection is unavailable.
pub const DEFAULT_WORKERS: usize = 4;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Relative tolerance for cross-back-end agreement checks.
///
/// Back-ends reduce the same partial sums in different orders, so results
/// may differ by a few ulps but never by more than this.
pub const AGREEMENT_TOLERANCE: f64 = 1e-9;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Back-end results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
