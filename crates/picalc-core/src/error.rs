//! Error type for π approximation runs.

/// Error type for π approximation runs.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// The (terms, workers) pair is not a valid partitioning request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A worker failed while evaluating its range.
    #[error("computation error: {0}")]
    Computation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The run was cancelled.
    #[error("computation cancelled")]
    Cancelled,

    /// The run timed out.
    #[error("computation timed out after {0}")]
    Timeout(String),

    /// Results from different back-ends don't match.
    #[error("result mismatch between back-ends")]
    Mismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PiError::InvalidArgument("workers (8) cannot exceed terms (4)".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: workers (8) cannot exceed terms (4)"
        );

        let err = PiError::Cancelled;
        assert_eq!(err.to_string(), "computation cancelled");

        let err = PiError::Timeout("5m".into());
        assert_eq!(err.to_string(), "computation timed out after 5m");
    }
}
