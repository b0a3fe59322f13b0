//! Error handling and exit codes.

use picalc_core::constants::exit_codes;
use picalc_core::error::PiError;

/// Map a run error to the appropriate exit code.
#[allow(dead_code)]
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::Computation(_) => exit_codes::ERROR_GENERIC,
        PiError::InvalidArgument(_) | PiError::Config(_) => exit_codes::ERROR_CONFIG,
        PiError::Cancelled => exit_codes::ERROR_CANCELED,
        PiError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        PiError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&PiError::Cancelled), 130);
        assert_eq!(handle_error(&PiError::Timeout("5m".into())), 2);
        assert_eq!(handle_error(&PiError::Mismatch), 3);
        assert_eq!(handle_error(&PiError::Config("bad".into())), 4);
        assert_eq!(handle_error(&PiError::InvalidArgument("bad".into())), 4);
        assert_eq!(handle_error(&PiError::Computation("boom".into())), 1);
    }
}
