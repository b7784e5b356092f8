//! Diagnostic sink errors.

use super::error_code::{self, AuditErrorCode};

/// Errors raised while appending to a diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    #[error("Diagnostic output limit of {limit} bytes exceeded ({requested} requested)")]
    CapacityExceeded { limit: usize, requested: usize },

    #[error("Failed to allocate {requested} bytes of diagnostic output")]
    AllocationFailed { requested: usize },

    #[error("Failed to format diagnostic output")]
    Format,
}

impl AuditErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
