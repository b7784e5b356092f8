//! Policy precondition errors.

use super::error_code::{self, AuditErrorCode};
use crate::policy::PreferenceCategory;

/// Errors raised when a security policy is structurally incomplete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Policy has no {category} preferences")]
    MissingPreferences { category: PreferenceCategory },

    /// Soft failure: the validator substitutes a placeholder name.
    #[error("Policy has no version string")]
    VersionNotFound,
}

impl AuditErrorCode for PolicyError {
    fn error_code(&self) -> &'static str {
        error_code::POLICY_ERROR
    }
}
