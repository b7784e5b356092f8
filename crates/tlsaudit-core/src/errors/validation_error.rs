//! Validation errors propagated by the validator and orchestrator.

use super::error_code::AuditErrorCode;
use super::{OutputError, PolicyError, RuleError};

/// Any fatal condition that aborts a validation run.
/// Aggregates the per-concern errors via `From` conversions so `?` works
/// across the engine.
///
/// A compliance violation is never a `ValidationError`; it is recorded in
/// the rule result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl AuditErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Policy(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}
