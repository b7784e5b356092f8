//! AuditErrorCode trait for machine-readable error codes.

/// Every error enum implements this to expose a stable code string that
/// audit tooling can match on without parsing messages.
pub trait AuditErrorCode {
    /// Returns the error code string (e.g., "POLICY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const POLICY_ERROR: &str = "POLICY_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
