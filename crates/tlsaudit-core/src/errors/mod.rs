//! Error handling for tlsaudit.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod output_error;
pub mod policy_error;
pub mod rule_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::AuditErrorCode;
pub use output_error::OutputError;
pub use policy_error::PolicyError;
pub use rule_error::RuleError;
pub use validation_error::ValidationError;
