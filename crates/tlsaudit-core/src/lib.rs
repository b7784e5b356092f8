//! # tlsaudit-core
//!
//! Shared foundation for the tlsaudit rule engine: the read-only security
//! policy model, per-concern error enums, layered TOML configuration,
//! tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod policy;
pub mod tracing;

pub use errors::{
    AuditErrorCode, ConfigError, OutputError, PolicyError, RuleError, ValidationError,
};
pub use policy::{
    CipherPreferences, CipherSuite, EccNamedCurve, EccPreferences, KeyExchangeAlgorithm,
    PreferenceCategory, RuleId, RuleMask, SecurityPolicy, SignaturePreferences,
    SignatureScheme,
};
