//! Security policy model consumed by the rule engine.
//!
//! Everything here is read-only from the engine's point of view: policies
//! and their preference lists are built by the caller and only borrowed
//! during validation.

pub mod catalog;
pub mod category;
pub mod cipher_suite;
pub mod curve;
pub mod preferences;
pub mod rule_mask;
pub mod security_policy;
pub mod signature_scheme;

pub use category::PreferenceCategory;
pub use cipher_suite::{CipherSuite, KeyExchangeAlgorithm};
pub use curve::EccNamedCurve;
pub use preferences::{CipherPreferences, EccPreferences, SignaturePreferences};
pub use rule_mask::{RuleId, RuleMask};
pub use security_policy::{SecurityPolicy, SecurityPolicyBuilder};
pub use signature_scheme::SignatureScheme;
