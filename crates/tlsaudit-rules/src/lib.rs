//! # tlsaudit-rules
//!
//! Rule engine for auditing TLS security policies. A policy's rule bitmask
//! selects entries from a static rule table; each selected rule's
//! per-category predicates are applied to every entry of every preference
//! list, and violations accumulate into a [`RuleResult`].
//!
//! ```rust
//! use tlsaudit_core::policy::catalog;
//! use tlsaudit_rules::{validate_security_rules, RuleResult};
//!
//! let policy = catalog::default_tls13_policy();
//! let mut result = RuleResult::with_output();
//! validate_security_rules(&policy, &mut result).unwrap();
//! assert!(!result.found_error());
//! ```

pub mod auditor;
pub mod orchestrator;
pub mod reporters;
pub mod result;
pub mod rules;
pub mod validator;

pub use auditor::{AuditReport, PolicyAuditor};
pub use orchestrator::{validate_policies, validate_security_rules};
pub use result::{DiagnosticSink, Finding, ItemIdentifier, RuleResult};
pub use rules::{rule_definition, select_rules, SecurityRule, SelectedRules, RULE_DEFINITIONS};
pub use validator::validate_policy;
