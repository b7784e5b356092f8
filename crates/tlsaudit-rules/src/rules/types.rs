//! Core types for the rule table.

use std::fmt;

use tlsaudit_core::policy::{CipherSuite, EccNamedCurve, RuleId, SignatureScheme};

/// Predicate over a cipher suite: `true` means the suite complies.
pub type CipherSuitePredicate = fn(&CipherSuite) -> bool;

/// Predicate over a signature scheme. Used for both handshake and
/// certificate signature preferences.
pub type SignatureSchemePredicate = fn(&SignatureScheme) -> bool;

/// Predicate over a named curve.
pub type CurvePredicate = fn(&EccNamedCurve) -> bool;

/// A named security property, checked item by item against each
/// preference category.
///
/// Adding a rule means adding a [`RuleId`] variant, one table entry and its
/// predicates; selection and validation are untouched.
pub struct SecurityRule {
    pub id: RuleId,
    /// Display name, prefixed to every diagnostic line.
    pub name: &'static str,
    pub validate_cipher_suite: CipherSuitePredicate,
    pub validate_sig_scheme: SignatureSchemePredicate,
    pub validate_cert_sig_scheme: SignatureSchemePredicate,
    pub validate_curve: CurvePredicate,
}

impl fmt::Debug for SecurityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityRule")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
