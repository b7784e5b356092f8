//! The security policy value audited by the rule engine.

use super::{CipherPreferences, EccPreferences, RuleMask, SignaturePreferences};
use crate::errors::PolicyError;

/// A named bundle of ordered preference lists plus the rules it must obey.
///
/// Cipher, signature and curve preferences are mandatory for validation;
/// the builder still accepts their absence so the validator can report it.
/// Certificate signature preferences are genuinely optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityPolicy {
    version: Option<String>,
    cipher_preferences: Option<CipherPreferences>,
    signature_preferences: Option<SignaturePreferences>,
    certificate_signature_preferences: Option<SignaturePreferences>,
    ecc_preferences: Option<EccPreferences>,
    rules: RuleMask,
}

impl SecurityPolicy {
    pub fn builder() -> SecurityPolicyBuilder {
        SecurityPolicyBuilder::default()
    }

    /// The policy's human-readable version string.
    pub fn version(&self) -> Result<&str, PolicyError> {
        self.version.as_deref().ok_or(PolicyError::VersionNotFound)
    }

    pub fn cipher_preferences(&self) -> Option<&CipherPreferences> {
        self.cipher_preferences.as_ref()
    }

    pub fn signature_preferences(&self) -> Option<&SignaturePreferences> {
        self.signature_preferences.as_ref()
    }

    pub fn certificate_signature_preferences(&self) -> Option<&SignaturePreferences> {
        self.certificate_signature_preferences.as_ref()
    }

    pub fn ecc_preferences(&self) -> Option<&EccPreferences> {
        self.ecc_preferences.as_ref()
    }

    pub fn rules(&self) -> RuleMask {
        self.rules
    }
}

/// Builder for [`SecurityPolicy`].
#[derive(Debug, Clone, Default)]
pub struct SecurityPolicyBuilder {
    policy: SecurityPolicy,
}

impl SecurityPolicyBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.policy.version = Some(version.into());
        self
    }

    pub fn cipher_preferences(mut self, prefs: CipherPreferences) -> Self {
        self.policy.cipher_preferences = Some(prefs);
        self
    }

    pub fn signature_preferences(mut self, prefs: SignaturePreferences) -> Self {
        self.policy.signature_preferences = Some(prefs);
        self
    }

    pub fn certificate_signature_preferences(mut self, prefs: SignaturePreferences) -> Self {
        self.policy.certificate_signature_preferences = Some(prefs);
        self
    }

    pub fn ecc_preferences(mut self, prefs: EccPreferences) -> Self {
        self.policy.ecc_preferences = Some(prefs);
        self
    }

    pub fn rules(mut self, rules: RuleMask) -> Self {
        self.policy.rules = rules;
        self
    }

    pub fn build(self) -> SecurityPolicy {
        self.policy
    }
}
