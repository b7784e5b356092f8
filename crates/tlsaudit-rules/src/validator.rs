//! Policy validator: applies one rule to every item of one policy.

use tlsaudit_core::constants::UNNAMED_POLICY;
use tlsaudit_core::errors::{PolicyError, ValidationError};
use tlsaudit_core::policy::{PreferenceCategory, SecurityPolicy, SignaturePreferences};
use tracing::{debug, trace};

use crate::result::{Finding, ItemIdentifier, RuleResult};
use crate::rules::{SecurityRule, SignatureSchemePredicate};

/// Validate `policy` against `rule`, recording every violation in `result`.
///
/// Categories are walked in a fixed order (cipher suites, signature
/// schemes, certificate signature schemes, curves), and items within a
/// category in the policy's own preference order, so diagnostics are
/// reproducible line for line.
///
/// A missing cipher, signature or curve list is fatal; a missing
/// certificate signature list simply skips that category. A missing
/// version string is never fatal.
pub fn validate_policy(
    rule: &SecurityRule,
    policy: &SecurityPolicy,
    result: &mut RuleResult,
) -> Result<(), ValidationError> {
    let policy_name = policy.version().unwrap_or(UNNAMED_POLICY);
    debug!(rule = rule.name, policy = policy_name, "validating policy");

    let mut ctx = Recorder {
        rule,
        policy_name,
        result,
    };

    let cipher_prefs = policy
        .cipher_preferences()
        .ok_or(PolicyError::MissingPreferences {
            category: PreferenceCategory::CipherSuite,
        })?;
    for (i, cipher_suite) in cipher_prefs.suites.iter().enumerate() {
        let is_valid = (rule.validate_cipher_suite)(cipher_suite);
        ctx.record(
            is_valid,
            PreferenceCategory::CipherSuite,
            ItemIdentifier::Name(cipher_suite.name),
            i + 1,
        )?;
    }

    let sig_prefs = policy
        .signature_preferences()
        .ok_or(PolicyError::MissingPreferences {
            category: PreferenceCategory::SignatureScheme,
        })?;
    ctx.record_signatures(
        sig_prefs,
        rule.validate_sig_scheme,
        PreferenceCategory::SignatureScheme,
    )?;

    if let Some(cert_sig_prefs) = policy.certificate_signature_preferences() {
        ctx.record_signatures(
            cert_sig_prefs,
            rule.validate_cert_sig_scheme,
            PreferenceCategory::CertificateSignatureScheme,
        )?;
    }

    let ecc_prefs = policy
        .ecc_preferences()
        .ok_or(PolicyError::MissingPreferences {
            category: PreferenceCategory::Curve,
        })?;
    for (i, curve) in ecc_prefs.ecc_curves.iter().enumerate() {
        let is_valid = (rule.validate_curve)(curve);
        ctx.record(
            is_valid,
            PreferenceCategory::Curve,
            ItemIdentifier::Name(curve.name),
            i + 1,
        )?;
    }

    Ok(())
}

/// Routes predicate outcomes for one (rule, policy) pair into a result.
struct Recorder<'a> {
    rule: &'a SecurityRule,
    policy_name: &'a str,
    result: &'a mut RuleResult,
}

impl Recorder<'_> {
    fn record(
        &mut self,
        is_valid: bool,
        category: PreferenceCategory,
        item: ItemIdentifier<'_>,
        index: usize,
    ) -> Result<(), ValidationError> {
        let finding = Finding {
            rule_name: self.rule.name,
            policy_name: self.policy_name,
            category,
            item,
            index,
        };
        if !is_valid {
            trace!(%finding, "rule violation");
        }
        self.result.process(is_valid, &finding)?;
        Ok(())
    }

    fn record_signatures(
        &mut self,
        prefs: &SignaturePreferences,
        predicate: SignatureSchemePredicate,
        category: PreferenceCategory,
    ) -> Result<(), ValidationError> {
        for (i, sig_scheme) in prefs.signature_schemes.iter().enumerate() {
            let is_valid = predicate(sig_scheme);
            self.record(is_valid, category, ItemIdentifier::Code(sig_scheme.iana_value), i + 1)?;
        }
        Ok(())
    }
}
