//! The rule definition table.

use tlsaudit_core::policy::{CipherSuite, EccNamedCurve, RuleId, SignatureScheme};

use super::types::SecurityRule;

/// Every defined rule, indexed by [`RuleId`]. Entry `i` is the rule enabled
/// by bit `i` of a policy's rule mask.
pub static RULE_DEFINITIONS: [SecurityRule; RuleId::COUNT] = [SecurityRule {
    id: RuleId::PerfectForwardSecrecy,
    name: "Perfect Forward Secrecy",
    validate_cipher_suite: validate_forward_secret,
    validate_sig_scheme: all_sig_schemes,
    validate_cert_sig_scheme: all_sig_schemes,
    validate_curve: all_curves,
}];

/// Look up the definition of a rule.
pub fn rule_definition(id: RuleId) -> &'static SecurityRule {
    &RULE_DEFINITIONS[id.index()]
}

fn validate_forward_secret(cipher_suite: &CipherSuite) -> bool {
    cipher_suite.is_forward_secret()
}

fn all_sig_schemes(_sig_scheme: &SignatureScheme) -> bool {
    true
}

fn all_curves(_curve: &EccNamedCurve) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlsaudit_core::policy::catalog;

    #[test]
    fn table_entries_sit_at_their_id() {
        for (i, rule) in RULE_DEFINITIONS.iter().enumerate() {
            assert_eq!(rule.id.index(), i, "rule '{}' is misplaced", rule.name);
        }
        for id in RuleId::all() {
            assert_eq!(rule_definition(*id).id, *id);
        }
    }

    #[test]
    fn forward_secrecy_checks_key_exchange_only() {
        let rule = rule_definition(RuleId::PerfectForwardSecrecy);
        assert_eq!(rule.name, "Perfect Forward Secrecy");

        assert!((rule.validate_cipher_suite)(&catalog::ECDHE_RSA_AES128_GCM_SHA256));
        assert!((rule.validate_cipher_suite)(&catalog::DHE_RSA_AES128_GCM_SHA256));
        assert!((rule.validate_cipher_suite)(&catalog::TLS_AES_128_GCM_SHA256));
        assert!(!(rule.validate_cipher_suite)(&catalog::AES128_GCM_SHA256));
        assert!(!(rule.validate_cipher_suite)(&catalog::AES128_SHA));

        assert!((rule.validate_sig_scheme)(&catalog::RSA_PKCS1_SHA256));
        assert!((rule.validate_cert_sig_scheme)(&catalog::RSA_PKCS1_SHA256));
        assert!((rule.validate_curve)(&catalog::SECP256R1));
    }

    #[test]
    fn forward_secrecy_agrees_with_suite_classification() {
        let rule = rule_definition(RuleId::PerfectForwardSecrecy);
        for suite in [
            &catalog::TLS_AES_256_GCM_SHA384,
            &catalog::TLS_CHACHA20_POLY1305_SHA256,
            &catalog::ECDHE_ECDSA_AES128_GCM_SHA256,
            &catalog::ECDHE_RSA_AES256_GCM_SHA384,
            &catalog::AES256_GCM_SHA384,
            &catalog::AES128_SHA,
        ] {
            assert_eq!(
                (rule.validate_cipher_suite)(suite),
                suite.is_forward_secret(),
                "{}",
                suite.name
            );
        }
    }
}
