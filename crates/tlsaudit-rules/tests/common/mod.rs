//! Shared fixtures for rule engine integration tests.
#![allow(dead_code)]

use tlsaudit_core::policy::catalog;
use tlsaudit_core::policy::{
    CipherPreferences, CipherSuite, EccPreferences, RuleId, RuleMask, SecurityPolicy,
    SecurityPolicyBuilder, SignaturePreferences,
};

pub static ECDHE_AES: CipherSuite = CipherSuite {
    name: "ECDHE-AES",
    iana_value: [0xC0, 0x13],
    key_exchange_alg: &catalog::KEX_ECDHE,
};

pub static RSA_AES: CipherSuite = CipherSuite {
    name: "RSA-AES",
    iana_value: [0x00, 0x2F],
    key_exchange_alg: &catalog::KEX_RSA,
};

pub const PFS_LINE_PREFIX: &str = "Perfect Forward Secrecy: policy ";

/// A policy with every mandatory list present and PFS enabled.
pub fn pfs_policy_builder(name: &str, suites: Vec<&'static CipherSuite>) -> SecurityPolicyBuilder {
    SecurityPolicy::builder()
        .version(name)
        .cipher_preferences(CipherPreferences::new(suites))
        .signature_preferences(SignaturePreferences::new(vec![
            &catalog::RSA_PKCS1_SHA256,
            &catalog::ECDSA_SECP256R1_SHA256,
        ]))
        .ecc_preferences(EccPreferences::new(vec![&catalog::SECP256R1, &catalog::X25519]))
        .rules(RuleMask::from(RuleId::PerfectForwardSecrecy))
}

pub fn pfs_policy(name: &str, suites: Vec<&'static CipherSuite>) -> SecurityPolicy {
    pfs_policy_builder(name, suites).build()
}

/// The two-suite policy from the reference scenario.
pub fn test_policy() -> SecurityPolicy {
    pfs_policy("test-policy", vec![&ECDHE_AES, &RSA_AES])
}
