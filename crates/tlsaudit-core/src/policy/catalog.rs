//! Well-known key exchanges, cipher suites, signature schemes and curves.

use super::{
    CipherPreferences, CipherSuite, EccNamedCurve, EccPreferences, KeyExchangeAlgorithm,
    RuleId, RuleMask, SecurityPolicy, SignaturePreferences, SignatureScheme,
};

// ---- Key exchange ----

pub static KEX_RSA: KeyExchangeAlgorithm = KeyExchangeAlgorithm {
    name: "RSA",
    is_ephemeral: false,
};

pub static KEX_DHE: KeyExchangeAlgorithm = KeyExchangeAlgorithm {
    name: "DHE",
    is_ephemeral: true,
};

pub static KEX_ECDHE: KeyExchangeAlgorithm = KeyExchangeAlgorithm {
    name: "ECDHE",
    is_ephemeral: true,
};

/// TLS 1.3 always negotiates an ephemeral (EC)DHE share.
pub static KEX_TLS13: KeyExchangeAlgorithm = KeyExchangeAlgorithm {
    name: "TLS1.3",
    is_ephemeral: true,
};

// ---- Cipher suites ----

pub static TLS_AES_128_GCM_SHA256: CipherSuite = CipherSuite {
    name: "TLS_AES_128_GCM_SHA256",
    iana_value: [0x13, 0x01],
    key_exchange_alg: &KEX_TLS13,
};

pub static TLS_AES_256_GCM_SHA384: CipherSuite = CipherSuite {
    name: "TLS_AES_256_GCM_SHA384",
    iana_value: [0x13, 0x02],
    key_exchange_alg: &KEX_TLS13,
};

pub static TLS_CHACHA20_POLY1305_SHA256: CipherSuite = CipherSuite {
    name: "TLS_CHACHA20_POLY1305_SHA256",
    iana_value: [0x13, 0x03],
    key_exchange_alg: &KEX_TLS13,
};

pub static ECDHE_ECDSA_AES128_GCM_SHA256: CipherSuite = CipherSuite {
    name: "ECDHE-ECDSA-AES128-GCM-SHA256",
    iana_value: [0xC0, 0x2B],
    key_exchange_alg: &KEX_ECDHE,
};

pub static ECDHE_RSA_AES128_GCM_SHA256: CipherSuite = CipherSuite {
    name: "ECDHE-RSA-AES128-GCM-SHA256",
    iana_value: [0xC0, 0x2F],
    key_exchange_alg: &KEX_ECDHE,
};

pub static ECDHE_RSA_AES256_GCM_SHA384: CipherSuite = CipherSuite {
    name: "ECDHE-RSA-AES256-GCM-SHA384",
    iana_value: [0xC0, 0x30],
    key_exchange_alg: &KEX_ECDHE,
};

pub static DHE_RSA_AES128_GCM_SHA256: CipherSuite = CipherSuite {
    name: "DHE-RSA-AES128-GCM-SHA256",
    iana_value: [0x00, 0x9E],
    key_exchange_alg: &KEX_DHE,
};

pub static AES128_GCM_SHA256: CipherSuite = CipherSuite {
    name: "AES128-GCM-SHA256",
    iana_value: [0x00, 0x9C],
    key_exchange_alg: &KEX_RSA,
};

pub static AES256_GCM_SHA384: CipherSuite = CipherSuite {
    name: "AES256-GCM-SHA384",
    iana_value: [0x00, 0x9D],
    key_exchange_alg: &KEX_RSA,
};

pub static AES128_SHA: CipherSuite = CipherSuite {
    name: "AES128-SHA",
    iana_value: [0x00, 0x2F],
    key_exchange_alg: &KEX_RSA,
};

// ---- Signature schemes ----

pub static RSA_PKCS1_SHA256: SignatureScheme = SignatureScheme {
    name: "rsa_pkcs1_sha256",
    iana_value: 0x0401,
};

pub static RSA_PKCS1_SHA384: SignatureScheme = SignatureScheme {
    name: "rsa_pkcs1_sha384",
    iana_value: 0x0501,
};

pub static ECDSA_SECP256R1_SHA256: SignatureScheme = SignatureScheme {
    name: "ecdsa_secp256r1_sha256",
    iana_value: 0x0403,
};

pub static ECDSA_SECP384R1_SHA384: SignatureScheme = SignatureScheme {
    name: "ecdsa_secp384r1_sha384",
    iana_value: 0x0503,
};

pub static RSA_PSS_RSAE_SHA256: SignatureScheme = SignatureScheme {
    name: "rsa_pss_rsae_sha256",
    iana_value: 0x0804,
};

pub static ED25519: SignatureScheme = SignatureScheme {
    name: "ed25519",
    iana_value: 0x0807,
};

// ---- Curves ----

pub static SECP256R1: EccNamedCurve = EccNamedCurve {
    name: "secp256r1",
    iana_id: 0x0017,
};

pub static SECP384R1: EccNamedCurve = EccNamedCurve {
    name: "secp384r1",
    iana_id: 0x0018,
};

pub static X25519: EccNamedCurve = EccNamedCurve {
    name: "x25519",
    iana_id: 0x001D,
};

/// A TLS 1.3-only policy that enables every rule and satisfies all of them.
pub fn default_tls13_policy() -> SecurityPolicy {
    SecurityPolicy::builder()
        .version("default_tls13")
        .cipher_preferences(CipherPreferences::new(vec![
            &TLS_AES_128_GCM_SHA256,
            &TLS_AES_256_GCM_SHA384,
            &TLS_CHACHA20_POLY1305_SHA256,
        ]))
        .signature_preferences(SignaturePreferences::new(vec![
            &ECDSA_SECP256R1_SHA256,
            &RSA_PSS_RSAE_SHA256,
            &ED25519,
        ]))
        .ecc_preferences(EccPreferences::new(vec![&X25519, &SECP256R1, &SECP384R1]))
        .rules(RuleMask::from_rules(RuleId::all()))
        .build()
}
