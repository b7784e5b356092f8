//! Cipher suites and their key-exchange algorithms.

/// A key-exchange mechanism.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyExchangeAlgorithm {
    pub name: &'static str,
    /// Fresh secret per session, i.e. forward secret.
    pub is_ephemeral: bool,
}

/// A negotiable cipher suite.
#[derive(Debug, PartialEq, Eq)]
pub struct CipherSuite {
    /// Display name used in diagnostics.
    pub name: &'static str,
    /// Two-byte IANA code point.
    pub iana_value: [u8; 2],
    pub key_exchange_alg: &'static KeyExchangeAlgorithm,
}

impl CipherSuite {
    /// Whether this suite's key exchange provides forward secrecy.
    pub fn is_forward_secret(&self) -> bool {
        self.key_exchange_alg.is_ephemeral
    }
}
