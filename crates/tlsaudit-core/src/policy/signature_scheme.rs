//! Signature schemes.

/// A signature scheme, identified in diagnostics by its IANA code point.
#[derive(Debug, PartialEq, Eq)]
pub struct SignatureScheme {
    pub name: &'static str,
    pub iana_value: u16,
}
