//! Named elliptic curves.

/// A named elliptic curve (TLS supported group).
#[derive(Debug, PartialEq, Eq)]
pub struct EccNamedCurve {
    /// Display name used in diagnostics.
    pub name: &'static str,
    pub iana_id: u16,
}
