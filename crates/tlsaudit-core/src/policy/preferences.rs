//! Ordered preference lists.
//!
//! List order is the policy's preference order and is preserved exactly;
//! diagnostics report positions 1-based against it.

use super::{CipherSuite, EccNamedCurve, SignatureScheme};

/// Ordered cipher suite preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherPreferences {
    pub suites: Vec<&'static CipherSuite>,
}

impl CipherPreferences {
    pub fn new(suites: Vec<&'static CipherSuite>) -> Self {
        Self { suites }
    }

    pub fn count(&self) -> usize {
        self.suites.len()
    }
}

/// Ordered signature scheme preferences. Used for both handshake
/// signatures and certificate signatures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignaturePreferences {
    pub signature_schemes: Vec<&'static SignatureScheme>,
}

impl SignaturePreferences {
    pub fn new(signature_schemes: Vec<&'static SignatureScheme>) -> Self {
        Self { signature_schemes }
    }

    pub fn count(&self) -> usize {
        self.signature_schemes.len()
    }
}

/// Ordered elliptic curve preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EccPreferences {
    pub ecc_curves: Vec<&'static EccNamedCurve>,
}

impl EccPreferences {
    pub fn new(ecc_curves: Vec<&'static EccNamedCurve>) -> Self {
        Self { ecc_curves }
    }

    pub fn count(&self) -> usize {
        self.ecc_curves.len()
    }
}
