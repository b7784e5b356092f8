//! Preference categories walked by every rule.

use std::fmt;

/// The four preference lists a policy carries, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceCategory {
    CipherSuite,
    SignatureScheme,
    CertificateSignatureScheme,
    Curve,
}

impl PreferenceCategory {
    /// Label used in diagnostic lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CipherSuite => "cipher suite",
            Self::SignatureScheme => "signature scheme",
            Self::CertificateSignatureScheme => "certificate signature scheme",
            Self::Curve => "curve",
        }
    }

    /// All categories in the order the validator walks them.
    pub fn all() -> &'static [PreferenceCategory] {
        &[
            Self::CipherSuite,
            Self::SignatureScheme,
            Self::CertificateSignatureScheme,
            Self::Curve,
        ]
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
