//! Structured diagnostic record and its text rendering.

use std::fmt;

use tlsaudit_core::policy::PreferenceCategory;

/// How a preference-list item is named in a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIdentifier<'a> {
    /// Cipher suites and curves, by display name.
    Name(&'a str),
    /// Signature schemes, by IANA code point rendered as lowercase hex.
    Code(u16),
}

impl fmt::Display for ItemIdentifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Code(code) => write!(f, "{code:x}"),
        }
    }
}

/// One rule violation for one preference-list item.
///
/// Renders as `<rule>: policy <policy>: <category>: <item> (#<index>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding<'a> {
    pub rule_name: &'a str,
    pub policy_name: &'a str,
    pub category: PreferenceCategory,
    pub item: ItemIdentifier<'a>,
    /// 1-based position in the policy's list.
    pub index: usize,
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: policy {}: {}: {} (#{})",
            self.rule_name,
            self.policy_name,
            self.category.label(),
            self.item,
            self.index
        )
    }
}
