//! Rule identifiers and the per-policy rule bitmask.

use std::fmt;

use crate::errors::RuleError;

/// Identifier of a security rule. The discriminant is both the rule's index
/// in the rule definition table and its bit position in a [`RuleMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RuleId {
    PerfectForwardSecrecy = 0,
}

impl RuleId {
    /// Total number of defined rule identifiers.
    pub const COUNT: usize = 1;

    pub fn all() -> &'static [RuleId] {
        &[Self::PerfectForwardSecrecy]
    }

    /// Table index and bit position.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<RuleId> {
        Self::all().get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerfectForwardSecrecy => "perfect-forward-secrecy",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bitmask of enabled rules: bit `i` set means [`RuleId`] `i` applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RuleMask(u32);

impl RuleMask {
    pub const EMPTY: RuleMask = RuleMask(0);

    /// Build a mask from raw bits, rejecting any bit outside the rule
    /// identifier space.
    pub fn new(bits: u32) -> Result<Self, RuleError> {
        let unknown = bits & !Self::known_bits();
        if unknown != 0 {
            return Err(RuleError::UnknownRuleBit {
                bit: unknown.trailing_zeros(),
            });
        }
        Ok(Self(bits))
    }

    /// Build a mask from raw bits without range checking. Selection still
    /// rejects out-of-range bits at run time.
    pub fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    pub fn from_rules(rules: &[RuleId]) -> Self {
        rules.iter().fold(Self::EMPTY, |mask, rule| mask.with(*rule))
    }

    #[must_use]
    pub fn with(self, rule: RuleId) -> Self {
        Self(self.0 | (1 << rule.index()))
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.0 & (1 << rule.index()) != 0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of enabled rules.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn known_bits() -> u32 {
        if RuleId::COUNT >= u32::BITS as usize {
            u32::MAX
        } else {
            (1u32 << RuleId::COUNT) - 1
        }
    }
}

impl From<RuleId> for RuleMask {
    fn from(rule: RuleId) -> Self {
        Self::EMPTY.with(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_ids_are_dense() {
        assert_eq!(RuleId::all().len(), RuleId::COUNT);
        for (i, id) in RuleId::all().iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(RuleId::from_index(i), Some(*id));
        }
        assert_eq!(RuleId::from_index(RuleId::COUNT), None);
    }

    #[test]
    fn new_rejects_bits_beyond_rule_count() {
        let err = RuleMask::new(1 << RuleId::COUNT).unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownRuleBit {
                bit: RuleId::COUNT as u32
            }
        );
        assert!(RuleMask::new(0b1).is_ok());
        assert!(RuleMask::new(0).unwrap().is_empty());
    }

    #[test]
    fn from_bits_retain_keeps_unknown_bits() {
        let mask = RuleMask::from_bits_retain(0b110);
        assert_eq!(mask.bits(), 0b110);
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn from_rules_sets_matching_bits() {
        let mask = RuleMask::from_rules(&[RuleId::PerfectForwardSecrecy]);
        assert!(mask.contains(RuleId::PerfectForwardSecrecy));
        assert_eq!(mask.bits(), 0b1);
        assert_eq!(RuleMask::from(RuleId::PerfectForwardSecrecy), mask);
    }
}
