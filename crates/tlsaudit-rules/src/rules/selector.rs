//! Rule selector: decodes a policy's rule mask into rule definitions.

use smallvec::SmallVec;
use tlsaudit_core::errors::RuleError;
use tlsaudit_core::policy::{RuleId, RuleMask, SecurityPolicy};

use super::definitions::RULE_DEFINITIONS;
use super::types::SecurityRule;

/// Stack-resident list of selected rules, sized to the rule count.
pub type SelectedRules<'t> = SmallVec<[&'t SecurityRule; RuleId::COUNT]>;

/// Select the rules enabled by `policy`, in ascending bit order.
pub fn select_rules(policy: &SecurityPolicy) -> Result<SelectedRules<'static>, RuleError> {
    select_from_table(policy.rules(), &RULE_DEFINITIONS, RuleId::COUNT)
}

/// Decode `mask` least-significant bit first against `table`.
///
/// Fails if a set bit has no table entry, or if more than `capacity` rules
/// would be selected. Either means the mask or the table is corrupt.
pub fn select_from_table<'t>(
    mask: RuleMask,
    table: &'t [SecurityRule],
    capacity: usize,
) -> Result<SelectedRules<'t>, RuleError> {
    let mut selected = SelectedRules::new();
    let mut flags = mask.bits();
    let mut index = 0usize;

    while flags != 0 {
        let is_set = flags & 1 == 1;
        flags >>= 1;

        if is_set {
            let rule = table.get(index).ok_or(RuleError::RuleIndexOutOfRange {
                index,
                table_len: table.len(),
            })?;
            if selected.len() >= capacity {
                return Err(RuleError::TooManyRules { capacity });
            }
            selected.push(rule);
        }
        index += 1;
    }

    Ok(selected)
}
