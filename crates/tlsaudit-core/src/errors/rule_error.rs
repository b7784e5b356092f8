//! Rule table and bitmask consistency errors.

use super::error_code::{self, AuditErrorCode};

/// Internal consistency violations: a corrupt bitmask or a rule table that
/// is shorter than the rule identifier space. Never a user input error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Rule bit {index} is outside the rule table (len {table_len})")]
    RuleIndexOutOfRange { index: usize, table_len: usize },

    #[error("Selected rules exceed fixed capacity of {capacity}")]
    TooManyRules { capacity: usize },

    #[error("Unknown rule bit {bit} in rule mask")]
    UnknownRuleBit { bit: u32 },
}

impl AuditErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
