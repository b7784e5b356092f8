//! Rule definitions and bitmask-driven rule selection.

pub mod definitions;
pub mod selector;
pub mod types;

pub use definitions::{rule_definition, RULE_DEFINITIONS};
pub use selector::{select_rules, SelectedRules};
pub use types::*;
