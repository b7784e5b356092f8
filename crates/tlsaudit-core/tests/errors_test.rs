//! Tests for the tlsaudit error handling system.

use std::collections::HashSet;

use tlsaudit_core::errors::error_code;
use tlsaudit_core::errors::*;
use tlsaudit_core::policy::PreferenceCategory;

#[test]
fn every_error_has_an_error_code() {
    let policy = PolicyError::VersionNotFound;
    assert_eq!(policy.error_code(), error_code::POLICY_ERROR);

    let rule = RuleError::TooManyRules { capacity: 1 };
    assert_eq!(rule.error_code(), error_code::RULE_ERROR);

    let output = OutputError::Format;
    assert_eq!(output.error_code(), error_code::OUTPUT_ERROR);

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn error_codes_are_distinct() {
    let codes: HashSet<&str> = [
        error_code::POLICY_ERROR,
        error_code::RULE_ERROR,
        error_code::OUTPUT_ERROR,
        error_code::CONFIG_ERROR,
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn from_conversions_into_validation_error() {
    let err: ValidationError = PolicyError::MissingPreferences {
        category: PreferenceCategory::Curve,
    }
    .into();
    assert!(matches!(err, ValidationError::Policy(_)));
    assert_eq!(err.error_code(), error_code::POLICY_ERROR);

    let err: ValidationError = RuleError::RuleIndexOutOfRange {
        index: 3,
        table_len: 1,
    }
    .into();
    assert!(matches!(err, ValidationError::Rule(_)));
    assert_eq!(err.error_code(), error_code::RULE_ERROR);

    let err: ValidationError = OutputError::AllocationFailed { requested: 64 }.into();
    assert!(matches!(err, ValidationError::Output(_)));
    assert_eq!(err.error_code(), error_code::OUTPUT_ERROR);
}

#[test]
fn messages_name_the_failing_piece() {
    let err = PolicyError::MissingPreferences {
        category: PreferenceCategory::SignatureScheme,
    };
    assert_eq!(err.to_string(), "Policy has no signature scheme preferences");

    let err = ValidationError::from(RuleError::UnknownRuleBit { bit: 7 });
    assert_eq!(err.to_string(), "Rule error: Unknown rule bit 7 in rule mask");
}

#[test]
fn tagged_string_prefixes_code() {
    let err = OutputError::CapacityExceeded {
        limit: 10,
        requested: 12,
    };
    assert_eq!(
        err.tagged_string(),
        "[OUTPUT_ERROR] Diagnostic output limit of 10 bytes exceeded (12 requested)"
    );
}
