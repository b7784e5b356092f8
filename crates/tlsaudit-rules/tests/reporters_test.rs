//! Auditor and reporter tests.

mod common;

use common::*;
use tlsaudit_core::config::OutputConfig;
use tlsaudit_core::errors::ValidationError;
use tlsaudit_core::policy::catalog;
use tlsaudit_rules::validate_security_rules;
use tlsaudit_rules::reporters::{available_formats, create_reporter};
use tlsaudit_rules::{AuditReport, PolicyAuditor, RuleResult};

#[test]
fn auditor_collects_findings_across_policies() {
    let policies = vec![test_policy(), catalog::default_tls13_policy()];
    let auditor = PolicyAuditor::new(OutputConfig::default());

    let report = auditor.audit(&policies).unwrap();

    assert_eq!(report.policies_checked, 2);
    assert!(report.violation_found);
    assert_eq!(
        report.diagnostics,
        vec!["Perfect Forward Secrecy: policy test-policy: cipher suite: RSA-AES (#2)".to_string()]
    );
}

#[test]
fn auditor_without_diagnostics_reports_flag_only() {
    let config = OutputConfig {
        diagnostics: Some(false),
        ..Default::default()
    };
    let report = PolicyAuditor::new(config).audit([&test_policy()]).unwrap();

    assert!(report.violation_found);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn auditor_propagates_output_limit() {
    let config = OutputConfig {
        max_bytes: Some(16),
        ..Default::default()
    };
    let err = PolicyAuditor::new(config)
        .audit([&test_policy()])
        .unwrap_err();
    assert!(matches!(err, ValidationError::Output(_)));
}

#[test]
fn text_reporter_is_byte_exact() {
    let report = PolicyAuditor::default().audit([&test_policy()]).unwrap();
    let reporter = create_reporter("text").unwrap();

    assert_eq!(reporter.name(), "text");
    assert_eq!(
        reporter.generate(&report).unwrap(),
        "Perfect Forward Secrecy: policy test-policy: cipher suite: RSA-AES (#2)\n"
    );
}

#[test]
fn json_reporter_round_trips_report() {
    let report = PolicyAuditor::default().audit([&test_policy()]).unwrap();
    let json = create_reporter("json").unwrap().generate(&report).unwrap();

    let parsed: AuditReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn every_listed_format_has_a_reporter() {
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        assert_eq!(reporter.name(), *format);
    }
    assert!(create_reporter("sarif").is_none());
}

#[test]
fn clean_audit_renders_empty_text() {
    let report = PolicyAuditor::default()
        .audit([&catalog::default_tls13_policy()])
        .unwrap();
    assert!(!report.violation_found);
    assert_eq!(create_reporter("text").unwrap().generate(&report).unwrap(), "");
}

#[test]
fn line_breaks_in_policy_names_stay_in_one_entry() {
    let policy = pfs_policy("edge\r\nname", vec![&RSA_AES]);
    let mut raw = RuleResult::with_output();
    validate_security_rules(&policy, &mut raw).unwrap();

    let report = PolicyAuditor::default().audit([&policy]).unwrap();
    let text = create_reporter("text").unwrap().generate(&report).unwrap();

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(text, raw.output_str());
    assert_eq!(
        text,
        "Perfect Forward Secrecy: policy edge\r\nname: cipher suite: RSA-AES (#1)\n"
    );
}

#[test]
fn render_uses_configured_text_format() {
    let auditor = PolicyAuditor::new(OutputConfig {
        format: Some("text".to_string()),
        ..Default::default()
    });
    let report = auditor.audit([&test_policy()]).unwrap();

    assert_eq!(
        auditor.render(&report).unwrap(),
        "Perfect Forward Secrecy: policy test-policy: cipher suite: RSA-AES (#2)\n"
    );
}

#[test]
fn render_uses_configured_json_format() {
    let auditor = PolicyAuditor::new(OutputConfig {
        format: Some("json".to_string()),
        ..Default::default()
    });
    let report = auditor.audit([&test_policy()]).unwrap();

    let rendered = auditor.render(&report).unwrap();
    let parsed: AuditReport = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn render_defaults_to_text() {
    let auditor = PolicyAuditor::default();
    let report = auditor.audit([&catalog::default_tls13_policy()]).unwrap();
    assert_eq!(auditor.render(&report).unwrap(), "");
}

#[test]
fn render_rejects_unknown_format() {
    let auditor = PolicyAuditor::new(OutputConfig {
        format: Some("sarif".to_string()),
        ..Default::default()
    });
    let err = auditor.render(&AuditReport::default()).unwrap_err();
    assert!(err.contains("sarif"));
}
