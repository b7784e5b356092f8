//! Policy auditor: validates a batch of policies under one output config.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tlsaudit_core::config::OutputConfig;
use tlsaudit_core::errors::ValidationError;
use tlsaudit_core::policy::SecurityPolicy;
use tracing::info;

use crate::orchestrator::validate_security_rules;
use crate::reporters::create_reporter;
use crate::result::RuleResult;

/// Outcome of auditing a batch of policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub policies_checked: usize,
    pub violation_found: bool,
    /// One entry per diagnostic line, without the trailing newline.
    /// Empty when diagnostics are disabled.
    pub diagnostics: Vec<String>,
}

impl AuditReport {
    fn from_result(policies_checked: usize, result: &RuleResult) -> Self {
        Self {
            policies_checked,
            violation_found: result.found_error(),
            diagnostics: result.diagnostics().map(Cow::into_owned).collect(),
        }
    }
}

/// Runs every policy's enabled rules into one shared result.
#[derive(Debug, Clone, Default)]
pub struct PolicyAuditor {
    config: OutputConfig,
}

impl PolicyAuditor {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Audit `policies` in order. Any fatal validation error aborts the
    /// whole audit.
    pub fn audit<'p, I>(&self, policies: I) -> Result<AuditReport, ValidationError>
    where
        I: IntoIterator<Item = &'p SecurityPolicy>,
    {
        let mut result = RuleResult::from_config(&self.config);
        let mut policies_checked = 0;

        for policy in policies {
            validate_security_rules(policy, &mut result)?;
            policies_checked += 1;
        }

        let report = AuditReport::from_result(policies_checked, &result);
        info!(
            policies = report.policies_checked,
            violation_found = report.violation_found,
            findings = report.diagnostics.len(),
            "audit complete"
        );
        result.free();
        Ok(report)
    }

    /// Render `report` in the configured `output.format`.
    pub fn render(&self, report: &AuditReport) -> Result<String, String> {
        let format = self.config.effective_format();
        let reporter =
            create_reporter(format).ok_or_else(|| format!("Unsupported report format '{format}'"))?;
        reporter.generate(report)
    }
}
