//! Text reporter: the raw diagnostic lines, newline-terminated.

use super::Reporter;
use crate::auditor::AuditReport;

/// Emits diagnostics exactly as the rule result captured them.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &AuditReport) -> Result<String, String> {
        let mut output = String::new();
        for line in &report.diagnostics {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}
