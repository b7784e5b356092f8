//! Reporters: output formats for audit reports.

pub mod json;
pub mod text;

use tlsaudit_core::constants::SUPPORTED_REPORT_FORMATS;

use crate::auditor::AuditReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &AuditReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "text" => Some(Box::new(text::TextReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    SUPPORTED_REPORT_FORMATS
}
