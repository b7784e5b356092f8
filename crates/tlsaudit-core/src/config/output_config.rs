//! Diagnostic output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REPORT_FORMAT, DEFAULT_WRITE_DIAGNOSTICS};

/// Configuration for how rule results capture and render diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Capture diagnostic text, or run boolean-only. Default: true.
    pub diagnostics: Option<bool>,
    /// Upper bound on diagnostic output in bytes. Default: unbounded.
    pub max_bytes: Option<usize>,
    /// Report format: "text" | "json". Default: "text".
    pub format: Option<String>,
}

impl OutputConfig {
    /// Returns whether diagnostics are captured, defaulting to true.
    pub fn effective_diagnostics(&self) -> bool {
        self.diagnostics.unwrap_or(DEFAULT_WRITE_DIAGNOSTICS)
    }

    /// Returns the report format, defaulting to "text".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }
}
