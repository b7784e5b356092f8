//! Shared constants for the tlsaudit engine.

/// Display name substituted when a policy carries no version string.
pub const UNNAMED_POLICY: &str = "unnamed";

/// Environment variable holding per-target log directives.
pub const LOG_ENV_VAR: &str = "TLSAUDIT_LOG";

/// Log filter used when `TLSAUDIT_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "tlsaudit=info";

/// Project-level config file name, looked up in the audit root.
pub const PROJECT_CONFIG_FILE: &str = "tlsaudit.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".tlsaudit";

/// Whether results built from config capture diagnostic text by default.
pub const DEFAULT_WRITE_DIAGNOSTICS: bool = true;

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "text";

/// Report formats understood by the reporters.
pub const SUPPORTED_REPORT_FORMATS: &[&str] = &["text", "json"];
