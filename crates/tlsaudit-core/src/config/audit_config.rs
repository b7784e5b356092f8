//! Top-level tlsaudit configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::OutputConfig;
use crate::constants::{PROJECT_CONFIG_FILE, SUPPORTED_REPORT_FORMATS, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TLSAUDIT_*`)
/// 3. Project config (`tlsaudit.toml` in the audit root)
/// 4. User config (`~/.tlsaudit/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub diagnostics: Option<bool>,
    pub max_bytes: Option<usize>,
    pub format: Option<String>,
}

impl AuditConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A parse error is fatal, an
        // unreadable file is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "resolved audit config");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AuditConfig) -> Result<(), ConfigError> {
        if config.output.max_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "output.max_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let format = config.output.effective_format();
        if !SUPPORTED_REPORT_FORMATS.contains(&format) {
            return Err(ConfigError::ValidationFailed {
                field: "output.format".to_string(),
                message: format!(
                    "unsupported format '{format}', expected one of: {}",
                    SUPPORTED_REPORT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AuditConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AuditConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut AuditConfig, other: &AuditConfig) {
        if other.output.diagnostics.is_some() {
            base.output.diagnostics = other.output.diagnostics;
        }
        if other.output.max_bytes.is_some() {
            base.output.max_bytes = other.output.max_bytes;
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TLSAUDIT_OUTPUT_DIAGNOSTICS`, `TLSAUDIT_OUTPUT_MAX_BYTES`, ...
    fn apply_env_overrides(config: &mut AuditConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TLSAUDIT_OUTPUT_DIAGNOSTICS") {
            let v = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "TLSAUDIT_OUTPUT_DIAGNOSTICS".to_string(),
                message: format!("expected true or false, got '{val}'"),
            })?;
            config.output.diagnostics = Some(v);
        }
        if let Ok(val) = std::env::var("TLSAUDIT_OUTPUT_MAX_BYTES") {
            let v = val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "TLSAUDIT_OUTPUT_MAX_BYTES".to_string(),
                message: format!("expected a byte count, got '{val}'"),
            })?;
            config.output.max_bytes = Some(v);
        }
        if let Ok(val) = std::env::var("TLSAUDIT_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut AuditConfig, cli: &CliOverrides) {
        if let Some(v) = cli.diagnostics {
            config.output.diagnostics = Some(v);
        }
        if let Some(v) = cli.max_bytes {
            config.output.max_bytes = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
