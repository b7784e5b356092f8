//! Configuration system for tlsaudit.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod audit_config;
pub mod output_config;

pub use audit_config::{AuditConfig, CliOverrides};
pub use output_config::OutputConfig;
