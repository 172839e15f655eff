//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;

use bindstat_core::error::{BindStatError, Result};

pub use schema::{BindSection, ExporterConfig, ListenSection};

/// Environment variable naming the config file when no argument is given.
pub const CONFIG_ENV: &str = "BINDSTAT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "bindstat.yaml";

/// First CLI argument, else `$BINDSTAT_CONFIG`, else `bindstat.yaml`.
pub fn resolve_path(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BindStatError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| BindStatError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
