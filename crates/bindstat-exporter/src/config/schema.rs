use std::net::SocketAddr;
use std::time::Duration;

use bindstat_core::error::{BindStatError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ListenSection,

    #[serde(default)]
    pub bind: BindSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BindStatError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.exporter.validate()?;
        self.bind.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ListenSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ListenSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        let path = self.metrics_path.as_str();
        if !path.starts_with('/') || RESERVED_PATHS.contains(&path) {
            return Err(BindStatError::Config(format!(
                "exporter.metrics_path must start with '/' and must not be one of \
                 {RESERVED_PATHS:?}"
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            BindStatError::Config(format!("exporter.listen must be a valid SocketAddr: {e}"))
        })
    }
}

/// Routes served besides the metrics path.
const RESERVED_PATHS: [&str; 2] = ["/", "/healthz"];

fn default_listen() -> String {
    "0.0.0.0:9119".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindSection {
    /// Base URI of the statistics channel.
    #[serde(default = "default_stats_uri")]
    pub stats_uri: String,

    /// Connect+read deadline for every upstream request.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Gen-3 metric groups, fetched in this order.
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,

    /// Reuse the detected schema generation across scrapes.
    #[serde(default)]
    pub cache_version: bool,
}

impl Default for BindSection {
    fn default() -> Self {
        Self {
            stats_uri: default_stats_uri(),
            timeout_ms: default_timeout_ms(),
            groups: default_groups(),
            cache_version: false,
        }
    }
}

impl BindSection {
    pub fn validate(&self) -> Result<()> {
        let host = self
            .stats_uri
            .strip_prefix("http://")
            .or_else(|| self.stats_uri.strip_prefix("https://"));
        if host.map_or(true, |h| h.is_empty() || h.starts_with('/')) {
            return Err(BindStatError::Config(
                "bind.stats_uri must be an http:// or https:// URI with a host".into(),
            ));
        }
        if !(100..=300_000).contains(&self.timeout_ms) {
            return Err(BindStatError::Config(
                "bind.timeout_ms must be between 100 and 300000".into(),
            ));
        }
        if self.groups.is_empty() {
            return Err(BindStatError::Config("bind.groups must not be empty".into()));
        }
        if let Some(bad) = self
            .groups
            .iter()
            .find(|g| g.is_empty() || g.contains('/') || g.contains(char::is_whitespace))
        {
            return Err(BindStatError::Config(format!(
                "bind.groups entry {bad:?} is not a valid group name"
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_stats_uri() -> String {
    "http://localhost:8053/".into()
}
fn default_timeout_ms() -> u64 {
    10_000
}
fn default_groups() -> Vec<String> {
    ["mem", "server", "net", "zones"].iter().map(|s| s.to_string()).collect()
}
