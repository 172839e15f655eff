//! Shared application state for the exporter.

use std::sync::Arc;

use bindstat_core::error::Result;

use crate::collector::Collector;
use crate::config::ExporterConfig;
use crate::fetch::{Fetch, HttpFetcher};
use crate::obs::ExporterMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    collector: Collector,
    metrics: Arc<ExporterMetrics>,
}

impl AppState {
    /// Build state with the real HTTP fetcher.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(cfg.bind.timeout())?;
        Ok(Self::with_fetcher(cfg, Arc::new(fetcher)))
    }

    /// Build state around any fetcher (tests use an in-memory one).
    pub fn with_fetcher(cfg: ExporterConfig, fetcher: Arc<dyn Fetch>) -> Self {
        let metrics = Arc::new(ExporterMetrics::default());
        let collector = Collector::new(fetcher, &cfg.bind, Arc::clone(&metrics));
        Self {
            inner: Arc::new(AppStateInner { cfg, collector, metrics }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collector(&self) -> &Collector {
        &self.inner.collector
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }
}
