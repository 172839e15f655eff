//! Per-scrape orchestration.
//!
//! One cycle walks `Detecting -> FetchingV2 | FetchingV3 -> Mapping ->
//! Emitting`. Any detection, transport or unmarshal error aborts the cycle
//! and the cycle reports `up = 0`; histogram parse errors only drop the
//! affected view's histogram. Cycles are independent and may overlap; the
//! optional version cache is the only state they share.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use bindstat_core::error::{BindStatError, Result};
use bindstat_core::mapping::descs;
use bindstat_core::merge::merge_groups;
use bindstat_core::schema::{parse_v2, parse_v3_group};
use bindstat_core::{normalize, CanonicalMetric, Normalized, Registry, StatsSnapshot, Version};

use crate::config::BindSection;
use crate::detect;
use crate::fetch::{v3_uri, Fetch, FetchResponse};
use crate::obs::ExporterMetrics;

/// Stage of a scrape cycle, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Detecting,
    FetchingV2,
    FetchingV3,
    Mapping,
    Emitting,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Detecting => "detecting",
            Phase::FetchingV2 => "fetching_v2",
            Phase::FetchingV3 => "fetching_v3",
            Phase::Mapping => "mapping",
            Phase::Emitting => "emitting",
        }
    }
}

/// Outcome of one scrape cycle.
#[derive(Debug)]
pub struct Scrape {
    /// BIND metrics followed by the `up` gauge.
    pub metrics: Vec<CanonicalMetric>,
    pub version: Option<Version>,
    /// Fatal error that aborted the cycle, if any.
    pub error: Option<(Phase, BindStatError)>,
    /// Non-fatal problems (degraded views).
    pub warnings: Vec<BindStatError>,
}

impl Scrape {
    pub fn up(&self) -> bool {
        self.error.is_none()
    }
}

struct Failure {
    phase: Phase,
    version: Option<Version>,
    error: BindStatError,
}

pub struct Collector {
    fetcher: Arc<dyn Fetch>,
    base_uri: String,
    groups: Vec<String>,
    registry: Registry,
    /// `None` when caching is disabled.
    version_cache: Option<RwLock<Option<Version>>>,
    obs: Arc<ExporterMetrics>,
}

impl Collector {
    pub fn new(fetcher: Arc<dyn Fetch>, cfg: &BindSection, obs: Arc<ExporterMetrics>) -> Self {
        obs.set_cached_version(None);
        Self {
            fetcher,
            base_uri: cfg.stats_uri.clone(),
            groups: cfg.groups.clone(),
            registry: Registry::new(),
            version_cache: cfg.cache_version.then(|| RwLock::new(None)),
            obs,
        }
    }

    /// Run one full scrape cycle. Never fails; failures surface as `up = 0`.
    pub async fn collect(&self) -> Scrape {
        let started = Instant::now();

        let mut scrape = match self.run().await {
            Ok((version, normalized)) => {
                for w in &normalized.warnings {
                    if let BindStatError::HistogramParse { view, .. } = w {
                        self.obs.record_histogram_error(view);
                    }
                }
                Scrape {
                    metrics: normalized.metrics,
                    version: Some(version),
                    error: None,
                    warnings: normalized.warnings,
                }
            }
            Err(f) => {
                tracing::error!(
                    target_uri = %self.base_uri,
                    phase = f.phase.as_str(),
                    kind = f.error.kind().as_str(),
                    error = %f.error,
                    "scrape failed"
                );
                self.obs.record_failure(f.phase, f.error.kind());
                self.forget_version();
                Scrape {
                    metrics: Vec::new(),
                    version: f.version,
                    error: Some((f.phase, f.error)),
                    warnings: Vec::new(),
                }
            }
        };

        let up = u64::from(scrape.up());
        tracing::debug!(
            phase = Phase::Emitting.as_str(),
            series = scrape.metrics.len(),
            up,
            "scrape complete"
        );
        scrape.metrics.push(CanonicalMetric::value(&descs::UP, Vec::new(), up));
        self.obs.record_scrape(scrape.version, started.elapsed());
        scrape
    }

    async fn run(&self) -> std::result::Result<(Version, Normalized), Failure> {
        let version = self.version().await.map_err(|error| Failure {
            phase: Phase::Detecting,
            version: None,
            error,
        })?;

        let (phase, fetched) = match version {
            Version::V2 => (Phase::FetchingV2, self.fetch_v2().await),
            Version::V3 => (Phase::FetchingV3, self.fetch_v3().await),
        };
        let snapshot = fetched.map_err(|error| Failure { phase, version: Some(version), error })?;

        tracing::debug!(
            phase = Phase::Mapping.as_str(),
            version = version.as_str(),
            views = snapshot.views.len(),
            "mapping snapshot"
        );
        Ok((version, normalize(&self.registry, &snapshot)))
    }

    async fn version(&self) -> Result<Version> {
        if let Some(cache) = &self.version_cache {
            let cached = *cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(v) = cached {
                tracing::debug!(version = v.as_str(), "using cached schema version");
                return Ok(v);
            }
        }

        let v = detect::detect(self.fetcher.as_ref(), &self.base_uri).await?;

        if let Some(cache) = &self.version_cache {
            *cache.write().unwrap_or_else(PoisonError::into_inner) = Some(v);
            self.obs.set_cached_version(Some(v));
        }
        Ok(v)
    }

    fn forget_version(&self) {
        if let Some(cache) = &self.version_cache {
            *cache.write().unwrap_or_else(PoisonError::into_inner) = None;
            self.obs.set_cached_version(None);
        }
    }

    async fn fetch_v2(&self) -> Result<StatsSnapshot> {
        let resp = self.fetch(&self.base_uri).await?;
        parse_v2(&resp.body)
    }

    /// Every group must succeed; the first failure aborts the remainder.
    async fn fetch_v3(&self) -> Result<StatsSnapshot> {
        let mut parts = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let resp = self.fetch(&v3_uri(&self.base_uri, group)).await?;
            parts.push(parse_v3_group(&resp.body)?);
        }
        Ok(merge_groups(parts))
    }

    async fn fetch(&self, uri: &str) -> Result<FetchResponse> {
        let resp = self.fetcher.get(uri).await?;
        if !resp.is_success() {
            tracing::warn!(
                %uri,
                status = resp.status,
                "non-success response from statistics channel"
            );
        }
        Ok(resp)
    }
}
