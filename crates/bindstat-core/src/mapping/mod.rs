//! Normalizer: schema-neutral snapshot -> canonical metrics.
//!
//! Counter names absent from the [`Registry`] are dropped without error.
//! A histogram that fails to build degrades only its own view; the failure is
//! returned as a warning next to the metrics.

pub mod descs;
pub mod registry;

pub use registry::{Registry, Route};

use crate::error::BindStatError;
use crate::histogram;
use crate::metric::CanonicalMetric;
use crate::model::{StatsSnapshot, View};

/// Result of mapping one snapshot.
#[derive(Debug, Default)]
pub struct Normalized {
    pub metrics: Vec<CanonicalMetric>,
    /// Non-fatal problems (histogram parse failures).
    pub warnings: Vec<BindStatError>,
}

pub fn normalize(registry: &Registry, snap: &StatsSnapshot) -> Normalized {
    let mut out = Normalized::default();
    let metrics = &mut out.metrics;

    for c in &snap.incoming_queries {
        let labels = vec![c.name.clone()];
        metrics.push(CanonicalMetric::value(&descs::INCOMING_QUERIES, labels, c.value));
    }
    for c in &snap.incoming_requests {
        let labels = vec![c.name.clone()];
        metrics.push(CanonicalMetric::value(&descs::INCOMING_REQUESTS, labels, c.value));
    }
    for c in &snap.nsstats {
        if let Some((desc, label)) = registry.server_stat(&c.name) {
            metrics.push(CanonicalMetric::value(desc, vec![label.to_string()], c.value));
        }
    }

    for view in &snap.views {
        normalize_view(registry, snap, view, &mut out);
    }

    // Always emitted; zero when no fetched document reported the task manager.
    let tm = snap.thread_model();
    out.metrics.push(CanonicalMetric::value(
        &descs::TASKS_RUNNING,
        Vec::new(),
        tm.tasks_running,
    ));
    out.metrics.push(CanonicalMetric::value(
        &descs::WORKER_THREADS,
        Vec::new(),
        tm.worker_threads,
    ));

    out
}

fn normalize_view(registry: &Registry, snap: &StatsSnapshot, view: &View, out: &mut Normalized) {
    let name = &view.name;
    for c in &view.cache {
        out.metrics.push(CanonicalMetric::value(
            &descs::RESOLVER_CACHE,
            vec![name.clone(), c.name.clone()],
            c.value,
        ));
    }
    for c in &view.queries {
        out.metrics.push(CanonicalMetric::value(
            &descs::RESOLVER_QUERIES,
            vec![name.clone(), c.name.clone()],
            c.value,
        ));
    }

    let Some(resolver) = &view.resolver else {
        return;
    };

    for c in resolver.iter().filter(|c| !histogram::is_rtt_bucket(&c.name)) {
        for route in registry.resolver_stat(&c.name) {
            let labels = match route {
                Route::Dedicated(_) => vec![name.clone()],
                Route::Labeled(_) => vec![name.clone(), c.name.clone()],
            };
            out.metrics.push(CanonicalMetric::value(route.desc(), labels, c.value));
        }
    }

    match histogram::build(snap.version, name, resolver) {
        Ok(h) => out.metrics.push(CanonicalMetric::histogram(
            &descs::RESOLVER_QUERY_DURATION,
            vec![name.clone()],
            h,
        )),
        Err(e) => {
            tracing::warn!(view = %name, error = %e, "skipping resolver RTT histogram");
            out.warnings.push(e);
        }
    }
}
