//! Observability: Prometheus text exposition and exporter self-metrics.
//!
//! `exposition` renders the canonical BIND metrics produced by one scrape;
//! `metrics` holds the exporter's own long-lived counters, which survive
//! across scrapes and are appended after the BIND families.

pub mod exposition;
pub mod metrics;

pub use metrics::ExporterMetrics;
