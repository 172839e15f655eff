//! bindstat core: schema decoding and metric normalization for BIND statistics.
//!
//! This crate turns the raw XML statistics documents a BIND name server
//! publishes (schema generation 2 or 3) into one schema-neutral
//! [`StatsSnapshot`], and then maps that snapshot onto a stable, canonical
//! metric vocabulary. It carries no transport or runtime dependencies; the
//! exporter crate owns fetching, scheduling and exposition.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as [`BindStatError`] so a malformed upstream document can only
//! fail one scrape, never the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod histogram;
pub mod mapping;
pub mod merge;
pub mod metric;
pub mod model;
pub mod schema;

/// Shared result type.
pub use error::{BindStatError, ErrorKind, Result};
pub use mapping::{normalize, Normalized, Registry};
pub use metric::{CanonicalMetric, Histogram, HistogramBucket, MetricDesc, MetricKind, Sample};
pub use model::{Counter, StatsSnapshot, ThreadModel, Version, View};
