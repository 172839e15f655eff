//! bindstat exporter library entry.
//!
//! Wires fetching, version detection, the per-scrape collector and
//! Prometheus exposition around `bindstat-core`. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collector;
pub mod config;
pub mod detect;
pub mod fetch;
pub mod obs;
pub mod ops;
pub mod router;
