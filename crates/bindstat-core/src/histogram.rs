//! Resolver round-trip-time histogram.
//!
//! BIND reports query latency as resolver counters named `QryRTT<ms>`, with
//! the open-ended bucket spelled `QryRTT<ms>+`. The two schema generations
//! accumulate differently and the difference is exported as-is:
//!
//! - Gen-2 sums in document order and records the running total against each
//!   bucket's bound. It does not sort before accumulating, so the result
//!   depends on the order BIND declares the buckets in.
//! - Gen-3 sorts bounds first and then accumulates, so input order is
//!   irrelevant.

use crate::error::{BindStatError, Result};
use crate::metric::{Histogram, HistogramBucket};
use crate::model::{Counter, Version};

/// Name prefix of round-trip-time bucket counters.
pub const RTT_PREFIX: &str = "QryRTT";

pub fn is_rtt_bucket(name: &str) -> bool {
    name.starts_with(RTT_PREFIX)
}

/// Build the histogram for one view using the generation's accumulation rule.
pub fn build(version: Version, view: &str, counters: &[Counter]) -> Result<Histogram> {
    match version {
        Version::V2 => build_v2(view, counters),
        Version::V3 => build_v3(view, counters),
    }
}

/// Running sum in declaration order.
pub fn build_v2(view: &str, counters: &[Counter]) -> Result<Histogram> {
    let mut buckets = Vec::new();
    let mut running: u64 = 0;
    for c in counters.iter().filter(|c| is_rtt_bucket(&c.name)) {
        let bound = upper_bound(view, &c.name)?;
        running = running.saturating_add(c.value);
        upsert(&mut buckets, bound, running);
    }
    buckets.sort_by(|a, b| a.upper_bound.total_cmp(&b.upper_bound));
    Ok(Histogram { buckets, count: running })
}

/// Sort by bound, then accumulate.
pub fn build_v3(view: &str, counters: &[Counter]) -> Result<Histogram> {
    let mut buckets = Vec::new();
    for c in counters.iter().filter(|c| is_rtt_bucket(&c.name)) {
        let bound = upper_bound(view, &c.name)?;
        upsert(&mut buckets, bound, c.value);
    }
    buckets.sort_by(|a, b| a.upper_bound.total_cmp(&b.upper_bound));

    let mut running: u64 = 0;
    for b in &mut buckets {
        running = running.saturating_add(b.cumulative_count);
        b.cumulative_count = running;
    }
    Ok(Histogram { buckets, count: running })
}

/// Upper bound in seconds encoded in a bucket counter name.
fn upper_bound(view: &str, name: &str) -> Result<f64> {
    let rest = name.strip_prefix(RTT_PREFIX).unwrap_or(name);
    if rest.ends_with('+') {
        return Ok(f64::INFINITY);
    }
    match rest.parse::<f64>() {
        // Stricter than a plain float parse: "Inf" and negative bounds are rejected.
        Ok(ms) if ms.is_finite() && ms >= 0.0 => Ok(ms / 1000.0),
        _ => Err(BindStatError::HistogramParse {
            view: view.to_string(),
            bucket: rest.to_string(),
        }),
    }
}

// A repeated bound keeps the later value.
fn upsert(buckets: &mut Vec<HistogramBucket>, upper_bound: f64, count: u64) {
    match buckets.iter_mut().find(|b| b.upper_bound == upper_bound) {
        Some(b) => b.cumulative_count = count,
        None => buckets.push(HistogramBucket { upper_bound, cumulative_count: count }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn rtt(entries: &[(&str, u64)]) -> Vec<Counter> {
        entries.iter().map(|(n, v)| Counter::new(*n, *v)).collect()
    }

    fn pairs(h: &Histogram) -> Vec<(f64, u64)> {
        h.buckets.iter().map(|b| (b.upper_bound, b.cumulative_count)).collect()
    }

    #[test]
    fn v2_accumulates_in_declaration_order() {
        let c = rtt(&[("QryRTT10", 5), ("QryRTT100", 3), ("QryRTT100+", 2)]);
        let h = build_v2("_default", &c).unwrap();
        assert_eq!(pairs(&h), vec![(0.01, 5), (0.1, 8), (f64::INFINITY, 10)]);
        assert_eq!(h.count, 10);
    }

    #[test]
    fn v2_keeps_order_sensitivity() {
        let c = rtt(&[("QryRTT100", 3), ("QryRTT10", 5), ("QryRTT100+", 2)]);
        let h = build_v2("_default", &c).unwrap();
        // 100ms is declared first, so 10ms carries the larger running sum.
        assert_eq!(pairs(&h), vec![(0.01, 8), (0.1, 3), (f64::INFINITY, 10)]);
        assert_eq!(h.count, 10);
    }

    #[test]
    fn v3_is_order_independent() {
        let a = rtt(&[("QryRTT10", 5), ("QryRTT100", 3), ("QryRTT500", 4), ("QryRTT500+", 2)]);
        let b = rtt(&[("QryRTT500+", 2), ("QryRTT100", 3), ("QryRTT500", 4), ("QryRTT10", 5)]);
        let ha = build_v3("v", &a).unwrap();
        let hb = build_v3("v", &b).unwrap();
        assert_eq!(ha, hb);
        assert_eq!(
            pairs(&ha),
            vec![(0.01, 5), (0.1, 8), (0.5, 12), (f64::INFINITY, 14)]
        );
        assert_eq!(ha.count, 14);
    }

    #[test]
    fn non_rtt_counters_are_ignored() {
        let c = rtt(&[("Queryv4", 100), ("QryRTT10", 1), ("Lame", 7)]);
        let h = build(Version::V3, "v", &c).unwrap();
        assert_eq!(pairs(&h), vec![(0.01, 1)]);
        assert_eq!(h.count, 1);
    }

    #[test]
    fn no_buckets_yields_empty_histogram() {
        let h = build(Version::V2, "v", &rtt(&[("Queryv4", 1)])).unwrap();
        assert!(h.buckets.is_empty());
        assert_eq!(h.count, 0);
    }

    #[test]
    fn unparseable_bound_is_scoped_to_view() {
        let err = build_v3("internal", &rtt(&[("QryRTTabc", 1)])).unwrap_err();
        match err {
            BindStatError::HistogramParse { view, bucket } => {
                assert_eq!(view, "internal");
                assert_eq!(bucket, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(build_v2("v", &rtt(&[("QryRTTNaN", 1)])).is_err());
    }

    #[test]
    fn infinite_and_negative_bounds_are_rejected() {
        for name in ["QryRTTInf", "QryRTTinf", "QryRTT-5", "QryRTT1e400"] {
            assert!(
                matches!(
                    build_v3("v", &rtt(&[(name, 1)])),
                    Err(BindStatError::HistogramParse { .. })
                ),
                "{name}"
            );
        }
    }
}
