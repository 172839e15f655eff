//! Prometheus text exposition (format 0.0.4) for canonical metrics.

use std::fmt::Write;

use bindstat_core::{CanonicalMetric, Histogram, MetricDesc, Sample};

use super::metrics::{escape_label, series};

/// Namespace prefixed to every canonical family name.
pub const NAMESPACE: &str = "bind";

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render metrics grouped by family, families in first-emission order.
pub fn render(metrics: &[CanonicalMetric], out: &mut String) {
    let mut families: Vec<(&'static MetricDesc, Vec<&CanonicalMetric>)> = Vec::new();
    for m in metrics {
        match families.iter_mut().find(|(d, _)| std::ptr::eq(*d, m.desc)) {
            Some((_, members)) => members.push(m),
            None => families.push((m.desc, vec![m])),
        }
    }

    for (desc, members) in families {
        let name = format!("{NAMESPACE}_{}", desc.name);
        let _ = writeln!(out, "# HELP {name} {}", desc.help);
        let _ = writeln!(out, "# TYPE {name} {}", desc.kind.as_str());
        for m in members {
            let labels = label_str(m);
            match &m.sample {
                Sample::Value(v) => {
                    let _ = writeln!(out, "{} {v}", series(&name, &labels));
                }
                Sample::Histogram(h) => render_histogram(&name, &labels, h, out),
            }
        }
    }
}

fn render_histogram(name: &str, labels: &str, h: &Histogram, out: &mut String) {
    let prefix = if labels.is_empty() { String::new() } else { format!("{labels},") };
    for b in &h.buckets {
        let _ = writeln!(
            out,
            "{name}_bucket{{{prefix}le=\"{}\"}} {}",
            format_bound(b.upper_bound),
            b.cumulative_count
        );
    }
    if h.buckets.last().map_or(true, |b| b.upper_bound.is_finite()) {
        let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {}", h.count);
    }
    // BIND does not report latency sums.
    let _ = writeln!(out, "{} NaN", series(&format!("{name}_sum"), labels));
    let _ = writeln!(out, "{} {}", series(&format!("{name}_count"), labels), h.count);
}

fn format_bound(b: f64) -> String {
    if b.is_infinite() {
        "+Inf".to_string()
    } else {
        b.to_string()
    }
}

fn label_str(m: &CanonicalMetric) -> String {
    m.labels()
        .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}
