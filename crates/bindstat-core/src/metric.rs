//! Canonical metric values produced by the normalizer.

/// Exposition type of a metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// Immutable metric family descriptor. Names are namespace-free; the
/// exposition layer adds the prefix.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDesc {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    /// Label keys, in exposition order.
    pub labels: &'static [&'static str],
}

/// One histogram bucket. `upper_bound` is in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBucket {
    pub upper_bound: f64,
    pub cumulative_count: u64,
}

/// Cumulative histogram; buckets ascend by upper bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub buckets: Vec<HistogramBucket>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Value(u64),
    Histogram(Histogram),
}

/// A single labeled series.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMetric {
    pub desc: &'static MetricDesc,
    /// Label values, positionally matching `desc.labels`.
    pub label_values: Vec<String>,
    pub sample: Sample,
}

impl CanonicalMetric {
    pub fn value(desc: &'static MetricDesc, label_values: Vec<String>, v: u64) -> Self {
        Self { desc, label_values, sample: Sample::Value(v) }
    }

    pub fn histogram(desc: &'static MetricDesc, label_values: Vec<String>, h: Histogram) -> Self {
        Self { desc, label_values, sample: Sample::Histogram(h) }
    }

    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub fn kind(&self) -> MetricKind {
        self.desc.kind
    }

    /// Label pairs in descriptor order.
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.desc
            .labels
            .iter()
            .copied()
            .zip(self.label_values.iter().map(String::as_str))
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn as_value(&self) -> Option<u64> {
        match &self.sample {
            Sample::Value(v) => Some(*v),
            Sample::Histogram(_) => None,
        }
    }

    pub fn as_histogram(&self) -> Option<&Histogram> {
        match &self.sample {
            Sample::Histogram(h) => Some(h),
            Sample::Value(_) => None,
        }
    }
}
