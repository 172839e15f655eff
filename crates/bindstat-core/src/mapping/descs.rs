//! Canonical metric descriptors.

use crate::metric::{MetricDesc, MetricKind};

pub static UP: MetricDesc = MetricDesc {
    name: "up",
    help: "Was the Bind instance query successful?",
    kind: MetricKind::Gauge,
    labels: &[],
};

pub static INCOMING_QUERIES: MetricDesc = MetricDesc {
    name: "incoming_queries_total",
    help: "Number of incoming DNS queries.",
    kind: MetricKind::Counter,
    labels: &["type"],
};

pub static INCOMING_REQUESTS: MetricDesc = MetricDesc {
    name: "incoming_requests_total",
    help: "Number of incoming DNS requests.",
    kind: MetricKind::Counter,
    labels: &["name"],
};

pub static QUERY_ERRORS: MetricDesc = MetricDesc {
    name: "query_errors_total",
    help: "Number of query failures.",
    kind: MetricKind::Counter,
    labels: &["error"],
};

pub static RESPONSES: MetricDesc = MetricDesc {
    name: "responses_total",
    help: "Number of responses sent.",
    kind: MetricKind::Counter,
    labels: &["result"],
};

pub static RESOLVER_CACHE: MetricDesc = MetricDesc {
    name: "resolver_cache_rrsets",
    help: "Number of RRSets in Cache database.",
    kind: MetricKind::Gauge,
    labels: &["view", "type"],
};

pub static RESOLVER_QUERIES: MetricDesc = MetricDesc {
    name: "resolver_queries_total",
    help: "Number of outgoing DNS queries.",
    kind: MetricKind::Counter,
    labels: &["view", "type"],
};

pub static RESOLVER_QUERY_DURATION: MetricDesc = MetricDesc {
    name: "resolver_query_duration_seconds",
    help: "Resolver query round-trip time in seconds.",
    kind: MetricKind::Histogram,
    labels: &["view"],
};

pub static RESOLVER_QUERY_ERRORS: MetricDesc = MetricDesc {
    name: "resolver_query_errors_total",
    help: "Number of resolver queries failed.",
    kind: MetricKind::Counter,
    labels: &["view", "error"],
};

pub static RESOLVER_RESPONSE_ERRORS: MetricDesc = MetricDesc {
    name: "resolver_response_errors_total",
    help: "Number of resolver response errors received.",
    kind: MetricKind::Counter,
    labels: &["view", "error"],
};

pub static RESOLVER_DNSSEC_SUCCESS: MetricDesc = MetricDesc {
    name: "resolver_dnssec_validation_success_total",
    help: "Number of DNSSEC validation attempts succeeded.",
    kind: MetricKind::Counter,
    labels: &["view", "result"],
};

pub static RESOLVER_LAME: MetricDesc = MetricDesc {
    name: "resolver_response_lame_total",
    help: "Number of lame delegation responses received.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static RESOLVER_EDNS0_ERRORS: MetricDesc = MetricDesc {
    name: "resolver_query_edns0_errors_total",
    help: "Number of EDNS(0) query errors.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static RESOLVER_MISMATCH: MetricDesc = MetricDesc {
    name: "resolver_response_mismatch_total",
    help: "Number of mismatch responses received.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static RESOLVER_RETRIES: MetricDesc = MetricDesc {
    name: "resolver_query_retries_total",
    help: "Number of resolver query retries.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static RESOLVER_TRUNCATED: MetricDesc = MetricDesc {
    name: "resolver_response_truncated_total",
    help: "Number of truncated responses received.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static RESOLVER_DNSSEC_ERRORS: MetricDesc = MetricDesc {
    name: "resolver_dnssec_validation_errors_total",
    help: "Number of DNSSEC validation attempt errors.",
    kind: MetricKind::Counter,
    labels: &["view"],
};

pub static TASKS_RUNNING: MetricDesc = MetricDesc {
    name: "tasks_running",
    help: "Number of running tasks.",
    kind: MetricKind::Gauge,
    labels: &[],
};

pub static WORKER_THREADS: MetricDesc = MetricDesc {
    name: "worker_threads",
    help: "Total number of available worker threads.",
    kind: MetricKind::Gauge,
    labels: &[],
};
