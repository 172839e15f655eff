//! Upstream counter name -> canonical metric registry.
//!
//! Built once at startup and shared read-only afterwards. Resolver counters
//! route either to a dedicated per-name family (labeled by view only) or to a
//! shared family where the raw counter name becomes a label value. One raw
//! name may carry several routes; the normalizer emits all of them.

use std::collections::HashMap;

use super::descs::*;
use crate::metric::MetricDesc;

/// Prefix shared by the name server query outcome counters. Stripped from
/// the label value.
pub const SERVER_STAT_PREFIX: &str = "Qry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Own family, labels `[view]`.
    Dedicated(&'static MetricDesc),
    /// Shared family, labels `[view, <discriminator>]`.
    Labeled(&'static MetricDesc),
}

impl Route {
    pub fn desc(self) -> &'static MetricDesc {
        match self {
            Route::Dedicated(d) | Route::Labeled(d) => d,
        }
    }
}

pub static SERVER_STATS: &[(&str, &MetricDesc)] = &[
    ("QryDuplicate", &QUERY_ERRORS),
    ("QryDropped", &QUERY_ERRORS),
    ("QryFailure", &QUERY_ERRORS),
    ("QrySuccess", &RESPONSES),
    ("QryReferral", &RESPONSES),
    ("QryNxrrset", &RESPONSES),
    ("QrySERVFAIL", &RESPONSES),
    ("QryFORMERR", &RESPONSES),
    ("QryNXDOMAIN", &RESPONSES),
];

pub static RESOLVER_DEDICATED: &[(&str, &MetricDesc)] = &[
    ("Lame", &RESOLVER_LAME),
    ("EDNS0Fail", &RESOLVER_EDNS0_ERRORS),
    ("Mismatch", &RESOLVER_MISMATCH),
    ("Retry", &RESOLVER_RETRIES),
    ("Truncated", &RESOLVER_TRUNCATED),
    ("ValFail", &RESOLVER_DNSSEC_ERRORS),
];

pub static RESOLVER_LABELED: &[(&str, &MetricDesc)] = &[
    ("QueryAbort", &RESOLVER_QUERY_ERRORS),
    ("QuerySockFail", &RESOLVER_QUERY_ERRORS),
    ("QueryTimeout", &RESOLVER_QUERY_ERRORS),
    ("NXDOMAIN", &RESOLVER_RESPONSE_ERRORS),
    ("SERVFAIL", &RESOLVER_RESPONSE_ERRORS),
    ("FORMERR", &RESOLVER_RESPONSE_ERRORS),
    ("OtherError", &RESOLVER_RESPONSE_ERRORS),
    ("ValOk", &RESOLVER_DNSSEC_SUCCESS),
    ("ValNegOk", &RESOLVER_DNSSEC_SUCCESS),
];

#[derive(Debug)]
pub struct Registry {
    server: HashMap<&'static str, &'static MetricDesc>,
    resolver: HashMap<&'static str, Vec<Route>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry with the built-in BIND vocabulary.
    pub fn new() -> Self {
        Self::with_tables(SERVER_STATS, RESOLVER_DEDICATED, RESOLVER_LABELED)
    }

    pub fn with_tables(
        server: &[(&'static str, &'static MetricDesc)],
        dedicated: &[(&'static str, &'static MetricDesc)],
        labeled: &[(&'static str, &'static MetricDesc)],
    ) -> Self {
        let mut resolver: HashMap<&'static str, Vec<Route>> = HashMap::new();
        for &(name, desc) in dedicated {
            resolver.entry(name).or_default().push(Route::Dedicated(desc));
        }
        for &(name, desc) in labeled {
            resolver.entry(name).or_default().push(Route::Labeled(desc));
        }
        Self {
            server: server.iter().copied().collect(),
            resolver,
        }
    }

    /// Family for a name server operational counter, with its label value.
    pub fn server_stat<'n>(&self, name: &'n str) -> Option<(&'static MetricDesc, &'n str)> {
        let desc = *self.server.get(name)?;
        Some((desc, name.strip_prefix(SERVER_STAT_PREFIX).unwrap_or(name)))
    }

    /// Routes for a resolver operation counter; empty when unknown.
    pub fn resolver_stat(&self, name: &str) -> &[Route] {
        self.resolver.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
