//! Schema-neutral statistics snapshot.
//!
//! Both schema generations decode into the same tree. The snapshot keeps the
//! generation it came from because histogram construction differs between
//! them (see [`crate::histogram`]).

/// Statistics schema generation spoken by the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// Single-document XML (`/`), BIND 9.5 - 9.9.
    V2,
    /// Per-group XML (`/xml/v3/<group>`), BIND 9.10+.
    V3,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::V2 => "v2",
            Version::V3 => "v3",
        }
    }
}

/// A named upstream counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

impl Counter {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self { name: name.into(), value }
    }
}

/// One resolver view. Views never share counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub name: String,
    /// RRsets in cache, by record type.
    pub cache: Vec<Counter>,
    /// Outgoing queries, by record type.
    pub queries: Vec<Counter>,
    /// Resolver operation counters, in document order. `None` when the
    /// document carried no resolver statistics for this view.
    pub resolver: Option<Vec<Counter>>,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Task manager summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadModel {
    pub tasks_running: u64,
    pub worker_threads: u64,
}

/// Everything one scrape learned about the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub version: Version,
    /// Incoming queries, by record type.
    pub incoming_queries: Vec<Counter>,
    /// Incoming requests, by opcode.
    pub incoming_requests: Vec<Counter>,
    /// Name server operational counters.
    pub nsstats: Vec<Counter>,
    pub views: Vec<View>,
    /// `None` when the document carried no task manager section; the merge
    /// needs the distinction so a later group cannot reset it to zero.
    pub thread_model: Option<ThreadModel>,
}

impl StatsSnapshot {
    pub fn empty(version: Version) -> Self {
        Self {
            version,
            incoming_queries: Vec::new(),
            incoming_requests: Vec::new(),
            nsstats: Vec::new(),
            views: Vec::new(),
            thread_model: None,
        }
    }

    /// Task manager summary, zero when never reported.
    pub fn thread_model(&self) -> ThreadModel {
        self.thread_model.unwrap_or_default()
    }

    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name == name)
    }
}
