//! Generation 3 schema: statistics are split across per-group documents.
//!
//! ```text
//! statistics
//!   > server > counters[@type]* > counter[@name]*
//!   > views > view[@name]* > counters[@type]*, cache > rrset*
//!   > taskmgr > thread-model
//! ```
//! Each group document is decoded on its own; combining them is the job of
//! [`crate::merge`].

use serde::Deserialize;

use super::common::{counters, unmarshal_error, CacheXml, TaskmgrXml};
use crate::error::Result;
use crate::model::{Counter, StatsSnapshot, Version, View};

const SCHEMA: &str = "v3";

/// Counter group types understood by the normalizer. Others are skipped.
const QTYPE: &str = "qtype";
const OPCODE: &str = "opcode";
const NSSTAT: &str = "nsstat";
const RESQTYPE: &str = "resqtype";
const RESSTATS: &str = "resstats";

#[derive(Debug, Deserialize)]
struct StatisticsXml {
    #[serde(default)]
    server: Option<ServerXml>,
    #[serde(default)]
    views: Option<ViewsXml>,
    #[serde(default)]
    taskmgr: Option<TaskmgrXml>,
}

#[derive(Debug, Deserialize)]
struct ServerXml {
    #[serde(default)]
    counters: Vec<CountersXml>,
}

#[derive(Debug, Deserialize)]
struct CountersXml {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(default)]
    counter: Vec<CounterXml>,
}

#[derive(Debug, Deserialize)]
struct CounterXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text")]
    value: u64,
}

#[derive(Debug, Deserialize)]
struct ViewsXml {
    #[serde(default)]
    view: Vec<ViewXml>,
}

#[derive(Debug, Deserialize)]
struct ViewXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(default)]
    counters: Vec<CountersXml>,
    #[serde(default)]
    cache: Option<CacheXml>,
}

/// Flatten all groups of `kind`, keeping document order.
fn group(groups: &mut [CountersXml], kind: &str) -> Option<Vec<Counter>> {
    let mut found = false;
    let mut out = Vec::new();
    for g in groups.iter_mut().filter(|g| g.kind == kind) {
        found = true;
        out.extend(
            std::mem::take(&mut g.counter)
                .into_iter()
                .map(|c| Counter::new(c.name, c.value)),
        );
    }
    found.then_some(out)
}

/// Decode one Gen-3 group document into a partial snapshot.
pub fn parse_v3_group(body: &[u8]) -> Result<StatsSnapshot> {
    let root: StatisticsXml =
        quick_xml::de::from_reader(body).map_err(|e| unmarshal_error(SCHEMA, e))?;

    let mut snap = StatsSnapshot::empty(Version::V3);

    if let Some(mut server) = root.server {
        snap.incoming_queries = group(&mut server.counters, QTYPE).unwrap_or_default();
        snap.incoming_requests = group(&mut server.counters, OPCODE).unwrap_or_default();
        snap.nsstats = group(&mut server.counters, NSSTAT).unwrap_or_default();
    }

    if let Some(views) = root.views {
        snap.views = views
            .view
            .into_iter()
            .map(|mut v| View {
                queries: group(&mut v.counters, RESQTYPE).unwrap_or_default(),
                resolver: group(&mut v.counters, RESSTATS),
                cache: v.cache.map(|c| counters(c.rrset)).unwrap_or_default(),
                name: v.name,
            })
            .collect();
    }

    snap.thread_model = root.taskmgr.and_then(|t| t.thread_model).map(Into::into);
    Ok(snap)
}
