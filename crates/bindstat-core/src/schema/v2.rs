//! Generation 2 schema: one document holding the full snapshot.
//!
//! ```text
//! isc > bind > statistics
//!   > server > queries-in > rdtype*, requests > opcode*, nsstat*
//!   > views > view* > name, rdtype*, resstat*, cache > rrset*
//!   > taskmgr > thread-model
//! ```
//! Sibling elements of the same name are not necessarily contiguous, which is
//! why the crate enables quick-xml's `overlapped-lists`.

use serde::Deserialize;

use super::common::{counters, unmarshal_error, CacheXml, NamedCounterXml, TaskmgrXml};
use crate::error::Result;
use crate::model::{StatsSnapshot, Version, View};

const SCHEMA: &str = "v2";

#[derive(Debug, Deserialize)]
struct IscXml {
    bind: BindXml,
}

#[derive(Debug, Deserialize)]
struct BindXml {
    statistics: StatisticsXml,
}

#[derive(Debug, Deserialize)]
struct StatisticsXml {
    #[serde(default)]
    server: ServerXml,
    #[serde(default)]
    views: ViewsXml,
    #[serde(default)]
    taskmgr: Option<TaskmgrXml>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerXml {
    #[serde(rename = "queries-in", default)]
    queries_in: QueriesInXml,
    #[serde(default)]
    requests: RequestsXml,
    #[serde(default)]
    nsstat: Vec<NamedCounterXml>,
}

#[derive(Debug, Default, Deserialize)]
struct QueriesInXml {
    #[serde(default)]
    rdtype: Vec<NamedCounterXml>,
}

#[derive(Debug, Default, Deserialize)]
struct RequestsXml {
    #[serde(default)]
    opcode: Vec<NamedCounterXml>,
}

#[derive(Debug, Default, Deserialize)]
struct ViewsXml {
    #[serde(default)]
    view: Vec<ViewXml>,
}

#[derive(Debug, Deserialize)]
struct ViewXml {
    name: String,
    #[serde(default)]
    rdtype: Vec<NamedCounterXml>,
    #[serde(default)]
    resstat: Vec<NamedCounterXml>,
    #[serde(default)]
    cache: Option<CacheXml>,
}

/// Decode a complete Gen-2 statistics document.
pub fn parse_v2(body: &[u8]) -> Result<StatsSnapshot> {
    let root: IscXml = quick_xml::de::from_reader(body).map_err(|e| unmarshal_error(SCHEMA, e))?;
    let stats = root.bind.statistics;

    let views = stats
        .views
        .view
        .into_iter()
        .map(|v| View {
            name: v.name,
            cache: counters(v.cache.unwrap_or_default().rrset),
            queries: counters(v.rdtype),
            // Gen-2 always reports resolver statistics, possibly empty.
            resolver: Some(counters(v.resstat)),
        })
        .collect();

    Ok(StatsSnapshot {
        version: Version::V2,
        incoming_queries: counters(stats.server.queries_in.rdtype),
        incoming_requests: counters(stats.server.requests.opcode),
        nsstats: counters(stats.server.nsstat),
        views,
        thread_model: stats.taskmgr.and_then(|t| t.thread_model).map(Into::into),
    })
}
