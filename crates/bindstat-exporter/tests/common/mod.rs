//! In-memory scripted fetcher shared by collector and HTTP tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use bindstat_core::error::{BindStatError, Result};
use bindstat_exporter::config::BindSection;
use bindstat_exporter::fetch::{Fetch, FetchResponse};

pub const BASE: &str = "http://ns1:8053";

pub enum Reply {
    Status(u16, &'static str),
    Down,
}

/// Answers from a URI -> reply table and records every request in order.
/// Unscripted URIs answer 404 with an empty body.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: DashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, uri: &str, reply: Reply) -> Self {
        self.replies.insert(uri.to_string(), reply);
        self
    }

    pub fn set(&self, uri: &str, reply: Reply) {
        self.replies.insert(uri.to_string(), reply);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl Fetch for ScriptedFetcher {
    async fn get(&self, uri: &str) -> Result<FetchResponse> {
        self.requests.lock().unwrap().push(uri.to_string());
        match self.replies.get(uri).as_deref() {
            Some(Reply::Status(status, body)) => {
                let body: &'static str = *body;
                Ok(FetchResponse {
                    status: *status,
                    body: Bytes::from_static(body.as_bytes()),
                })
            }
            Some(Reply::Down) => Err(BindStatError::Transport(format!(
                "GET {uri}: connection refused"
            ))),
            None => Ok(FetchResponse { status: 404, body: Bytes::new() }),
        }
    }
}

pub fn bind_section(groups: &[&str], cache_version: bool) -> BindSection {
    BindSection {
        stats_uri: BASE.to_string(),
        groups: groups.iter().map(|g| g.to_string()).collect(),
        cache_version,
        ..BindSection::default()
    }
}

pub const V2_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<isc version="1.0"><bind><statistics version="2.2">
  <views><view><name>_default</name>
    <rdtype><name>A</name><counter>7</counter></rdtype>
    <resstat><name>Lame</name><counter>2</counter></resstat>
    <resstat><name>QryRTT10</name><counter>5</counter></resstat>
    <resstat><name>QryRTT100</name><counter>3</counter></resstat>
    <resstat><name>QryRTT100+</name><counter>2</counter></resstat>
    <cache name="_default"><rrset><name>A</name><counter>40</counter></rrset></cache>
  </view></views>
  <server>
    <requests><opcode><name>QUERY</name><counter>12</counter></opcode></requests>
    <queries-in><rdtype><name>A</name><counter>11</counter></rdtype></queries-in>
    <nsstat><name>QrySuccess</name><counter>10</counter></nsstat>
  </server>
  <taskmgr><thread-model><worker-threads>4</worker-threads><tasks-running>2</tasks-running></thread-model></taskmgr>
</statistics></bind></isc>
"#;

pub const V3_SERVER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<statistics version="3.6">
  <server>
    <counters type="qtype"><counter name="A">11</counter></counters>
    <counters type="nsstat"><counter name="QrySuccess">10</counter><counter name="QryFailure">1</counter></counters>
  </server>
  <views><view name="_default">
    <counters type="resstats">
      <counter name="QryRTT100+">2</counter>
      <counter name="QryRTT10">5</counter>
      <counter name="QryRTT100">3</counter>
      <counter name="ValFail">1</counter>
    </counters>
  </view></views>
</statistics>
"#;

pub const V3_TASKS: &str = r#"<statistics version="3.6">
  <server><counters type="nsstat"><counter name="QrySuccess">15</counter></counters></server>
  <taskmgr><thread-model><worker-threads>8</worker-threads><tasks-running>3</tasks-running></thread-model></taskmgr>
</statistics>
"#;

pub const V3_BAD_RTT: &str = r#"<statistics version="3.6">
  <views>
    <view name="broken"><counters type="resstats"><counter name="QryRTTfast">1</counter></counters></view>
    <view name="_default"><counters type="resstats"><counter name="QryRTT10">4</counter></counters></view>
  </views>
</statistics>
"#;

pub fn uri(path: &str) -> String {
    format!("{BASE}{path}")
}
