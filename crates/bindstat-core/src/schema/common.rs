use serde::Deserialize;

use crate::error::BindStatError;
use crate::model::{Counter, ThreadModel};

/// `<x><name>A</name><counter>5</counter></x>`, shared by both generations
/// (Gen-3 still uses it for cache RRsets).
#[derive(Debug, Deserialize)]
pub(crate) struct NamedCounterXml {
    pub name: String,
    pub counter: u64,
}

impl From<NamedCounterXml> for Counter {
    fn from(x: NamedCounterXml) -> Self {
        Counter::new(x.name, x.counter)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CacheXml {
    #[serde(default)]
    pub rrset: Vec<NamedCounterXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskmgrXml {
    #[serde(rename = "thread-model", default)]
    pub thread_model: Option<ThreadModelXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThreadModelXml {
    #[serde(rename = "worker-threads", default)]
    pub worker_threads: u64,
    #[serde(rename = "tasks-running", default)]
    pub tasks_running: u64,
}

impl From<ThreadModelXml> for ThreadModel {
    fn from(x: ThreadModelXml) -> Self {
        ThreadModel {
            tasks_running: x.tasks_running,
            worker_threads: x.worker_threads,
        }
    }
}

pub(crate) fn counters(xs: Vec<NamedCounterXml>) -> Vec<Counter> {
    xs.into_iter().map(Counter::from).collect()
}

pub(crate) fn unmarshal_error(schema: &'static str, e: quick_xml::de::DeError) -> BindStatError {
    BindStatError::Unmarshal { schema, detail: e.to_string() }
}
