//! Gen-3 group decoding and merge.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use bindstat_core::merge::merge_groups;
use bindstat_core::schema::parse_v3_group;
use bindstat_core::{BindStatError, Counter, ThreadModel, Version};

fn load(name: &str) -> Vec<u8> {
    fs::read(format!("tests/fixtures/{name}")).unwrap()
}

#[test]
fn server_group_flattens_typed_counters() {
    let snap = parse_v3_group(&load("v3_server.xml")).expect("must parse");
    assert_eq!(snap.version, Version::V3);
    assert_eq!(snap.incoming_queries, vec![Counter::new("A", 128417), Counter::new("AAAA", 42)]);
    assert_eq!(snap.incoming_requests.len(), 2);
    assert_eq!(snap.nsstats.len(), 5);
    // zonestat is not part of the vocabulary
    assert!(snap.nsstats.iter().all(|c| c.name != "NotifyOutv4"));
    assert!(snap.thread_model.is_none());

    let v = snap.view("_default").unwrap();
    assert_eq!(v.queries.len(), 2);
    assert_eq!(v.cache, vec![Counter::new("A", 34324)]);
    assert_eq!(v.resolver.as_ref().unwrap().len(), 9);

    let bind = snap.view("_bind").unwrap();
    assert!(bind.queries.is_empty());
    assert_eq!(bind.resolver.as_ref().unwrap().len(), 1);
}

#[test]
fn view_without_resstats_has_no_resolver_counters() {
    let doc = br#"<statistics><views><view name="ext"><counters type="resqtype"><counter name="A">1</counter></counters></view></views></statistics>"#;
    let snap = parse_v3_group(doc).unwrap();
    assert!(snap.view("ext").unwrap().resolver.is_none());
}

#[test]
fn group_without_known_sections_is_empty() {
    let snap = parse_v3_group(&load("v3_mem.xml")).unwrap();
    assert!(snap.incoming_queries.is_empty());
    assert!(snap.views.is_empty());
    assert!(snap.thread_model.is_none());
}

#[test]
fn malformed_group_is_unmarshal_error() {
    let err = parse_v3_group(b"<html><body>404 not found").unwrap_err();
    assert!(matches!(err, BindStatError::Unmarshal { schema: "v3", .. }));
}

#[test]
fn merge_last_group_wins_on_collision() {
    let server = parse_v3_group(&load("v3_server.xml")).unwrap();
    let tasks = parse_v3_group(&load("v3_tasks.xml")).unwrap();
    let merged = merge_groups([server, tasks]);

    let success: Vec<&Counter> = merged.nsstats.iter().filter(|c| c.name == "QrySuccess").collect();
    assert_eq!(success, vec![&Counter::new("QrySuccess", 29320)]);
    // first appearance keeps its position
    assert_eq!(merged.nsstats[1].name, "QrySuccess");
    assert_eq!(merged.nsstats.len(), 5);

    assert_eq!(
        merged.thread_model,
        Some(ThreadModel { tasks_running: 3, worker_threads: 16 })
    );
    assert_eq!(merged.views.len(), 2);
}

#[test]
fn merge_deduplicates_per_view() {
    let a = br#"<statistics><views><view name="v"><counters type="resstats"><counter name="Lame">1</counter><counter name="Retry">2</counter></counters></view></views></statistics>"#;
    let b = br#"<statistics><views><view name="v"><counters type="resstats"><counter name="Lame">5</counter></counters></view><view name="w"><counters type="resstats"><counter name="Lame">9</counter></counters></view></views></statistics>"#;
    let merged = merge_groups([parse_v3_group(a).unwrap(), parse_v3_group(b).unwrap()]);

    assert_eq!(
        merged.view("v").unwrap().resolver.as_deref(),
        Some(&[Counter::new("Lame", 5), Counter::new("Retry", 2)][..])
    );
    // views stay independent
    assert_eq!(
        merged.view("w").unwrap().resolver.as_deref(),
        Some(&[Counter::new("Lame", 9)][..])
    );
}

#[test]
fn merge_deduplicates_within_one_group() {
    let doc = br#"<statistics><server><counters type="qtype"><counter name="A">1</counter></counters><counters type="qtype"><counter name="A">4</counter></counters></server></statistics>"#;
    let merged = merge_groups([parse_v3_group(doc).unwrap()]);
    assert_eq!(merged.incoming_queries, vec![Counter::new("A", 4)]);
}
