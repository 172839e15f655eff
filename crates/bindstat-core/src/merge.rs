//! Gen-3 group merge and deduplication.
//!
//! Group documents are decoded independently and folded in fetch order.
//! Identity keys:
//! - server counters: (section, name)
//! - views: view name
//! - per-view counters: (view, section, name)
//! - task manager summary: a single key
//!
//! On collision the last value observed wins; a key keeps the position of its
//! first appearance so output order stays stable across scrapes.

use crate::model::{Counter, StatsSnapshot, Version, View};

/// Fold group snapshots into one deduplicated snapshot.
pub fn merge_groups<I>(parts: I) -> StatsSnapshot
where
    I: IntoIterator<Item = StatsSnapshot>,
{
    let mut acc = StatsSnapshot::empty(Version::V3);
    for part in parts {
        merge_into(&mut acc, part);
    }
    acc
}

fn merge_into(acc: &mut StatsSnapshot, part: StatsSnapshot) {
    upsert_all(&mut acc.incoming_queries, part.incoming_queries);
    upsert_all(&mut acc.incoming_requests, part.incoming_requests);
    upsert_all(&mut acc.nsstats, part.nsstats);

    for view in part.views {
        match acc.views.iter_mut().position(|v| v.name == view.name) {
            Some(i) => merge_view(&mut acc.views[i], view),
            None => {
                let mut fresh = View::new(view.name.clone());
                merge_view(&mut fresh, view);
                acc.views.push(fresh);
            }
        }
    }

    if part.thread_model.is_some() {
        acc.thread_model = part.thread_model;
    }
}

fn merge_view(dst: &mut View, src: View) {
    upsert_all(&mut dst.cache, src.cache);
    upsert_all(&mut dst.queries, src.queries);
    if let Some(resolver) = src.resolver {
        upsert_all(dst.resolver.get_or_insert_with(Vec::new), resolver);
    }
}

fn upsert_all(dst: &mut Vec<Counter>, src: Vec<Counter>) {
    for c in src {
        match dst.iter_mut().find(|d| d.name == c.name) {
            Some(existing) => existing.value = c.value,
            None => dst.push(c),
        }
    }
}
