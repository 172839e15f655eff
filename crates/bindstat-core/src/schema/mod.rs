//! Upstream XML schemas.
//!
//! Each generation has its own serde model mirroring the document layout;
//! both convert into the schema-neutral [`StatsSnapshot`](crate::StatsSnapshot)
//! right after decoding so nothing downstream sees XML shapes.

mod common;
pub mod v2;
pub mod v3;

pub use v2::parse_v2;
pub use v3::parse_v3_group;
