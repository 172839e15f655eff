//! Schema generation detection.

use bindstat_core::error::{BindStatError, Result};
use bindstat_core::Version;

use crate::fetch::{v3_uri, Fetch};

/// Gen-3 group that every Gen-3 server answers.
pub const STATUS_GROUP: &str = "status";

/// Request `<base>/xml/v3/status` once and classify the answer.
pub async fn detect(fetcher: &dyn Fetch, base_uri: &str) -> Result<Version> {
    let resp = fetcher.get(&v3_uri(base_uri, STATUS_GROUP)).await?;
    let version = classify(resp.status)?;
    tracing::debug!(status = resp.status, version = version.as_str(), "detected statistics schema");
    Ok(version)
}

/// 2xx means Gen-3; 5xx aborts; anything else (404, 3xx, ...) means Gen-2.
pub fn classify(status: u16) -> Result<Version> {
    match status {
        500.. => Err(BindStatError::Detection { status }),
        200..=299 => Ok(Version::V3),
        _ => Ok(Version::V2),
    }
}
