//! Upstream HTTP acquisition.
//!
//! One GET per call, bounded by a single connect+read deadline, never
//! retried. The body is returned untouched; callers decide what a non-2xx
//! status means.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use bindstat_core::error::{BindStatError, Result};

/// Raw upstream response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Bytes,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, uri: &str) -> Result<FetchResponse>;
}

/// reqwest-backed fetcher. The client is shared across scrapes and pools
/// connections.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| BindStatError::Config(format!("http client build failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, uri: &str) -> Result<FetchResponse> {
        let resp = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| BindStatError::Transport(format!("GET {uri}: {e}")))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| BindStatError::Transport(format!("GET {uri}: reading body: {e}")))?;
        Ok(FetchResponse { status, body })
    }
}

/// `<base>/xml/v3/<group>` with exactly one separator after `base`.
pub fn v3_uri(base: &str, group: &str) -> String {
    if base.ends_with('/') {
        format!("{base}xml/v3/{group}")
    } else {
        format!("{base}/xml/v3/{group}")
    }
}
