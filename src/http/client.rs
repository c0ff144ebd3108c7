//! reqwest-backed requester

use super::{HttpRequester, Query};
use crate::exchange::Result;
use crate::telemetry::{record_latency, LatencyMetric};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the shared HTTP requester
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request deadline
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Requester backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    client: Client,
}

impl ReqwestRequester {
    /// Create a requester with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Create a requester with custom configuration
    pub fn with_config(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpRequester for ReqwestRequester {
    async fn get(&self, url: &str, query: &Query) -> Result<Vec<u8>> {
        tracing::debug!(url = %url, params = query.len(), "Issuing GET request");

        let started = Instant::now();
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        record_latency(LatencyMetric::HttpRequest, started.elapsed());

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            body_len = body.len(),
            "Received response"
        );

        Ok(body.to_vec())
    }
}
