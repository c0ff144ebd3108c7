//! Shared plumbing for exchange clients

use super::{decode, Credentials, Result};
use crate::http::{HttpRequester, Query};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Base URL, shared requester and credentials common to every exchange client
#[derive(Clone)]
pub struct ExchangeBase {
    base_url: String,
    http: Arc<dyn HttpRequester>,
    credentials: Option<Credentials>,
}

impl ExchangeBase {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpRequester>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            credentials,
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Join `path` onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path` and decode the body, checking for an error envelope first
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let body = self.http.get(&self.endpoint(path), query).await?;
        decode(body)
    }
}

impl std::fmt::Debug for ExchangeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeBase")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
