//! Exchange registry
//!
//! Maps exchange names to constructors. Built once at startup and passed to
//! whatever needs to resolve clients; there is no global instance.

use super::{Credentials, ExchangeClient, ExchangeError, Result};
use crate::http::HttpRequester;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Constructor for an exchange client bound to a shared requester
pub type ExchangeFactory = Arc<
    dyn Fn(Arc<dyn HttpRequester>, Option<Credentials>) -> Arc<dyn ExchangeClient> + Send + Sync,
>;

struct Entry {
    name: String,
    factory: ExchangeFactory,
}

/// Name-keyed set of exchange constructors
///
/// Lookups ignore case. Registering a name twice replaces the earlier entry.
#[derive(Default)]
pub struct ExchangeRegistry {
    entries: BTreeMap<String, Entry>,
}

impl ExchangeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every bundled exchange
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        super::poloniex::register(&mut registry);
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// Returns `true` if an existing entry was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn(Arc<dyn HttpRequester>, Option<Credentials>) -> Arc<dyn ExchangeClient>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        let key = name.to_lowercase();
        let replaced = self
            .entries
            .insert(
                key,
                Entry {
                    name: name.clone(),
                    factory: Arc::new(factory),
                },
            )
            .is_some();

        if replaced {
            tracing::warn!(exchange = %name, "Exchange registered twice, replacing earlier factory");
        } else {
            tracing::debug!(exchange = %name, "Registered exchange");
        }

        replaced
    }

    /// Construct the client registered under `name`
    pub fn create(
        &self,
        name: &str,
        http: Arc<dyn HttpRequester>,
        credentials: Option<Credentials>,
    ) -> Result<Arc<dyn ExchangeClient>> {
        let entry = self
            .entries
            .get(&name.to_lowercase())
            .ok_or_else(|| ExchangeError::UnknownExchange(name.to_string()))?;

        Ok((entry.factory)(http, credentials))
    }

    /// Check whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Registered exchange names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.values().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ExchangeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRegistry")
            .field("exchanges", &self.names())
            .finish()
    }
}
