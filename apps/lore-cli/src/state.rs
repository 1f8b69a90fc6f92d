//! Application state - the adapters every command shares.

use std::sync::Arc;

use lore_core::ports::{HttpTransport, KeyValueStore, TransportError};
use lore_infra::{FileStore, InMemoryStore, ReqwestTransport, TransportConfig};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub transport: Arc<dyn HttpTransport>,
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: AppConfig) -> Result<Self, TransportError> {
        // The submitter enforces the configured timeout; the client bound is a backstop.
        let transport = ReqwestTransport::new(TransportConfig {
            request_timeout: config.request_timeout.saturating_mul(2),
            ..TransportConfig::default()
        })?;

        let store: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using file store");
                Arc::new(FileStore::new(path.clone()))
            }
            None => {
                tracing::warn!("LORE_STORAGE_PATH is empty. Preferences will not persist.");
                Arc::new(InMemoryStore::new())
            }
        };

        Ok(Self {
            config,
            transport: Arc::new(transport),
            store,
        })
    }
}
