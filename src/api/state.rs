//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{InMemoryStore, RecordStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded rate configuration and the record store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    config: Arc<ConfigLoader>,
    /// Where attendance, adjustments and payroll records live.
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state backed by an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::new()))
    }

    /// Creates a new application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn RecordStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
