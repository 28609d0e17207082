use std::sync::Arc;

use crate::config::Config;
use crate::generation::tailoring::{ContentTailor, TemplateTailor};
use crate::store::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub config: Config,
    /// Pluggable content tailor. Default: TemplateTailor.
    pub tailor: Arc<dyn ContentTailor>,
}

impl AppState {
    pub fn new(storage: Storage, config: Config) -> Self {
        AppState {
            storage,
            config,
            tailor: Arc::new(TemplateTailor),
        }
    }

    /// Fresh state over an empty in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        use crate::store::memory::MemoryStore;
        use crate::store::StorageKeys;

        let config = Config::in_memory();
        let storage = Storage::new(
            Arc::new(MemoryStore::new()),
            StorageKeys::new(&config.store_namespace),
        );
        AppState::new(storage, config)
    }
}
