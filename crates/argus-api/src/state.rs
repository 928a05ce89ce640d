//! Application state shared across all route handlers.
//!
//! AppState holds references to all services and shared resources.
//! It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use argus_chat::ChatOrchestrator;
use argus_core::config::ArgusConfig;
use argus_store::SupplierStore;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. The store
/// and orchestrator guard their own interior state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<ArgusConfig>,
    /// In-memory supplier dataset.
    pub store: Arc<SupplierStore>,
    /// Conversation state machine backing the chat endpoints.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(
        config: ArgusConfig,
        store: Arc<SupplierStore>,
        orchestrator: ChatOrchestrator,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            orchestrator: Arc::new(orchestrator),
            start_time: Instant::now(),
        }
    }
}
