//! Structured supplier search capability.
//!
//! The orchestrator depends on this trait rather than on the store directly,
//! so a remote-model-driven path invoking the same search as a callable tool
//! can satisfy it without touching the turn machinery.

use std::sync::Arc;

use async_trait::async_trait;

use argus_core::types::{StructuredQuery, SupplierProfile};
use argus_store::SupplierStore;

use crate::error::ChatError;

/// A source of supplier search results for structured queries.
#[async_trait]
pub trait SupplierSearch: Send + Sync {
    async fn search(&self, query: &StructuredQuery) -> Result<Vec<SupplierProfile>, ChatError>;
}

/// Local search backed directly by the in-memory [`SupplierStore`].
pub struct StoreSearch {
    store: Arc<SupplierStore>,
}

impl StoreSearch {
    pub fn new(store: Arc<SupplierStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SupplierSearch for StoreSearch {
    async fn search(&self, query: &StructuredQuery) -> Result<Vec<SupplierProfile>, ChatError> {
        self.store.search(query).map_err(ChatError::from)
    }
}
