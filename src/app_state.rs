//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::VisitStore;
use crate::service::VisitService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Visit service for all counter operations.
    pub visit_service: Arc<VisitService>,
}

impl AppState {
    /// Builds the state around the given store.
    #[must_use]
    pub fn new(store: Arc<dyn VisitStore>) -> Self {
        Self {
            visit_service: Arc::new(VisitService::new(store)),
        }
    }
}
