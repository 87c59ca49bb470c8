//! Shared application state for all routes.

use crate::config::ResolvedModel;
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Process-wide store handle, opened at start-up and shut down after the server drains.
    pub store: Arc<dyn DocumentStore>,
    pub model: Arc<ResolvedModel>,
    /// Answer malformed ids with 400 instead of 500.
    pub strict_ids: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, model: ResolvedModel) -> Self {
        AppState {
            store,
            model: Arc::new(model),
            strict_ids: false,
        }
    }

    pub fn with_strict_ids(mut self, strict_ids: bool) -> Self {
        self.strict_ids = strict_ids;
        self
    }
}
