//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::ChartService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chart service driving all chart endpoints
    pub charts: Arc<ChartService>,
}

impl AppState {
    /// Create a new application state over the given chart service.
    pub fn new(charts: Arc<ChartService>) -> Self {
        Self { charts }
    }
}
