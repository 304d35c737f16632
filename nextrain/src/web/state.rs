//! Application state for the web layer.

use std::sync::Arc;

use crate::irish_rail::IrishRailClient;
use crate::transport::AnyTransport;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Irish Rail API client
    pub rail: Arc<IrishRailClient<AnyTransport>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(rail: IrishRailClient<AnyTransport>) -> Self {
        Self {
            rail: Arc::new(rail),
        }
    }
}
