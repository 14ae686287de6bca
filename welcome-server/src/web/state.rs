//! Application state for the web layer.

use std::sync::Arc;

use crate::geo::GeoBackend;
use crate::welcome::WelcomeService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Welcome resolver, shared so every request sees the same cache
    pub welcome: Arc<WelcomeService<GeoBackend>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(welcome: WelcomeService<GeoBackend>) -> Self {
        Self {
            welcome: Arc::new(welcome),
        }
    }
}
