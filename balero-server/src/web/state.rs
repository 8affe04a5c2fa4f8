//! Application state for the web layer.

use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Handles every inbound message.
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
