/// Shared application state
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Holds no connection; the store opens one per call.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
