//! API server state

use std::sync::Arc;

use crate::upstream::WordSource;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Word-lookup backend shared by all requests
    pub source: Arc<dyn WordSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self { source }
    }
}
