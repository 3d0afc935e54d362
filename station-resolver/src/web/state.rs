//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::MemoryResolutionCache;
use crate::resolver::StationResolver;

/// Shared application state.
pub struct AppState<S, C, K = MemoryResolutionCache> {
    /// The resolution pipeline
    pub resolver: Arc<StationResolver<S, C, K>>,
}

impl<S, C, K> AppState<S, C, K> {
    /// Create a new app state.
    pub fn new(resolver: StationResolver<S, C, K>) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

// Manual impl: cloning the state clones the Arc, whatever S, C and K are.
impl<S, C, K> Clone for AppState<S, C, K> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}
