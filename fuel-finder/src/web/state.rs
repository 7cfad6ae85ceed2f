//! Application state for the web layer.

use std::sync::Arc;

use crate::nearby::NearbyStations;

/// Shared application state.
///
/// The query engine is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Nearest-stations query engine
    pub nearby: Arc<NearbyStations>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(nearby: NearbyStations) -> Self {
        Self {
            nearby: Arc::new(nearby),
        }
    }
}
