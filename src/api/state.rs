//! Application state for the Courier Earnings API.

use std::sync::Arc;

use crate::config::RateCardRegistry;

/// Shared application state.
///
/// Holds the validated rate card registry. It is read-only after startup, so
/// handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RateCardRegistry>,
}

impl AppState {
    /// Creates a new application state around a registry.
    pub fn new(registry: RateCardRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the rate card registry.
    pub fn registry(&self) -> &RateCardRegistry {
        &self.registry
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateCardRegistry::standard())
    }
}
