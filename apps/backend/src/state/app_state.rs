//! Application state shared across request handlers.

use crate::state::registry::GameRegistry;

#[derive(Debug, Default)]
pub struct AppState {
    /// Per-channel game instances.
    pub registry: GameRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: GameRegistry::new(),
        }
    }
}
