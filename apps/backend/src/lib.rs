#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod routes;
pub mod state;


// Re-exports for public API
pub use config::ServerConfig;
pub use domain::{Game, GameSnapshot, Participant, Phase, Roster};
pub use error::AppError;
pub use errors::GameError;
pub use protocol::{SlackResponse, SlashCommand};
pub use state::{AppState, GameRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
