//! Runtime configuration from environment variables.

pub mod server;

pub use server::ServerConfig;
