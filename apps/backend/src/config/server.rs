use std::env;

use crate::error::AppError;

/// Listen address, resolved from the runtime environment.
///
/// Environment variables must be set by the deployment (compose env_file,
/// `--env-file`, or sourced manually for local dev); nothing is read from
/// disk here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `BACKEND_HOST` (default `0.0.0.0`) and `BACKEND_PORT`
    /// (default `8081`).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("BACKEND_PORT") {
            Err(_) => 8081,
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
        };

        Ok(Self { host, port })
    }
}
