use std::env;

use crate::error::AppError;

/// Where the HTTP/WebSocket listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `WEREWOLF_HOST` (default `0.0.0.0`) and `WEREWOLF_PORT` (default 3000).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("WEREWOLF_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("WEREWOLF_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("WEREWOLF_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3000,
        };
        Ok(Self { host, port })
    }
}
