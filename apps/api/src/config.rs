//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults suitable for local development.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Path to the SQLite database file
    pub database_path: PathBuf,

    /// Content root directory for uploaded banner images
    pub content_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default            |
    /// |-----------------|--------------------|
    /// | `HTTP_PORT`     | `8080`             |
    /// | `DATABASE_PATH` | `./gamevault.db`   |
    /// | `CONTENT_DIR`   | `./content`        |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./gamevault.db".to_string())
                .into(),

            content_dir: env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "./content".to_string())
                .into(),
        };

        Ok(config)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only touch variables this test owns.
        std::env::remove_var("HTTP_PORT");
        let config = ApiConfig::load().unwrap();
        assert_eq!(config.http_port, 8080);
    }
}
