//! Typed configuration structures
//!
//! Strongly-typed configuration with default values and validation.

use crate::logging::LoggingConfig;
use crate::spelling::dictionary::MAX_EDIT_DISTANCE_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Spelling correction settings
    pub spelling: SpellingConfig,
    /// Topic table replacing the built-in Canvas topics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_path: Option<PathBuf>,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Allowed CORS origins (`*` allows any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Spelling correction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellingConfig {
    /// Correct tokens before matching
    pub enabled: bool,
    /// Maximum edit distance for a correction
    pub max_edit_distance: usize,
    /// Extra word list (one word per line, optional tab-separated count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_edit_distance: 2,
            dictionary_path: None,
        }
    }
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be greater than 0".to_string());
        }
        if self.server.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        if self.server.cors_origins.is_empty() {
            return Err("server.corsOrigins must list at least one origin".to_string());
        }
        if self.spelling.max_edit_distance > MAX_EDIT_DISTANCE_LIMIT {
            return Err(format!(
                "spelling.maxEditDistance must be at most {}",
                MAX_EDIT_DISTANCE_LIMIT
            ));
        }
        Ok(())
    }

    /// Socket address string for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
