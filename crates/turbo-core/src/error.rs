//! Error types for TurboCore.

use thiserror::Error;

/// Errors that can occur in TurboCore.
#[derive(Error, Debug)]
pub enum CoreError {
    /// URL path does not match the route pattern.
    #[error("Route not matched: {path} (pattern {pattern})")]
    RouteNotMatched { pattern: String, path: String },

    /// Navigation attempted without a route pattern.
    #[error("Navigator has no route pattern")]
    NoPattern,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}
