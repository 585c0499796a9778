//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Host must not be empty")]
    EmptyHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Max body size must be between 1 byte and 64 MiB, got {0}")]
    InvalidBodyLimit(usize),

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Yes percentage must be between 0 and 100, got {0}")]
    InvalidYesPercent(u8),

    #[error("Seed is only supported by the random strategy")]
    SeedWithoutRandomStrategy,
}
