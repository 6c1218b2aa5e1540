//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading token options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse configuration content.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
