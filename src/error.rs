//! Error types
//!
//! Formatting itself never fails. Errors only come from reading and checking
//! configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`FormatConfig`](crate::FormatConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The indent width is outside the accepted range
    #[error("indent width must be between 1 and 8, got {0}")]
    IndentOutOfRange(usize),
}
