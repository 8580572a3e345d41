//! Error types for the atomic engine.
//!
//! Resolving a token never fails: an unmatched or malformed token is simply
//! unresolved. These errors cover setup only (configuration, theme files,
//! rule table construction, file watching).

use std::path::PathBuf;

/// Result type alias for atomic engine setup.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML configuration or theme could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Custom property prefix contains characters not allowed in an identifier.
    #[error("Invalid custom property prefix '{0}'")]
    InvalidPrefix(String),

    /// A rule pattern failed to compile.
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create a pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
