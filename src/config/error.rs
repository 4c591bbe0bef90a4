use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing a persisted store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: ini::ParseError,
    },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Negative result of a typed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("key not found: {key}")]
    NotFound { key: String },

    #[error("invalid {expected} value for '{key}': {value:?}")]
    Invalid {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl LookupError {
    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound { key: key.to_string() }
    }

    /// Returns `true` if the key was absent from every layer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
