use crate::config::{ConfigError, LookupError};
use thiserror::Error;

/// Top-level error type for the gba-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
