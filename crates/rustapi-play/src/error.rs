//! Error types for Play reference rendering

use thiserror::Error;

/// Error type for Play reference page generation
#[derive(Error, Debug)]
pub enum PlayError {
    /// A configuration field received a value outside its accepted set
    #[error("invalid configuration value for `{0}`")]
    InvalidConfiguration(&'static str),

    /// The embedded viewer configuration could not be serialized to JSON
    #[error("failed to serialize viewer configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}
