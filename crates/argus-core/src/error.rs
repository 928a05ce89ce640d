use thiserror::Error;

/// Top-level error type for the Argus system.
///
/// Each variant wraps a subsystem-specific message. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ArgusError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArgusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ArgusError {
    fn from(err: toml::de::Error) -> Self {
        ArgusError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ArgusError {
    fn from(err: toml::ser::Error) -> Self {
        ArgusError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ArgusError {
    fn from(err: serde_json::Error) -> Self {
        ArgusError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Argus operations.
pub type Result<T> = std::result::Result<T, ArgusError>;
