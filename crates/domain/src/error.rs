//! Common error types used across the workspace.
//!
//! Each failure kind has its own typed error, wrapped by [`SimioError`] via
//! `#[from]`. Every variant is recoverable by the caller: an operation that
//! returns an error has left the registry exactly as it found it.

/// Top-level error for every point and configuration operation.
#[derive(Debug, thiserror::Error)]
pub enum SimioError {
    /// A required request field was omitted.
    #[error("missing field")]
    MissingField(#[from] MissingField),

    /// A request field was present but carried an unusable value.
    #[error("invalid value")]
    InvalidValue(#[from] InvalidValueError),

    /// A command addressed a point that is not in the registry.
    #[error("unknown point")]
    UnknownPoint(#[from] UnknownPointError),

    /// A configuration document could not be turned into a registry.
    #[error("malformed configuration")]
    ConfigMalformed(#[from] ConfigError),

    /// The configuration store failed to read or persist a document.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request fields that must always be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissingField {
    #[error("missing point name")]
    PointName,
    #[error("missing state")]
    State,
}

/// A field whose value failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValueError {
    /// Pulse durations are whole, non-negative seconds.
    #[error("invalid pulse value {value:?}")]
    Pulse { value: String },
}

/// No point of that name exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid point name {name:?}")]
pub struct UnknownPointError {
    pub name: String,
}

/// Reasons a configuration document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON.
    #[error("configuration is not valid JSON")]
    Syntax(#[from] serde_json::Error),

    /// `.simio.points` is absent or not an array.
    #[error("cannot find points array")]
    NoPointsArray,

    /// One entry of the points array is unusable.
    #[error("point #{index} is invalid: {reason}")]
    InvalidPoint { index: usize, reason: &'static str },

    /// Two entries share a name.
    #[error("point {name:?} is declared more than once")]
    DuplicatePoint { name: String },
}

impl SimioError {
    /// Wrap any store-level failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}
