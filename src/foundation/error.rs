/// Convenience result type used across the crate.
pub type BorderResult<T> = Result<T, BorderError>;

/// Top-level error taxonomy for the fallible (surface- and config-facing) APIs.
///
/// Noise sampling and path evaluation are total over their numeric domains and never produce
/// one of these.
#[derive(thiserror::Error, Debug)]
pub enum BorderError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A drawing surface could not be created, resized, or read back.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BorderError {
    /// Build a [`BorderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BorderError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BorderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
