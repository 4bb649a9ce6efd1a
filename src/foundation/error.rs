/// Convenience result type used across poster-scene.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy.
///
/// Malformed scene content never surfaces here; the scene parser degrades to a smaller
/// element list instead. These variants cover caller contract violations, caller-owned
/// files (configuration), and font asset acquisition.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid caller-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing caller-owned data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A font asset could not be acquired for one (family, size) pair.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SceneError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
