/// Convenience result type used across the motion engine.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy.
///
/// Samplers are total and never fail; errors only surface while building or loading
/// configuration (control paths, keyframe shaping, state tables, timelines).
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid caller-provided values (too few control points, non-finite numbers, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or parsing configuration files.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
