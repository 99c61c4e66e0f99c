/// Convenience result type used across touchmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by the compiler and driver APIs.
///
/// Gesture metrics never produce errors; every degenerate touch input maps to a
/// neutral value instead.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Malformed animation descriptor or parameter object.
    #[error("validation error: {0}")]
    Validation(String),

    /// A preset could not be compiled against the current target state.
    #[error("animation error: {0}")]
    Animation(String),

    /// Descriptor JSON whose shape or keywords do not match the preset.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
