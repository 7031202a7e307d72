//! Error types for scene and settings construction.
//!
//! The simulation itself cannot fail; everything that could be malformed is
//! rejected here, before a `SimState` exists.

use std::fmt;

/// Errors raised while building a scene or loading settings.
#[derive(Debug)]
pub enum SceneError {
    /// Rectangle width or height is not strictly positive.
    InvalidSize { index: usize, width: f32, height: f32 },
    /// Rectangle position or velocity contains NaN or infinity.
    NonFinite { index: usize },
    /// Viewport bounds are not finite and strictly positive.
    InvalidBounds { width: f32, height: f32 },
    /// Tick interval is not finite and strictly positive.
    InvalidTickInterval(f64),
    /// Collision limit of zero would retire every rectangle immediately.
    InvalidCollisionLimit,
    /// Failed to parse JSON input.
    Parse(serde_json::Error),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidSize {
                index,
                width,
                height,
            } => write!(
                f,
                "Rectangle {} has invalid size {}x{} (both must be > 0)",
                index, width, height
            ),
            SceneError::NonFinite { index } => {
                write!(f, "Rectangle {} has a non-finite position or velocity", index)
            }
            SceneError::InvalidBounds { width, height } => {
                write!(f, "Invalid viewport bounds {}x{}", width, height)
            }
            SceneError::InvalidTickInterval(ms) => {
                write!(f, "Tick interval must be positive, got {} ms", ms)
            }
            SceneError::InvalidCollisionLimit => write!(f, "Collision limit must be at least 1"),
            SceneError::Parse(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::Parse(e)
    }
}
