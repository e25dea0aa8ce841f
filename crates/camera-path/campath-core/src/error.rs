//! Error types for track editing and persistence.
//!
//! Sampling never fails: degenerate numeric input falls back to an anchor value
//! and an unusable track simply yields no change. These errors only cover the
//! editor-facing operations and document loading.

use serde::{Deserialize, Serialize};

use crate::keyframe::KeyframeKind;

pub type Result<T> = std::result::Result<T, CampathError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CampathError {
    /// A keyframe of one kind was offered to a track of another kind
    #[error("Keyframe kind mismatch: track holds {expected:?}, got {actual:?}")]
    KeyframeKindMismatch {
        expected: KeyframeKind,
        actual: KeyframeKind,
    },

    /// No keyframe at the requested tick
    #[error("No keyframe at tick {tick}")]
    KeyframeNotFound { tick: i32 },

    /// Moving a keyframe onto a tick that already holds one
    #[error("Tick {tick} already holds a keyframe")]
    TickOccupied { tick: i32 },

    /// Unrecognised interpolation name in a document
    #[error("Unknown interpolation type: {name}")]
    UnknownInterpolation { name: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl CampathError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::KeyframeKindMismatch { .. } => "validation",
            Self::KeyframeNotFound { .. } | Self::TickOccupied { .. } => "editing",
            Self::UnknownInterpolation { .. } | Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for CampathError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
