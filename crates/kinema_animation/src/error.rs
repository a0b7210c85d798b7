use thiserror::Error;

use kinema_core::ColorParseError;

/// Configuration errors surfaced synchronously at construction.
///
/// These are fatal only to the one animation being built; out-of-range
/// numeric inputs (negative durations, seeks past the end) are clamped
/// instead of raised.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("unknown easing name: {0:?}")]
    UnknownEasing(String),

    #[error("from/to values have different shapes (number vs color vs group)")]
    ValueShapeMismatch,

    #[error("keyframe animation needs at least two keyframes")]
    TooFewKeyframes,

    #[error(transparent)]
    ColorParse(#[from] ColorParseError),
}
