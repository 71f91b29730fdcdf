//! Error types for the skeletal playback core.

use serde::{Deserialize, Serialize};

/// Errors surfaced when binding parsed skeleton data to the playback core.
///
/// All variants are load-time precondition failures; a skeleton that passed
/// validation never errors mid-traversal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkeletonError {
    /// The keyframe list is empty.
    #[error("skeleton has no keyframes")]
    NoFrames,

    /// Frame time must be positive and finite.
    #[error("frame time must be positive and finite, got {frame_time}")]
    NonPositiveFrameTime { frame_time: f32 },

    /// A frame's channel array has a different length than the first frame's.
    #[error("frame {frame} holds {len} channels, expected {expected}")]
    RaggedFrame {
        frame: usize,
        len: usize,
        expected: usize,
    },

    /// A joint references a channel slot beyond the frame width.
    #[error("joint '{joint}' references {channel} channel {index}, but frames hold {width} values")]
    ChannelOutOfBounds {
        joint: String,
        channel: String,
        index: usize,
        width: usize,
    },

    /// Stored-skeleton JSON did not deserialize.
    #[error("stored skeleton parse error: {0}")]
    Parse(String),
}
