//! Parsed joint hierarchy and keyframe data.
//!
//! This is the data contract the external motion-capture parser hands to the
//! playback core: an owned joint tree with static offsets and channel index
//! mappings, plus one flat channel array per keyframe. The core never mutates
//! a skeleton after `validate()` accepts it.

use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;
use crate::quat::RotationOrder;

/// Per-axis indices into a frame's channel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 3]", into = "[usize; 3]")]
pub struct ChannelTriple {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl ChannelTriple {
    #[inline]
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Read the three channel values out of a frame.
    ///
    /// Indices are guaranteed in bounds by `Skeleton::validate`; an
    /// out-of-bounds index here is an upstream contract violation and panics.
    #[inline]
    pub fn read(&self, frame: &[f32]) -> [f32; 3] {
        [frame[self.x], frame[self.y], frame[self.z]]
    }
}

impl From<[usize; 3]> for ChannelTriple {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<ChannelTriple> for [usize; 3] {
    fn from(t: ChannelTriple) -> Self {
        [t.x, t.y, t.z]
    }
}

/// A node in the skeleton hierarchy.
///
/// Joints carry no back-reference to their parent; the accumulated parent
/// transform is threaded through the solve recursion instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joint {
    /// Identifier. Uniqueness within a skeleton is not guaranteed.
    pub name: String,
    /// Static translation relative to the parent, fixed for the skeleton's
    /// lifetime.
    pub offset: [f32; 3],
    /// Which channel slots hold rotation about x, y, z.
    pub rotation_channels: ChannelTriple,
    /// Which channel slots hold translation. Only the root joint carries
    /// positional animation; the solver ignores this on every other joint.
    #[serde(default)]
    pub position_channels: Option<ChannelTriple>,
    #[serde(default)]
    pub rotation_order: RotationOrder,
    /// Children in parser insertion order; traversal never reorders them.
    #[serde(default)]
    pub children: Vec<Joint>,
}

impl Joint {
    /// Number of joints in this subtree, including `self`.
    pub fn joint_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Joint::joint_count)
            .sum::<usize>()
    }
}

/// The parsed skeleton: one root joint plus the full set of keyframes.
///
/// Constructed once by the external parser at load time and immutable
/// thereafter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skeleton {
    pub root: Joint,
    /// Duration of one frame in seconds, > 0.
    pub frame_time: f32,
    /// One channel array per keyframe, all the same length.
    pub frames: Vec<Vec<f32>>,
}

impl Skeleton {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Channel values for frame `index`. Panics if out of range; the frame
    /// clock never produces an out-of-range index for a validated skeleton.
    #[inline]
    pub fn frame(&self, index: usize) -> &[f32] {
        &self.frames[index]
    }

    pub fn joint_count(&self) -> usize {
        self.root.joint_count()
    }

    /// Best-effort lookup by name: first match in preorder. Joint names are
    /// not guaranteed unique, so this is a convenience, not a structural
    /// guarantee.
    pub fn find_joint(&self, name: &str) -> Option<&Joint> {
        fn walk<'a>(joint: &'a Joint, name: &str) -> Option<&'a Joint> {
            if joint.name == name {
                return Some(joint);
            }
            joint.children.iter().find_map(|child| walk(child, name))
        }
        walk(&self.root, name)
    }

    /// Check the input contract: positive finite frame time, at least one
    /// frame, uniform frame width, and every channel index of every joint in
    /// bounds. Violations are fatal at load/bind time, never mid-traversal.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        if !(self.frame_time.is_finite() && self.frame_time > 0.0) {
            return Err(SkeletonError::NonPositiveFrameTime {
                frame_time: self.frame_time,
            });
        }
        let width = match self.frames.first() {
            Some(frame) => frame.len(),
            None => return Err(SkeletonError::NoFrames),
        };
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.len() != width {
                return Err(SkeletonError::RaggedFrame {
                    frame: i,
                    len: frame.len(),
                    expected: width,
                });
            }
        }
        validate_joint(&self.root, width)
    }
}

fn validate_joint(joint: &Joint, width: usize) -> Result<(), SkeletonError> {
    check_triple(&joint.name, "rotation", joint.rotation_channels, width)?;
    if let Some(position) = joint.position_channels {
        check_triple(&joint.name, "position", position, width)?;
    }
    for child in &joint.children {
        validate_joint(child, width)?;
    }
    Ok(())
}

fn check_triple(
    joint: &str,
    label: &str,
    triple: ChannelTriple,
    width: usize,
) -> Result<(), SkeletonError> {
    for (axis, index) in [("x", triple.x), ("y", triple.y), ("z", triple.z)] {
        if index >= width {
            return Err(SkeletonError::ChannelOutOfBounds {
                joint: joint.to_string(),
                channel: format!("{label}.{axis}"),
                index,
                width,
            });
        }
    }
    Ok(())
}
