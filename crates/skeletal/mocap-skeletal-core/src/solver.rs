//! Forward-kinematics pose solver.
//!
//! One solve pass walks the joint tree once, combining each joint's local
//! transform (static offset, root-only animated position, channel-driven
//! rotation) with the accumulated parent transform. The parent transform and
//! the two keyframe slices are threaded through the recursion explicitly, so
//! the solver holds no state and is re-entrant across skeletons.

use serde::{Deserialize, Serialize};

use crate::quat::{self, Quat};
use crate::skeleton::{Joint, Skeleton};
use crate::transform::JointTransform;

/// How channel data is sampled for one update, selected once per solve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleMode {
    /// Read only the current frame; next-frame data is never touched.
    Stepped,
    /// Slerp rotations and lerp the root position between the current and
    /// next frame by the blend fraction.
    Interpolated,
}

impl SampleMode {
    #[inline]
    pub fn is_interpolated(&self) -> bool {
        matches!(self, Self::Interpolated)
    }
}

impl Default for SampleMode {
    fn default() -> Self {
        SampleMode::Interpolated
    }
}

/// World transform of one joint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointPose {
    pub name: String,
    pub world: JointTransform,
}

/// World transforms for every joint, in preorder over the tree. The buffer
/// is cleared and refilled each solve so callers can reuse one allocation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub joints: Vec<JointPose>,
}

impl Pose {
    #[inline]
    pub fn clear(&mut self) {
        self.joints.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// First joint pose with the given name, if any. Names are not
    /// guaranteed unique.
    pub fn find(&self, name: &str) -> Option<&JointPose> {
        self.joints.iter().find(|j| j.name == name)
    }
}

/// Solve one pose for the whole skeleton into `pose`.
///
/// `curr` and `next` are the channel arrays of the two keyframes picked by
/// the frame clock; `blend` is the fraction between them. In `Stepped` mode
/// `next` and `blend` are ignored.
pub fn solve_pose(
    skeleton: &Skeleton,
    curr: &[f32],
    next: &[f32],
    blend: f32,
    mode: SampleMode,
    pose: &mut Pose,
) {
    pose.clear();
    solve_joint(
        &skeleton.root,
        true,
        &JointTransform::identity(),
        curr,
        next,
        blend.clamp(0.0, 1.0),
        mode,
        pose,
    );
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn local_rotation(joint: &Joint, curr: &[f32], next: &[f32], blend: f32, mode: SampleMode) -> Quat {
    let q1 = quat::from_euler(joint.rotation_channels.read(curr), joint.rotation_order);
    match mode {
        SampleMode::Stepped => q1,
        SampleMode::Interpolated => {
            let q2 = quat::from_euler(joint.rotation_channels.read(next), joint.rotation_order);
            quat::slerp(q1, q2, blend)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn solve_joint(
    joint: &Joint,
    is_root: bool,
    parent: &JointTransform,
    curr: &[f32],
    next: &[f32],
    blend: f32,
    mode: SampleMode,
    pose: &mut Pose,
) {
    let mut translation = joint.offset;
    // Only the root carries positional animation; position channels on any
    // other joint are ignored even if the parser populated them.
    if is_root {
        if let Some(channels) = joint.position_channels {
            let animated = match mode {
                SampleMode::Stepped => channels.read(curr),
                SampleMode::Interpolated => lerp3(channels.read(curr), channels.read(next), blend),
            };
            translation[0] += animated[0];
            translation[1] += animated[1];
            translation[2] += animated[2];
        }
    }

    let local = JointTransform {
        translation,
        rotation: local_rotation(joint, curr, next, blend, mode),
    };
    let world = parent.then(&local);
    pose.joints.push(JointPose {
        name: joint.name.clone(),
        world,
    });

    for child in &joint.children {
        solve_joint(child, false, &world, curr, next, blend, mode, pose);
    }
}
