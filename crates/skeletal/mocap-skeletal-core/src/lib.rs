//! mocap-skeletal-core (engine-agnostic)
//!
//! Replays parsed motion-capture data: given a joint hierarchy with static
//! offsets, per-frame channel arrays, and per-joint rotation orders, the core
//! computes a world transform for every joint at every time step. The frame
//! clock maps elapsed time to a keyframe pair and blend fraction, the pose
//! solver walks the tree with quaternion rotations (optionally slerped
//! between frames), and the playback session owns the Stopped/Playing state
//! machine. File-format parsing and rendering live in adapter crates.

pub mod clock;
pub mod error;
pub mod quat;
pub mod session;
pub mod skeleton;
pub mod solver;
pub mod stored_skeleton;
pub mod transform;

// Re-exports for consumers (adapters)
pub use clock::{FrameClock, FrameSample};
pub use error::SkeletonError;
pub use quat::{Quat, RotationOrder};
pub use session::{PlaybackSession, PlaybackState, SessionSettings};
pub use skeleton::{ChannelTriple, Joint, Skeleton};
pub use solver::{solve_pose, JointPose, Pose, SampleMode};
pub use stored_skeleton::parse_skeleton_json;
pub use transform::JointTransform;
