//! Canonical skeleton fixtures shared by mocap-skeletal-core tests and
//! benches.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use mocap_skeletal_core::{ChannelTriple, Joint, RotationOrder, Skeleton};

/// Root + one child at offset (0, 1, 0); two frames one second apart; the
/// root rotates from rest to 90 degrees about X in frame 1.
pub static TWO_JOINT_JSON: &str = include_str!("../fixtures/two_joint.json");

static TWO_JOINT: Lazy<Skeleton> =
    Lazy::new(|| load_skeleton_json(TWO_JOINT_JSON).expect("two_joint fixture should parse"));

pub fn two_joint_skeleton() -> Skeleton {
    TWO_JOINT.clone()
}

/// Parse skeleton JSON with a fixture-friendly error context.
pub fn load_skeleton_json(json: &str) -> Result<Skeleton> {
    serde_json::from_str(json).context("failed to parse skeleton fixture JSON")
}

fn joint(name: &str, offset: [f32; 3], rotation_base: usize) -> Joint {
    Joint {
        name: name.to_string(),
        offset,
        rotation_channels: ChannelTriple::new(rotation_base, rotation_base + 1, rotation_base + 2),
        position_channels: None,
        rotation_order: RotationOrder::Xyz,
        children: Vec::new(),
    }
}

/// A root-only skeleton with a single keyframe, for loop-boundary cases.
pub fn single_frame_skeleton() -> Skeleton {
    let mut root = joint("Hips", [0.0, 0.0, 0.0], 3);
    root.position_channels = Some(ChannelTriple::new(0, 1, 2));
    Skeleton {
        root,
        frame_time: 0.5,
        frames: vec![vec![1.0, 2.0, 3.0, 30.0, 0.0, 0.0]],
    }
}

/// A straight chain of `links` joints below the root, each offset one unit
/// along Y, with `frame_count` frames of slowly varying rotations. Sized for
/// solver benches and determinism checks.
pub fn chain_skeleton(links: usize, frame_count: usize) -> Skeleton {
    let width = 6 + 3 * links;

    // Build leaf-up so every joint owns its single child.
    let mut child: Option<Joint> = None;
    for i in (0..links).rev() {
        let mut link = joint(&format!("Link{i}"), [0.0, 1.0, 0.0], 6 + 3 * i);
        if let Some(c) = child.take() {
            link.children.push(c);
        }
        child = Some(link);
    }
    let mut root = joint("Hips", [0.0, 0.0, 0.0], 3);
    root.position_channels = Some(ChannelTriple::new(0, 1, 2));
    if let Some(c) = child {
        root.children.push(c);
    }

    let frames = (0..frame_count)
        .map(|f| {
            let mut frame = vec![0.0f32; width];
            frame[1] = f as f32 * 0.01; // root drifts up
            for j in 0..links {
                frame[6 + 3 * j] = ((f * (j + 1)) % 90) as f32; // X rotation per link
            }
            frame
        })
        .collect();

    Skeleton {
        root,
        frame_time: 1.0 / 30.0,
        frames,
    }
}
