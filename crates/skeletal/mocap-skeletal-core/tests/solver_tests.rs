use approx::assert_abs_diff_eq;
use mocap_skeletal_core::quat::{axis_angle, dot, from_euler, slerp, IDENTITY};
use mocap_skeletal_core::{
    solve_pose, ChannelTriple, Joint, Pose, RotationOrder, SampleMode, Skeleton,
};
use mocap_test_fixtures::{chain_skeleton, single_frame_skeleton, two_joint_skeleton};

fn solved(skeleton: &Skeleton, curr: usize, next: usize, blend: f32, mode: SampleMode) -> Pose {
    let mut pose = Pose::default();
    solve_pose(
        skeleton,
        skeleton.frame(curr),
        skeleton.frame(next),
        blend,
        mode,
        &mut pose,
    );
    pose
}

#[test]
fn two_joint_interpolated_midway() {
    let skeleton = two_joint_skeleton();
    let pose = solved(&skeleton, 0, 1, 0.5, SampleMode::Interpolated);
    assert_eq!(pose.len(), 2);

    // Root rotation must be the slerp midpoint between rest and 90 about X.
    let expected = slerp(
        IDENTITY,
        from_euler([90.0, 0.0, 0.0], RotationOrder::Xyz),
        0.5,
    );
    let root = &pose.joints[0];
    assert_eq!(root.name, "Hips");
    assert_abs_diff_eq!(dot(root.world.rotation, expected).abs(), 1.0, epsilon = 1e-5);
    // Which is 45 degrees about X.
    let mid = axis_angle([1.0, 0.0, 0.0], 45.0);
    assert_abs_diff_eq!(dot(root.world.rotation, mid).abs(), 1.0, epsilon = 1e-5);

    // Child world position = root rotation applied to the child's offset,
    // translated by the root's world position (which is zero here).
    let child = &pose.joints[1];
    assert_eq!(child.name, "Head");
    let expected_pos = root.world.transform_point([0.0, 1.0, 0.0]);
    for i in 0..3 {
        assert_abs_diff_eq!(child.world.translation[i], expected_pos[i], epsilon = 1e-6);
    }
    let half = std::f32::consts::FRAC_1_SQRT_2;
    assert_abs_diff_eq!(child.world.translation[0], 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(child.world.translation[1], half, epsilon = 1e-5);
    assert_abs_diff_eq!(child.world.translation[2], half, epsilon = 1e-5);
}

#[test]
fn stepped_reads_only_the_current_frame() {
    let skeleton = two_joint_skeleton();
    // Large blend and a rotated next frame must not leak into the output.
    let pose = solved(&skeleton, 0, 1, 0.9, SampleMode::Stepped);
    let root = &pose.joints[0];
    assert_eq!(root.world.rotation, IDENTITY);
    assert_eq!(pose.joints[1].world.translation, [0.0, 1.0, 0.0]);
}

#[test]
fn solve_is_deterministic() {
    let skeleton = chain_skeleton(8, 10);
    let a = solved(&skeleton, 3, 4, 0.37, SampleMode::Interpolated);
    let b = solved(&skeleton, 3, 4, 0.37, SampleMode::Interpolated);
    assert_eq!(a, b);
}

#[test]
fn single_frame_blend_is_a_no_op() {
    let skeleton = single_frame_skeleton();
    let stepped = solved(&skeleton, 0, 0, 0.0, SampleMode::Stepped);
    for blend in [0.0, 0.3, 0.99] {
        let interpolated = solved(&skeleton, 0, 0, blend, SampleMode::Interpolated);
        assert_eq!(interpolated, stepped);
    }
}

#[test]
fn non_root_joints_ignore_position_channels() {
    // Child carries position channels pointing at the root's position slots;
    // only its static offset and rotation may affect its world position.
    let child = Joint {
        name: "Spine".into(),
        offset: [0.0, 1.0, 0.0],
        rotation_channels: ChannelTriple::new(6, 7, 8),
        position_channels: Some(ChannelTriple::new(0, 1, 2)),
        rotation_order: RotationOrder::Xyz,
        children: Vec::new(),
    };
    let root = Joint {
        name: "Hips".into(),
        offset: [0.0, 0.0, 0.0],
        rotation_channels: ChannelTriple::new(3, 4, 5),
        position_channels: Some(ChannelTriple::new(0, 1, 2)),
        rotation_order: RotationOrder::Xyz,
        children: vec![child],
    };
    let skeleton = Skeleton {
        root,
        frame_time: 1.0,
        frames: vec![vec![5.0, 6.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]; 2],
    };
    skeleton.validate().unwrap();

    let pose = solved(&skeleton, 0, 1, 0.5, SampleMode::Interpolated);
    assert_eq!(pose.joints[0].world.translation, [5.0, 6.0, 7.0]);
    assert_eq!(pose.joints[1].world.translation, [5.0, 7.0, 7.0]);
}

#[test]
fn pose_is_emitted_in_preorder() {
    let skeleton = chain_skeleton(3, 2);
    let pose = solved(&skeleton, 0, 1, 0.0, SampleMode::Stepped);
    let names: Vec<&str> = pose.joints.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["Hips", "Link0", "Link1", "Link2"]);
    assert_eq!(pose.len(), skeleton.joint_count());
}

#[test]
fn blend_is_clamped_before_solving() {
    let skeleton = two_joint_skeleton();
    let over = solved(&skeleton, 0, 1, 1.7, SampleMode::Interpolated);
    let exact = solved(&skeleton, 0, 1, 1.0, SampleMode::Interpolated);
    assert_eq!(over, exact);
}
