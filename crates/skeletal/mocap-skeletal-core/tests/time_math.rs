use approx::assert_abs_diff_eq;
use mocap_skeletal_core::FrameClock;

#[test]
fn frame_index_basic() {
    let clock = FrameClock::new(0.04, 5);
    assert_eq!(clock.frame_index(0.0), 0);
    assert_eq!(clock.frame_index(0.039), 0);
    assert_eq!(clock.frame_index(0.04), 1);
    assert_eq!(clock.frame_index(0.17), 4);
}

#[test]
fn frame_index_is_periodic() {
    let clock = FrameClock::new(0.04, 5);
    let period = 0.04 * 5.0;
    for i in 0..40 {
        let t = i as f32 * 0.013;
        assert_eq!(
            clock.frame_index(t),
            clock.frame_index(t + period),
            "t={t}"
        );
    }
}

#[test]
fn blend_fraction_stays_in_unit_interval() {
    let clock = FrameClock::new(1.0 / 30.0, 7);
    for i in 0..500 {
        let t = i as f32 * 0.0173;
        let blend = clock.blend_fraction(t);
        assert!((0.0..=1.0).contains(&blend), "t={t} blend={blend}");
    }
}

#[test]
fn blend_fraction_keeps_interpolating_after_a_loop() {
    let clock = FrameClock::new(1.0, 2);
    // Second loop, a quarter into frame 0.
    assert_abs_diff_eq!(clock.blend_fraction(2.25), 0.25, epsilon = 1e-5);
    assert_eq!(clock.frame_index(2.25), 0);
}

#[test]
fn next_frame_wraps_to_zero() {
    let clock = FrameClock::new(1.0, 3);
    assert_eq!(clock.next_frame(0), 1);
    assert_eq!(clock.next_frame(1), 2);
    assert_eq!(clock.next_frame(2), 0);
}

#[test]
fn single_frame_always_samples_frame_zero() {
    let clock = FrameClock::new(0.5, 1);
    for t in [0.0, 0.2, 0.5, 7.3, 1000.0] {
        let sample = clock.sample_at(t);
        assert_eq!(sample.current, 0);
        assert_eq!(sample.next, 0);
    }
}

#[test]
fn negative_and_non_finite_times_sample_frame_zero() {
    let clock = FrameClock::new(0.1, 4);
    for t in [-0.5, -1e9, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let sample = clock.sample_at(t);
        assert_eq!(sample.current, 0, "t={t}");
        assert_eq!(sample.next, 1, "t={t}");
        assert_eq!(sample.blend, 0.0, "t={t}");
    }
}

#[test]
fn duration_is_frame_time_times_count() {
    let clock = FrameClock::new(0.25, 8);
    assert_abs_diff_eq!(clock.duration(), 2.0, epsilon = 1e-6);
}
