use campath_core::{
    sample_track, CameraKeyframe, CameraShakeChange, CameraShakeKeyframe, Change, FovKeyframe,
    InterpolationType, Keyframe, KeyframeKind, KeyframeTrack, Sampler, SidedInterpolationType,
    TimelapseKeyframe, Vector3, TIMELAPSE_WARNING,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn fov_track(points: &[(i32, f64)], it: InterpolationType) -> KeyframeTrack {
    let mut track = KeyframeTrack::new(KeyframeKind::Fov);
    for (tick, fov) in points {
        track
            .insert(*tick, Keyframe::new(FovKeyframe { fov: *fov }, it))
            .unwrap();
    }
    track
}

fn fov_at(track: &KeyframeTrack, tick: f64) -> f64 {
    match sample_track(track, tick, None) {
        Some(Change::Fov { fov }) => fov,
        other => panic!("expected fov at tick {tick}, got {other:?}"),
    }
}

const ZIGZAG: [(i32, f64); 5] = [(0, 50.0), (10, 70.0), (20, 40.0), (30, 90.0), (40, 60.0)];

/// Families whose curves pass through their keyframes.
const INTERPOLATING: [SidedInterpolationType; 8] = [
    SidedInterpolationType::Linear,
    SidedInterpolationType::Ease,
    SidedInterpolationType::Smooth,
    SidedInterpolationType::Circular,
    SidedInterpolationType::MonotoneCubic,
    SidedInterpolationType::Quintic,
    SidedInterpolationType::Akima,
    SidedInterpolationType::Hermite,
];

#[test]
fn empty_track_produces_nothing() {
    let track = KeyframeTrack::new(KeyframeKind::Camera);
    for tick in [-10.0, 0.0, 0.5, 1e6] {
        assert_eq!(sample_track(&track, tick, None), None);
    }
}

#[test]
fn single_keyframe_is_constant() {
    for it in [InterpolationType::SMOOTH, InterpolationType::HOLD, InterpolationType::HERMITE] {
        let mut track = KeyframeTrack::new(KeyframeKind::Camera);
        let keyframe = Keyframe::new(
            CameraKeyframe::new(Vector3::new(1.0, 2.0, 3.0), 370.0, 15.0, 0.0),
            it,
        );
        let expected = keyframe.create_change();
        track.insert(50, keyframe).unwrap();
        for tick in [-100.0, 0.0, 49.5, 50.0, 50.25, 1000.0] {
            assert_eq!(sample_track(&track, tick, None), expected, "tick {tick}");
        }
    }
}

#[test]
fn before_first_and_past_last_keyframe() {
    let track = fov_track(&[(10, 70.0), (20, 80.0)], InterpolationType::LINEAR);
    assert_eq!(sample_track(&track, 9.99, None), None);
    assert_eq!(fov_at(&track, 20.0), 80.0);
    assert_eq!(sample_track(&track, 20.5, None), None);
}

#[test]
fn hold_is_a_step_without_drift() {
    let mut track = fov_track(&[(0, 10.0), (10, 20.0), (20, 35.0)], InterpolationType::SMOOTH);
    track.set_interpolation_type(10, InterpolationType::HOLD).unwrap();
    for i in 0..1000 {
        let tick = 10.0 + i as f64 * 0.00999;
        assert_eq!(fov_at(&track, tick), 20.0, "tick {tick}");
    }
    // The segment arriving at the held keyframe is still a curve.
    let before = fov_at(&track, 5.0);
    assert!(before > 10.0 && before < 20.0, "before={before}");
}

#[test]
fn hold_arriving_from_the_right_takes_the_left_family() {
    let track = {
        let mut t = fov_track(&[(0, 0.0)], InterpolationType::LINEAR);
        t.insert(
            10,
            Keyframe::new(
                FovKeyframe { fov: 100.0 },
                InterpolationType::new(
                    SidedInterpolationType::Hold,
                    SidedInterpolationType::Linear,
                ),
            ),
        )
        .unwrap();
        t
    };
    approx(fov_at(&track, 2.5), 25.0, 1e-12);
}

#[test]
fn exact_keyframe_tick_does_not_snap_a_curve() {
    let track = fov_track(
        &[(0, 0.0), (10, 10.0), (20, 40.0), (30, 50.0)],
        InterpolationType::SMOOTH,
    );
    assert_eq!(fov_at(&track, 10.0), 10.0);
    // Continuous and smooth through the keyframe.
    let left = fov_at(&track, 9.999);
    let right = fov_at(&track, 10.001);
    approx(left, 10.0, 0.01);
    approx(right, 10.0, 0.01);
    approx((10.0 - left) / 0.001, (right - 10.0) / 0.001, 0.05);
}

#[test]
fn interpolating_families_hit_lower_at_amount_zero() {
    for family in INTERPOLATING {
        let track = fov_track(&ZIGZAG, InterpolationType::symmetric(family));
        for (tick, fov) in ZIGZAG {
            assert_eq!(fov_at(&track, f64::from(tick)), fov, "{} at {tick}", family.name());
        }
    }
}

#[test]
fn interpolating_families_converge_to_ceil() {
    for family in INTERPOLATING {
        let track = fov_track(&ZIGZAG, InterpolationType::symmetric(family));
        for (tick, fov) in &ZIGZAG[1..] {
            let near = fov_at(&track, f64::from(*tick) - 1e-4);
            approx(near, *fov, 1e-2);
        }
    }
}

#[test]
fn approximating_families_stay_within_their_neighbourhood() {
    for family in [SidedInterpolationType::Nurbs, SidedInterpolationType::Smoothing] {
        let track = fov_track(&ZIGZAG, InterpolationType::symmetric(family));
        for i in 0..400 {
            let fov = fov_at(&track, i as f64 * 0.1);
            assert!((40.0..=90.0).contains(&fov), "{} gave {fov}", family.name());
        }
    }
}

#[test]
fn monotone_cubic_never_overshoots_through_the_sampler() {
    let track = fov_track(
        &[(0, 0.0), (10, 10.0), (20, 10.5), (30, 40.0)],
        InterpolationType::symmetric(SidedInterpolationType::MonotoneCubic),
    );
    for i in 0..=100 {
        let fov = fov_at(&track, 10.0 + i as f64 * 0.1);
        assert!((10.0..=10.5).contains(&fov), "fov={fov}");
    }
}

#[test]
fn sides_of_different_families_are_cross_blended() {
    let mut track = KeyframeTrack::new(KeyframeKind::Fov);
    track
        .insert(
            0,
            Keyframe::new(
                FovKeyframe { fov: 0.0 },
                InterpolationType::new(
                    SidedInterpolationType::Smooth,
                    SidedInterpolationType::Linear,
                ),
            ),
        )
        .unwrap();
    track
        .insert(10, Keyframe::new(FovKeyframe { fov: 100.0 }, InterpolationType::SMOOTH))
        .unwrap();

    // Linear side gives 25; the Catmull-Rom side over synthesized neighbours
    // gives 20.3125. Cross-blended at 0.25.
    approx(fov_at(&track, 2.5), 23.828125, 1e-9);
}

#[test]
fn camera_yaw_takes_the_short_way_around() {
    let mut track = KeyframeTrack::new(KeyframeKind::Camera);
    for (tick, yaw) in [(0, 170.0), (10, -170.0)] {
        track
            .insert(
                tick,
                Keyframe::new(
                    CameraKeyframe::new(Vector3::ZERO, yaw, 0.0, 0.0),
                    InterpolationType::LINEAR,
                ),
            )
            .unwrap();
    }
    let Some(Change::CameraPosition(mid)) = sample_track(&track, 5.0, None) else {
        panic!("expected a camera change");
    };
    approx(mid.yaw.abs(), 180.0, 1e-9);
    let Some(Change::CameraPosition(quarter)) = sample_track(&track, 2.5, None) else {
        panic!("expected a camera change");
    };
    approx(quarter.yaw, 175.0, 1e-9);
}

#[test]
fn camera_shake_parameters_follow_the_track() {
    let mut track = KeyframeTrack::new(KeyframeKind::CameraShake);
    for (tick, shake) in [
        (0, CameraShakeKeyframe::new(1.0, 0.0, 2.0, 0.0)),
        (20, CameraShakeKeyframe::new(3.0, 4.0, 2.0, 8.0)),
        (40, CameraShakeKeyframe::new(3.0, 0.0, 6.0, 0.0)),
    ] {
        track
            .insert(tick, Keyframe::new(shake, InterpolationType::LINEAR))
            .unwrap();
    }
    assert_eq!(
        sample_track(&track, 5.0, None),
        Some(Change::CameraShake(CameraShakeChange {
            frequency_x: 1.5,
            amplitude_x: 1.0,
            frequency_y: 2.0,
            amplitude_y: 2.0,
        }))
    );

    track.set_interpolation_type(0, InterpolationType::HERMITE).unwrap();
    track.set_interpolation_type(20, InterpolationType::HERMITE).unwrap();
    track.set_interpolation_type(40, InterpolationType::HERMITE).unwrap();
    let at_keyframe = track.get(20).and_then(|k| k.create_change());
    assert_eq!(sample_track(&track, 20.0, None), at_keyframe);
    let Some(Change::CameraShake(c)) = sample_track(&track, 30.0, None) else {
        panic!("expected a camera shake change");
    };
    assert!(c.amplitude_y > 0.0 && c.amplitude_y < 8.0, "amplitude_y={}", c.amplitude_y);
    assert!(c.frequency_y > 2.0 && c.frequency_y < 6.0, "frequency_y={}", c.frequency_y);
}

#[test]
fn timelapse_rate_from_keyframe_pair() {
    let mut track = KeyframeTrack::new(KeyframeKind::Timelapse);
    for (tick, ticks) in [(0, 0), (100, 200), (200, 150)] {
        track
            .insert(tick, Keyframe::new(TimelapseKeyframe { ticks }, InterpolationType::LINEAR))
            .unwrap();
    }
    assert_eq!(
        sample_track(&track, 50.0, None),
        Some(Change::Tickrate { tickrate: 10.0 })
    );

    let outcome = Sampler::default().sample_with_warning(&track, 150.0, None);
    assert_eq!(outcome.change, None);
    assert_eq!(outcome.warning.as_deref(), Some(TIMELAPSE_WARNING));
}

#[test]
fn non_finite_query_ticks_are_ignored() {
    let track = fov_track(&ZIGZAG, InterpolationType::SMOOTH);
    assert_eq!(sample_track(&track, f64::NAN, None), None);
    assert_eq!(sample_track(&track, f64::INFINITY, None), None);
}
