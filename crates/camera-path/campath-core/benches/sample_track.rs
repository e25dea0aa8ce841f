//! Per-frame sampling cost, one group per interpolation family.
//!
//! Run: cargo bench -p campath-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use campath_core::{
    CameraKeyframe, InterpolationType, Keyframe, KeyframeKind, KeyframeTrack, Sampler,
    SidedInterpolationType, SpeedRampMapping, Vector3,
};

const TRACK_LENS: [usize; 3] = [4, 64, 1024];
const SPACING: i32 = 20;

fn build_camera_track(len: usize, family: SidedInterpolationType) -> KeyframeTrack {
    let mut track = KeyframeTrack::new(KeyframeKind::Camera);
    for i in 0..len {
        let f = i as f64;
        let keyframe = CameraKeyframe::new(
            Vector3::new(f * 3.0, 64.0 + (f * 0.7).sin() * 5.0, f * -2.0),
            (f * 47.0) % 360.0,
            (f * 0.3).sin() * 30.0,
            0.0,
        );
        track
            .insert(
                i as i32 * SPACING,
                Keyframe::new(keyframe, InterpolationType::symmetric(family)),
            )
            .expect("camera keyframe on camera track");
    }
    track
}

fn bench_families(c: &mut Criterion) {
    let sampler = Sampler::default();
    for family in SidedInterpolationType::ALL {
        let mut group = c.benchmark_group(format!("sample_camera_{}", family.name()));
        for len in TRACK_LENS {
            let track = build_camera_track(len, family);
            let end = (len as i32 - 1) * SPACING;
            group.bench_with_input(BenchmarkId::from_parameter(len), &track, |b, track| {
                let mut tick = 0.0;
                b.iter(|| {
                    tick = (tick + 0.37) % f64::from(end.max(1));
                    black_box(sampler.sample(track, black_box(tick), None))
                });
            });
        }
        group.finish();
    }
}

fn bench_speed_ramp(c: &mut Criterion) {
    let sampler = Sampler::default();
    let track = build_camera_track(64, SidedInterpolationType::Smooth);
    let mut ramp = SpeedRampMapping::new();
    for i in 0..32 {
        ramp.set_speed(i * 40, 0.5 + f64::from(i % 4) * 0.5);
    }
    c.bench_function("sample_camera_smooth_speed_ramp", |b| {
        let mut tick = 0.0;
        b.iter(|| {
            tick = (tick + 0.37) % 1260.0;
            black_box(sampler.sample(&track, black_box(tick), Some(&ramp)))
        });
    });
}

criterion_group!(benches, bench_families, bench_speed_ramp);
criterion_main!(benches);
