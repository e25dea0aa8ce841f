//! Orbiting camera keyframe: center, distance and unwrapped yaw/pitch.
//!
//! Yaw and pitch interpolate as plain values, never as wrapped angles, so a
//! pair of keyframes at 0 and 720 degrees orbits twice.

use serde::{Deserialize, Serialize};

use super::{hermite_column, KeyframePayload, KeyframeValue};
use crate::change::{CameraOrbitChange, Change};
use crate::math::Vector3;
use crate::spline::{hermite, FivePointFamily, FourPointFamily};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOrbitKeyframe {
    pub center: Vector3,
    pub distance: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl CameraOrbitKeyframe {
    pub fn new(center: Vector3, distance: f64, yaw: f64, pitch: f64) -> Self {
        Self {
            center,
            distance,
            yaw,
            pitch,
        }
    }
}

impl KeyframePayload for CameraOrbitKeyframe {
    fn from_value(value: &KeyframeValue) -> Option<&Self> {
        match value {
            KeyframeValue::CameraOrbit(k) => Some(k),
            _ => None,
        }
    }

    fn create_change(&self) -> Change {
        Change::CameraOrbit(CameraOrbitChange {
            center: self.center,
            distance: self.distance,
            yaw: self.yaw,
            pitch: self.pitch,
        })
    }

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change {
        Change::CameraOrbit(CameraOrbitChange {
            center: family.position(points.map(|k| k.center), times, amount),
            distance: family.value(points.map(|k| k.distance), times, amount),
            yaw: family.value(points.map(|k| k.yaw), times, amount),
            pitch: family.value(points.map(|k| k.pitch), times, amount),
        })
    }

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change {
        Change::CameraOrbit(CameraOrbitChange {
            center: family.position(points.map(|k| k.center), times, amount),
            distance: family.value(points.map(|k| k.distance), times, amount),
            yaw: family.value(points.map(|k| k.yaw), times, amount),
            pitch: family.value(points.map(|k| k.pitch), times, amount),
        })
    }

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change {
        let centers: Vec<(f64, Vector3)> = points.iter().map(|(t, k)| (*t, k.center)).collect();
        Change::CameraOrbit(CameraOrbitChange {
            center: hermite::position(&centers, time),
            distance: hermite::value(&hermite_column(points, |k| k.distance), time),
            yaw: hermite::value(&hermite_column(points, |k| k.yaw), time),
            pitch: hermite::value(&hermite_column(points, |k| k.pitch), time),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_is_not_wrapped() {
        let ks = [
            CameraOrbitKeyframe::new(Vector3::ZERO, 8.0, 0.0, 0.0),
            CameraOrbitKeyframe::new(Vector3::ZERO, 8.0, 0.0, 0.0),
            CameraOrbitKeyframe::new(Vector3::ZERO, 8.0, 720.0, 0.0),
            CameraOrbitKeyframe::new(Vector3::ZERO, 8.0, 720.0, 0.0),
        ];
        let change = CameraOrbitKeyframe::four_point_change(
            FourPointFamily::Quintic,
            [&ks[0], &ks[1], &ks[2], &ks[3]],
            [0.0, 20.0, 40.0, 60.0],
            0.5,
        );
        let Change::CameraOrbit(c) = change else {
            panic!("wrong kind");
        };
        assert!((c.yaw - 360.0).abs() < 1e-9);
        assert!((c.distance - 8.0).abs() < 1e-12);
    }

    #[test]
    fn hermite_runs_through_keyframes() {
        let a = CameraOrbitKeyframe::new(Vector3::new(0.0, 0.0, 0.0), 4.0, 0.0, 10.0);
        let b = CameraOrbitKeyframe::new(Vector3::new(10.0, 0.0, 0.0), 6.0, 400.0, 20.0);
        let c = CameraOrbitKeyframe::new(Vector3::new(20.0, 0.0, 0.0), 4.0, 800.0, 10.0);
        let run = [(0.0, &a), (10.0, &b), (20.0, &c)];
        assert_eq!(CameraOrbitKeyframe::hermite_change(&run, 10.0), b.create_change());
    }
}
