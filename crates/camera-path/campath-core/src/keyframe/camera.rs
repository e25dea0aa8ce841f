//! Free camera keyframe: position plus yaw/pitch/roll in degrees.

use serde::{Deserialize, Serialize};

use super::{hermite_column, KeyframePayload, KeyframeValue};
use crate::change::{look_normal, CameraPositionChange, Change};
use crate::math::{wrap_degrees, Vector3};
use crate::spline::{hermite, FivePointFamily, FourPointFamily};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraKeyframe {
    pub position: Vector3,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
}

/// Live camera state the host overrides outside of keyframes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOverrides {
    /// Roll currently forced on the live camera, if any.
    pub roll: Option<f64>,
}

impl CameraKeyframe {
    pub fn new(position: Vector3, yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            position,
            yaw,
            pitch,
            roll,
        }
    }

    /// Capture the live camera. Roll comes from the override state and is 0
    /// when nothing overrides it.
    pub fn from_live_camera(
        position: Vector3,
        yaw: f64,
        pitch: f64,
        overrides: &CameraOverrides,
    ) -> Self {
        Self::new(position, yaw, pitch, overrides.roll.unwrap_or(0.0))
    }

    /// Unit view direction.
    pub fn normal(&self) -> Vector3 {
        look_normal(self.yaw, self.pitch)
    }
}

impl KeyframePayload for CameraKeyframe {
    fn from_value(value: &KeyframeValue) -> Option<&Self> {
        match value {
            KeyframeValue::Camera(k) => Some(k),
            _ => None,
        }
    }

    fn create_change(&self) -> Change {
        Change::CameraPosition(CameraPositionChange {
            position: self.position,
            yaw: wrap_degrees(self.yaw),
            pitch: wrap_degrees(self.pitch),
            roll: wrap_degrees(self.roll),
        })
    }

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change {
        Change::CameraPosition(CameraPositionChange {
            position: family.position(points.map(|k| k.position), times, amount),
            yaw: family.degrees(points.map(|k| k.yaw), times, amount),
            pitch: family.degrees(points.map(|k| k.pitch), times, amount),
            roll: family.degrees(points.map(|k| k.roll), times, amount),
        })
    }

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change {
        Change::CameraPosition(CameraPositionChange {
            position: family.position(points.map(|k| k.position), times, amount),
            yaw: family.degrees(points.map(|k| k.yaw), times, amount),
            pitch: family.degrees(points.map(|k| k.pitch), times, amount),
            roll: family.degrees(points.map(|k| k.roll), times, amount),
        })
    }

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change {
        let positions: Vec<(f64, Vector3)> = points.iter().map(|(t, k)| (*t, k.position)).collect();
        Change::CameraPosition(CameraPositionChange {
            position: hermite::position(&positions, time),
            yaw: hermite::degrees(&hermite_column(points, |k| k.yaw), time),
            pitch: hermite::degrees(&hermite_column(points, |k| k.pitch), time),
            roll: hermite::degrees(&hermite_column(points, |k| k.roll), time),
        })
    }
}
