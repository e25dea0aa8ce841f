//! Instantaneous values produced by keyframes and interpolation.
//!
//! A [`Change`] mirrors a keyframe payload without time or interpolation
//! metadata. Changes of the same kind blend with [`interpolate_safe`], which
//! never fails: mismatched kinds keep the first operand and non-finite fields
//! keep the finite side.

use serde::{Deserialize, Serialize};

use crate::handler::KeyframeHandler;
use crate::math::{finite_or, lerp, rot_lerp, wrap_degrees, Vector3};

/// Camera placement. Angles are in degrees, canonical range `[-180, 180)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPositionChange {
    pub position: Vector3,
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

/// Camera orbiting a center point. Yaw/pitch are unwrapped so an orbit can
/// spin several full turns between two keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOrbitChange {
    pub center: Vector3,
    pub distance: f64,
    pub yaw: f64,
    pub pitch: f64,
}

impl CameraOrbitChange {
    /// Absolute camera placement on the orbit, looking at the center.
    pub fn to_camera_position(&self) -> CameraPositionChange {
        let normal = look_normal(self.yaw, self.pitch);
        CameraPositionChange {
            position: self.center - normal * self.distance,
            yaw: wrap_degrees(self.yaw),
            pitch: wrap_degrees(self.pitch),
            roll: 0.0,
        }
    }
}

/// Camera shake parameters: oscillation frequency and amplitude per screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraShakeChange {
    pub frequency_x: f64,
    pub amplitude_x: f64,
    pub frequency_y: f64,
    pub amplitude_y: f64,
}

/// Unit view direction for a yaw/pitch pair in degrees.
///
/// Yaw 0 looks along +Z and yaw 90 along -X; positive pitch looks down (-Y).
pub fn look_normal(yaw: f64, pitch: f64) -> Vector3 {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    Vector3::new(-sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    CameraPosition,
    CameraOrbit,
    TimeOfDay,
    Fov,
    Tickrate,
    CameraShake,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    CameraPosition(CameraPositionChange),
    CameraOrbit(CameraOrbitChange),
    TimeOfDay { time: i64 },
    Fov { fov: f64 },
    Tickrate { tickrate: f64 },
    CameraShake(CameraShakeChange),
}

impl Change {
    #[inline]
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::CameraPosition(_) => ChangeKind::CameraPosition,
            Self::CameraOrbit(_) => ChangeKind::CameraOrbit,
            Self::TimeOfDay { .. } => ChangeKind::TimeOfDay,
            Self::Fov { .. } => ChangeKind::Fov,
            Self::Tickrate { .. } => ChangeKind::Tickrate,
            Self::CameraShake(_) => ChangeKind::CameraShake,
        }
    }

    /// Apply to the host. Orbit changes are resolved to a camera position first.
    ///
    /// Returns false when the handler does not support this kind of change.
    pub fn apply(&self, handler: &mut dyn KeyframeHandler) -> bool {
        if !handler.supports_change(self.kind()) {
            return false;
        }
        match self {
            Self::CameraPosition(c) => {
                handler.apply_camera_position(c.position, c.yaw, c.pitch, c.roll)
            }
            Self::CameraOrbit(orbit) => {
                let c = orbit.to_camera_position();
                handler.apply_camera_position(c.position, c.yaw, c.pitch, c.roll)
            }
            Self::TimeOfDay { time } => handler.apply_time_of_day(*time),
            Self::Fov { fov } => handler.apply_fov(*fov),
            Self::Tickrate { tickrate } => handler.apply_tickrate(*tickrate),
            Self::CameraShake(c) => handler.apply_camera_shake(
                c.frequency_x,
                c.amplitude_x,
                c.frequency_y,
                c.amplitude_y,
            ),
        }
        true
    }
}

/// Blend two changes by `amount` (0 = `a`, 1 = `b`).
///
/// Camera angles take the shortest arc and stay canonical; orbit angles blend
/// linearly. Time of day truncates toward zero.
pub fn interpolate_safe(a: &Change, b: &Change, amount: f64) -> Change {
    match (a, b) {
        (Change::CameraPosition(a), Change::CameraPosition(b)) => {
            Change::CameraPosition(CameraPositionChange {
                position: blend_vector(a.position, b.position, amount),
                yaw: blend_degrees(a.yaw, b.yaw, amount),
                pitch: blend_degrees(a.pitch, b.pitch, amount),
                roll: blend_degrees(a.roll, b.roll, amount),
            })
        }
        (Change::CameraOrbit(a), Change::CameraOrbit(b)) => {
            Change::CameraOrbit(CameraOrbitChange {
                center: blend_vector(a.center, b.center, amount),
                distance: blend_value(a.distance, b.distance, amount),
                yaw: blend_value(a.yaw, b.yaw, amount),
                pitch: blend_value(a.pitch, b.pitch, amount),
            })
        }
        (Change::TimeOfDay { time: a }, Change::TimeOfDay { time: b }) => {
            let blended = blend_value(*a as f64, *b as f64, amount);
            Change::TimeOfDay {
                time: blended.trunc() as i64,
            }
        }
        (Change::Fov { fov: a }, Change::Fov { fov: b }) => Change::Fov {
            fov: blend_value(*a, *b, amount),
        },
        (Change::Tickrate { tickrate: a }, Change::Tickrate { tickrate: b }) => Change::Tickrate {
            tickrate: blend_value(*a, *b, amount),
        },
        (Change::CameraShake(a), Change::CameraShake(b)) => {
            Change::CameraShake(CameraShakeChange {
                frequency_x: blend_value(a.frequency_x, b.frequency_x, amount),
                amplitude_x: blend_value(a.amplitude_x, b.amplitude_x, amount),
                frequency_y: blend_value(a.frequency_y, b.frequency_y, amount),
                amplitude_y: blend_value(a.amplitude_y, b.amplitude_y, amount),
            })
        }
        _ => *a,
    }
}

fn blend_value(a: f64, b: f64, t: f64) -> f64 {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => finite_or(lerp(a, b, t), a),
        (false, true) => b,
        _ => a,
    }
}

fn blend_degrees(a: f64, b: f64, t: f64) -> f64 {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => wrap_degrees(finite_or(rot_lerp(a, b, t), a)),
        (false, true) => b,
        _ => a,
    }
}

fn blend_vector(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    Vector3::new(
        blend_value(a.x, b.x, t),
        blend_value(a.y, b.y, t),
        blend_value(a.z, b.z, t),
    )
}
