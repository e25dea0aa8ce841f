//! Keyframes and the value contract the sampler drives them through.
//!
//! Each concrete payload implements [`KeyframePayload`]: an instantaneous
//! [`Change`] plus one interpolated [`Change`] per spline context. The
//! [`KeyframeValue`] enum is the closed set of payloads a track can hold and
//! dispatches to the right implementation by matching on the anchor keyframe.

pub mod camera;
pub mod camera_shake;
pub mod fov;
pub mod orbit;
pub mod time_of_day;
pub mod timelapse;

use serde::{Deserialize, Serialize};

pub use camera::{CameraKeyframe, CameraOverrides};
pub use camera_shake::CameraShakeKeyframe;
pub use fov::FovKeyframe;
pub use orbit::CameraOrbitKeyframe;
pub use time_of_day::TimeOfDayKeyframe;
pub use timelapse::TimelapseKeyframe;

use crate::change::Change;
use crate::interpolation::InterpolationType;
use crate::spline::{FivePointFamily, FourPointFamily};

/// Discriminant of a keyframe payload; also the kind of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyframeKind {
    #[serde(rename = "camera")]
    Camera,
    #[serde(rename = "camera_orbit")]
    CameraOrbit,
    #[serde(rename = "time")]
    TimeOfDay,
    #[serde(rename = "fov")]
    Fov,
    #[serde(rename = "timelapse")]
    Timelapse,
    #[serde(rename = "camera_shake")]
    CameraShake,
}

impl KeyframeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::CameraOrbit => "camera_orbit",
            Self::TimeOfDay => "time",
            Self::Fov => "fov",
            Self::Timelapse => "timelapse",
            Self::CameraShake => "camera_shake",
        }
    }
}

/// Capability set every interpolatable payload provides.
///
/// Points arrive in track order (`[before, lower, ceil, after]` and
/// `[before_before, before, lower, ceil, after]`) with their tick coordinates;
/// `amount` is the normalized position inside `lower -> ceil`. Hermite points
/// are the whole connected run, sorted by time.
pub trait KeyframePayload {
    fn from_value(value: &KeyframeValue) -> Option<&Self>;

    fn create_change(&self) -> Change;

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change;

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change;

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change;
}

/// Payload of a keyframe, tagged by `"type"` in documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum KeyframeValue {
    #[serde(rename = "camera")]
    Camera(CameraKeyframe),
    #[serde(rename = "camera_orbit")]
    CameraOrbit(CameraOrbitKeyframe),
    #[serde(rename = "time")]
    TimeOfDay(TimeOfDayKeyframe),
    #[serde(rename = "fov")]
    Fov(FovKeyframe),
    #[serde(rename = "timelapse")]
    Timelapse(TimelapseKeyframe),
    #[serde(rename = "camera_shake")]
    CameraShake(CameraShakeKeyframe),
}

impl KeyframeValue {
    #[inline]
    pub fn kind(&self) -> KeyframeKind {
        match self {
            Self::Camera(_) => KeyframeKind::Camera,
            Self::CameraOrbit(_) => KeyframeKind::CameraOrbit,
            Self::TimeOfDay(_) => KeyframeKind::TimeOfDay,
            Self::Fov(_) => KeyframeKind::Fov,
            Self::Timelapse(_) => KeyframeKind::Timelapse,
            Self::CameraShake(_) => KeyframeKind::CameraShake,
        }
    }

    /// Instantaneous change. Timelapse keyframes have none: their rate only
    /// exists between two of them.
    pub fn create_change(&self) -> Option<Change> {
        match self {
            Self::Camera(k) => Some(k.create_change()),
            Self::CameraOrbit(k) => Some(k.create_change()),
            Self::TimeOfDay(k) => Some(k.create_change()),
            Self::Fov(k) => Some(k.create_change()),
            Self::CameraShake(k) => Some(k.create_change()),
            Self::Timelapse(_) => None,
        }
    }

    /// 4-point interpolation anchored on `self` (the segment's lower keyframe).
    pub fn four_point_change(
        &self,
        family: FourPointFamily,
        points: [&KeyframeValue; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Option<Change> {
        let result = match self.kind() {
            KeyframeKind::Camera => four_point_as::<CameraKeyframe>(family, points, times, amount),
            KeyframeKind::CameraOrbit => {
                four_point_as::<CameraOrbitKeyframe>(family, points, times, amount)
            }
            KeyframeKind::TimeOfDay => {
                four_point_as::<TimeOfDayKeyframe>(family, points, times, amount)
            }
            KeyframeKind::Fov => four_point_as::<FovKeyframe>(family, points, times, amount),
            KeyframeKind::CameraShake => {
                four_point_as::<CameraShakeKeyframe>(family, points, times, amount)
            }
            KeyframeKind::Timelapse => return None,
        };
        result.or_else(|| self.mixed_kinds_fallback())
    }

    /// 5-point interpolation anchored on `self` (the segment's lower keyframe).
    pub fn five_point_change(
        &self,
        family: FivePointFamily,
        points: [&KeyframeValue; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Option<Change> {
        let result = match self.kind() {
            KeyframeKind::Camera => five_point_as::<CameraKeyframe>(family, points, times, amount),
            KeyframeKind::CameraOrbit => {
                five_point_as::<CameraOrbitKeyframe>(family, points, times, amount)
            }
            KeyframeKind::TimeOfDay => {
                five_point_as::<TimeOfDayKeyframe>(family, points, times, amount)
            }
            KeyframeKind::Fov => five_point_as::<FovKeyframe>(family, points, times, amount),
            KeyframeKind::CameraShake => {
                five_point_as::<CameraShakeKeyframe>(family, points, times, amount)
            }
            KeyframeKind::Timelapse => return None,
        };
        result.or_else(|| self.mixed_kinds_fallback())
    }

    /// Hermite interpolation over a connected run, anchored on `self`.
    pub fn hermite_change(&self, points: &[(f64, &KeyframeValue)], time: f64) -> Option<Change> {
        let result = match self.kind() {
            KeyframeKind::Camera => hermite_as::<CameraKeyframe>(points, time),
            KeyframeKind::CameraOrbit => hermite_as::<CameraOrbitKeyframe>(points, time),
            KeyframeKind::TimeOfDay => hermite_as::<TimeOfDayKeyframe>(points, time),
            KeyframeKind::Fov => hermite_as::<FovKeyframe>(points, time),
            KeyframeKind::CameraShake => hermite_as::<CameraShakeKeyframe>(points, time),
            KeyframeKind::Timelapse => return None,
        };
        result.or_else(|| self.mixed_kinds_fallback())
    }

    fn mixed_kinds_fallback(&self) -> Option<Change> {
        log::error!(
            "interpolation context mixes keyframe kinds; holding the {} anchor",
            self.kind().name()
        );
        self.create_change()
    }
}

fn uniform<'a, T: KeyframePayload, const N: usize>(
    points: [&'a KeyframeValue; N],
) -> Option<[&'a T; N]> {
    let typed: Vec<&'a T> = points
        .into_iter()
        .map(T::from_value)
        .collect::<Option<_>>()?;
    typed.try_into().ok()
}

fn four_point_as<T: KeyframePayload>(
    family: FourPointFamily,
    points: [&KeyframeValue; 4],
    times: [f64; 4],
    amount: f64,
) -> Option<Change> {
    let typed = uniform::<T, 4>(points)?;
    Some(T::four_point_change(family, typed, times, amount))
}

fn five_point_as<T: KeyframePayload>(
    family: FivePointFamily,
    points: [&KeyframeValue; 5],
    times: [f64; 5],
    amount: f64,
) -> Option<Change> {
    let typed = uniform::<T, 5>(points)?;
    Some(T::five_point_change(family, typed, times, amount))
}

fn hermite_as<T: KeyframePayload>(points: &[(f64, &KeyframeValue)], time: f64) -> Option<Change> {
    let typed: Vec<(f64, &T)> = points
        .iter()
        .map(|(t, v)| T::from_value(v).map(|k| (*t, k)))
        .collect::<Option<_>>()?;
    Some(T::hermite_change(&typed, time))
}

/// One scalar field of a Hermite run, as `(time, value)` pairs.
pub(crate) fn hermite_column<T>(
    points: &[(f64, &T)],
    field: impl Fn(&T) -> f64,
) -> Vec<(f64, f64)> {
    points.iter().map(|(t, k)| (*t, field(*k))).collect()
}

/// A value pinned at a tick, with the interpolation used on each side of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    #[serde(flatten)]
    pub value: KeyframeValue,
    #[serde(default)]
    pub interpolation_type: InterpolationType,
}

impl Keyframe {
    pub fn new(value: impl Into<KeyframeValue>, interpolation_type: InterpolationType) -> Self {
        Self {
            value: value.into(),
            interpolation_type,
        }
    }

    #[inline]
    pub fn kind(&self) -> KeyframeKind {
        self.value.kind()
    }

    #[inline]
    pub fn create_change(&self) -> Option<Change> {
        self.value.create_change()
    }
}

impl From<CameraKeyframe> for KeyframeValue {
    fn from(k: CameraKeyframe) -> Self {
        Self::Camera(k)
    }
}

impl From<CameraOrbitKeyframe> for KeyframeValue {
    fn from(k: CameraOrbitKeyframe) -> Self {
        Self::CameraOrbit(k)
    }
}

impl From<TimeOfDayKeyframe> for KeyframeValue {
    fn from(k: TimeOfDayKeyframe) -> Self {
        Self::TimeOfDay(k)
    }
}

impl From<FovKeyframe> for KeyframeValue {
    fn from(k: FovKeyframe) -> Self {
        Self::Fov(k)
    }
}

impl From<TimelapseKeyframe> for KeyframeValue {
    fn from(k: TimelapseKeyframe) -> Self {
        Self::Timelapse(k)
    }
}

impl From<CameraShakeKeyframe> for KeyframeValue {
    fn from(k: CameraShakeKeyframe) -> Self {
        Self::CameraShake(k)
    }
}
