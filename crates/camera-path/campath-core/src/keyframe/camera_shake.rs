//! Handheld camera shake: frequency and amplitude on each screen axis.
//!
//! All four fields blend as plain values. The host owns the noise itself;
//! the track only animates its parameters.

use serde::{Deserialize, Serialize};

use super::{hermite_column, KeyframePayload, KeyframeValue};
use crate::change::{CameraShakeChange, Change};
use crate::spline::{hermite, FivePointFamily, FourPointFamily};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraShakeKeyframe {
    #[serde(default)]
    pub frequency_x: f64,
    #[serde(default)]
    pub amplitude_x: f64,
    #[serde(default)]
    pub frequency_y: f64,
    #[serde(default)]
    pub amplitude_y: f64,
}

impl CameraShakeKeyframe {
    pub fn new(frequency_x: f64, amplitude_x: f64, frequency_y: f64, amplitude_y: f64) -> Self {
        Self {
            frequency_x,
            amplitude_x,
            frequency_y,
            amplitude_y,
        }
    }
}

impl KeyframePayload for CameraShakeKeyframe {
    fn from_value(value: &KeyframeValue) -> Option<&Self> {
        match value {
            KeyframeValue::CameraShake(k) => Some(k),
            _ => None,
        }
    }

    fn create_change(&self) -> Change {
        Change::CameraShake(CameraShakeChange {
            frequency_x: self.frequency_x,
            amplitude_x: self.amplitude_x,
            frequency_y: self.frequency_y,
            amplitude_y: self.amplitude_y,
        })
    }

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change {
        Change::CameraShake(CameraShakeChange {
            frequency_x: family.value(points.map(|k| k.frequency_x), times, amount),
            amplitude_x: family.value(points.map(|k| k.amplitude_x), times, amount),
            frequency_y: family.value(points.map(|k| k.frequency_y), times, amount),
            amplitude_y: family.value(points.map(|k| k.amplitude_y), times, amount),
        })
    }

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change {
        Change::CameraShake(CameraShakeChange {
            frequency_x: family.value(points.map(|k| k.frequency_x), times, amount),
            amplitude_x: family.value(points.map(|k| k.amplitude_x), times, amount),
            frequency_y: family.value(points.map(|k| k.frequency_y), times, amount),
            amplitude_y: family.value(points.map(|k| k.amplitude_y), times, amount),
        })
    }

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change {
        Change::CameraShake(CameraShakeChange {
            frequency_x: hermite::value(&hermite_column(points, |k| k.frequency_x), time),
            amplitude_x: hermite::value(&hermite_column(points, |k| k.amplitude_x), time),
            frequency_y: hermite::value(&hermite_column(points, |k| k.frequency_y), time),
            amplitude_y: hermite::value(&hermite_column(points, |k| k.amplitude_y), time),
        })
    }
}
