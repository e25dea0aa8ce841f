//! Field-of-view keyframe, in degrees. Blended as a plain value.

use serde::{Deserialize, Serialize};

use super::{hermite_column, KeyframePayload, KeyframeValue};
use crate::change::Change;
use crate::spline::{hermite, FivePointFamily, FourPointFamily};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FovKeyframe {
    pub fov: f64,
}

impl KeyframePayload for FovKeyframe {
    fn from_value(value: &KeyframeValue) -> Option<&Self> {
        match value {
            KeyframeValue::Fov(k) => Some(k),
            _ => None,
        }
    }

    fn create_change(&self) -> Change {
        Change::Fov { fov: self.fov }
    }

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change {
        Change::Fov {
            fov: family.value(points.map(|k| k.fov), times, amount),
        }
    }

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change {
        Change::Fov {
            fov: family.value(points.map(|k| k.fov), times, amount),
        }
    }

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change {
        Change::Fov {
            fov: hermite::value(&hermite_column(points, |k| k.fov), time),
        }
    }
}
