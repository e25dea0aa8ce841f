//! World time-of-day keyframe. Interpolated values truncate toward zero.

use serde::{Deserialize, Serialize};

use super::{hermite_column, KeyframePayload, KeyframeValue};
use crate::change::Change;
use crate::spline::{hermite, FivePointFamily, FourPointFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayKeyframe {
    pub time: i64,
}

#[inline]
fn change(time: f64) -> Change {
    Change::TimeOfDay {
        time: time.trunc() as i64,
    }
}

impl KeyframePayload for TimeOfDayKeyframe {
    fn from_value(value: &KeyframeValue) -> Option<&Self> {
        match value {
            KeyframeValue::TimeOfDay(k) => Some(k),
            _ => None,
        }
    }

    fn create_change(&self) -> Change {
        Change::TimeOfDay { time: self.time }
    }

    fn four_point_change(
        family: FourPointFamily,
        points: [&Self; 4],
        times: [f64; 4],
        amount: f64,
    ) -> Change {
        change(family.value(points.map(|k| k.time as f64), times, amount))
    }

    fn five_point_change(
        family: FivePointFamily,
        points: [&Self; 5],
        times: [f64; 5],
        amount: f64,
    ) -> Change {
        change(family.value(points.map(|k| k.time as f64), times, amount))
    }

    fn hermite_change(points: &[(f64, &Self)], time: f64) -> Change {
        change(hermite::value(&hermite_column(points, |k| k.time as f64), time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_interpolated_time() {
        let ks = [
            TimeOfDayKeyframe { time: 0 },
            TimeOfDayKeyframe { time: 0 },
            TimeOfDayKeyframe { time: 7 },
            TimeOfDayKeyframe { time: 7 },
        ];
        let c = TimeOfDayKeyframe::four_point_change(
            FourPointFamily::Circular,
            [&ks[0], &ks[1], &ks[2], &ks[3]],
            [0.0, 1.0, 2.0, 3.0],
            0.5,
        );
        assert_eq!(c, Change::TimeOfDay { time: 3 });
    }
}
