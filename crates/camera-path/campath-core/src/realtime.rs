//! Tick to real-time remapping for speed ramps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maps a tick to a position on the real (wall-clock) time axis.
///
/// Implementations should be monotonic; the sampler treats a non-increasing
/// span like a degenerate segment.
pub trait RealTimeMapping {
    fn real_time(&self, tick: f64) -> f64;
}

impl<F> RealTimeMapping for F
where
    F: Fn(f64) -> f64,
{
    fn real_time(&self, tick: f64) -> f64 {
        self(tick)
    }
}

/// Speeds at or below this are clamped.
const MIN_SPEED: f64 = 1e-3;

/// Piecewise-constant playback speed, starting at each point's tick.
///
/// Real time is the integral of `1 / speed` from tick 0. Speed is 1 before the
/// first point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedRampMapping {
    speeds: BTreeMap<i32, f64>,
}

impl SpeedRampMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, tick: i32, speed: f64) -> Self {
        self.set_speed(tick, speed);
        self
    }

    pub fn set_speed(&mut self, tick: i32, speed: f64) {
        self.speeds.insert(tick, speed);
    }

    pub fn remove_speed(&mut self, tick: i32) -> Option<f64> {
        self.speeds.remove(&tick)
    }

    /// Effective speed at `tick`.
    pub fn speed_at(&self, tick: f64) -> f64 {
        let key = tick.floor() as i32;
        let raw = self
            .speeds
            .range(..=key)
            .next_back()
            .map_or(1.0, |(_, s)| *s);
        if raw.is_finite() && raw > MIN_SPEED {
            raw
        } else {
            MIN_SPEED
        }
    }

    /// Real time elapsed between `from` and `to` (`from <= to`).
    fn integrate(&self, from: f64, to: f64) -> f64 {
        let mut total = 0.0;
        let mut cursor = from;
        let mut speed = self.speed_at(from);
        for (tick, _) in self.speeds.iter() {
            let t = f64::from(*tick);
            if t <= from {
                continue;
            }
            if t >= to {
                break;
            }
            total += (t - cursor) / speed;
            cursor = t;
            speed = self.speed_at(t);
        }
        total + (to - cursor) / speed
    }
}

impl RealTimeMapping for SpeedRampMapping {
    fn real_time(&self, tick: f64) -> f64 {
        if tick >= 0.0 {
            self.integrate(0.0, tick)
        } else {
            -self.integrate(tick, 0.0)
        }
    }
}
