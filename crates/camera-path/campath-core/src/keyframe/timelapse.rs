//! Timelapse keyframe: the replay tick a timeline tick should map to.
//!
//! A pair of timelapse keyframes defines a playback rate; a single one means
//! nothing on its own, so this payload does not implement the value contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelapseKeyframe {
    pub ticks: i64,
}

/// Playback rate that covers `ceil.ticks - lower.ticks` replay ticks in the
/// `ceil_tick - lower_tick` timeline ticks between two keyframes.
///
/// `None` unless the target ticks strictly increase.
pub fn playback_rate(
    lower_tick: i32,
    lower: &TimelapseKeyframe,
    ceil_tick: i32,
    ceil: &TimelapseKeyframe,
    base_tickrate: f64,
) -> Option<f64> {
    if ceil.ticks <= lower.ticks {
        return None;
    }
    let span = f64::from(ceil_tick) - f64::from(lower_tick);
    let target_span = (ceil.ticks - lower.ticks) as f64;
    Some(span / target_span * base_tickrate)
}
