//! Track sampling: from a query tick to one [`Change`].
//!
//! Model:
//! - `lower` is the last keyframe at or before the query tick, `ceil` the next one.
//! - `lower.right` picks the family for the left side of the segment and
//!   `ceil.left` the family for the right side (HOLD arriving from the right
//!   degrades to the left side's family).
//! - Each side is evaluated in its own family and the two results are
//!   cross-blended by the segment amount.
//! - Spline knots and the amount handed to spline families live on the tick
//!   axis. With a [`RealTimeMapping`], the pairwise blends and the cross-blend
//!   follow mapped real time instead.
//!
//! Context gathering treats a segment `a -> b` as open unless `a.right` is
//! HOLD. Missing or closed neighbours are synthesized from the nearest anchor
//! one segment duration further out.
//!
//! Timelapse tracks bypass all of this and produce a playback rate.

use crate::change::{interpolate_safe, Change};
use crate::config::Config;
use crate::interpolation::{SidedInterpolationType, SplineContext};
use crate::keyframe::timelapse::playback_rate;
use crate::keyframe::{Keyframe, KeyframeKind, KeyframeValue};
use crate::math::finite_or;
use crate::realtime::RealTimeMapping;
use crate::track::KeyframeTrack;

/// Overlay text when two timelapse keyframes do not move forward in time.
pub const TIMELAPSE_WARNING: &str =
    "Unable to timelapse. Right keyframe's time must be greater than left keyframe's time";

/// Result of one sampling call, including the transient warning if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleOutcome {
    pub change: Option<Change>,
    pub warning: Option<String>,
}

impl SampleOutcome {
    fn from_change(change: Option<Change>) -> Self {
        Self {
            change,
            warning: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Sampler {
    config: Config,
}

impl Sampler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sample `track` at `tick`. `None` means there is nothing to apply.
    pub fn sample(
        &self,
        track: &KeyframeTrack,
        tick: f64,
        mapping: Option<&dyn RealTimeMapping>,
    ) -> Option<Change> {
        self.sample_with_warning(track, tick, mapping).change
    }

    /// Like [`Sampler::sample`], also reporting the timelapse warning.
    pub fn sample_with_warning(
        &self,
        track: &KeyframeTrack,
        tick: f64,
        mapping: Option<&dyn RealTimeMapping>,
    ) -> SampleOutcome {
        if !tick.is_finite() {
            return SampleOutcome::default();
        }
        if track.keyframe_type() == KeyframeKind::Timelapse {
            return self.sample_timelapse(track, tick);
        }
        SampleOutcome::from_change(self.sample_values(track, tick, mapping))
    }

    fn sample_values(
        &self,
        track: &KeyframeTrack,
        tick: f64,
        mapping: Option<&dyn RealTimeMapping>,
    ) -> Option<Change> {
        match track.len() {
            0 => return None,
            1 => return track.first()?.1.create_change(),
            _ => {}
        }

        let (lower_tick, lower) = track.floor_entry(tick.floor() as i32)?;
        let left_type = lower.interpolation_type.right;

        // HOLD leaving lower: step function, exact tick included.
        if left_type == SidedInterpolationType::Hold {
            return lower.create_change();
        }

        let Some((ceil_tick, ceil)) = track.higher_entry(lower_tick) else {
            return if tick == f64::from(lower_tick) {
                lower.create_change()
            } else {
                None
            };
        };

        let mut right_type = ceil.interpolation_type.left;
        if right_type == SidedInterpolationType::Hold {
            right_type = left_type;
        }

        let segment = Segment {
            track,
            lower_tick,
            lower,
            ceil_tick,
            ceil,
        };
        let lower_t = f64::from(lower_tick);
        let ceil_t = f64::from(ceil_tick);
        let shape_amount = (tick - lower_t) / self.span(ceil_t - lower_t);
        let path_amount = match mapping {
            Some(m) => {
                let real_lower = m.real_time(lower_t);
                let span = self.span(m.real_time(ceil_t) - real_lower);
                finite_or((m.real_time(tick) - real_lower) / span, shape_amount)
            }
            None => shape_amount,
        };

        let left_context = left_type.context();
        let right_context = right_type.context();
        let left_change = segment.evaluate(left_context, shape_amount, tick);
        let right_change = if right_context == left_context {
            left_change
        } else {
            segment.evaluate(right_context, shape_amount, tick)
        };

        let (left_change, right_change) = match (left_change, right_change) {
            (Some(l), Some(r)) => (l, r),
            (l, r) => {
                let adjusted =
                    SidedInterpolationType::interpolate(left_type, right_type, path_amount);
                let lower_change = lower.create_change()?;
                let blended = match ceil.create_change() {
                    Some(ceil_change) if adjusted != 0.0 => {
                        interpolate_safe(&lower_change, &ceil_change, adjusted)
                    }
                    _ => lower_change,
                };
                (l.unwrap_or(blended), r.unwrap_or(blended))
            }
        };

        Some(interpolate_safe(&left_change, &right_change, path_amount))
    }

    fn sample_timelapse(&self, track: &KeyframeTrack, tick: f64) -> SampleOutcome {
        let t = tick.floor() as i32;
        let mut lower = track.floor_entry(t);
        let mut ceil = track.higher_entry(t);

        // Past the last keyframe but exactly on it: use the segment that ends here.
        if ceil.is_none() {
            if let Some((lower_tick, _)) = lower.filter(|(lt, _)| *lt == t) {
                ceil = lower;
                lower = track.lower_entry(lower_tick);
            }
        }

        let (Some((lower_tick, lower)), Some((ceil_tick, ceil))) = (lower, ceil) else {
            return SampleOutcome::default();
        };
        let (KeyframeValue::Timelapse(l), KeyframeValue::Timelapse(c)) = (&lower.value, &ceil.value)
        else {
            log::error!("timelapse track holds a non-timelapse keyframe");
            return SampleOutcome::default();
        };

        match playback_rate(lower_tick, l, ceil_tick, c, self.config.base_tickrate) {
            Some(tickrate) => SampleOutcome::from_change(Some(Change::Tickrate { tickrate })),
            None => {
                log::debug!("{TIMELAPSE_WARNING}");
                SampleOutcome {
                    change: None,
                    warning: Some(TIMELAPSE_WARNING.to_string()),
                }
            }
        }
    }

    #[inline]
    fn span(&self, duration: f64) -> f64 {
        if duration.is_finite() && duration > self.config.segment_epsilon {
            duration
        } else {
            1.0
        }
    }
}

/// Sample with the default configuration.
pub fn sample_track(
    track: &KeyframeTrack,
    tick: f64,
    mapping: Option<&dyn RealTimeMapping>,
) -> Option<Change> {
    Sampler::default().sample(track, tick, mapping)
}

#[inline]
fn is_open(keyframe: &Keyframe) -> bool {
    keyframe.interpolation_type.right != SidedInterpolationType::Hold
}

/// The `lower -> ceil` segment being sampled, with access to its neighbours.
struct Segment<'a> {
    track: &'a KeyframeTrack,
    lower_tick: i32,
    lower: &'a Keyframe,
    ceil_tick: i32,
    ceil: &'a Keyframe,
}

impl<'a> Segment<'a> {
    fn evaluate(&self, context: SplineContext, amount: f64, tick: f64) -> Option<Change> {
        match context {
            SplineContext::Pairwise => None,
            SplineContext::FourPoint(family) => {
                let (points, times) = self.four_points();
                self.lower.value.four_point_change(family, points, times, amount)
            }
            SplineContext::FivePoint(family) => {
                let (points, times) = self.five_points();
                self.lower.value.five_point_change(family, points, times, amount)
            }
            SplineContext::Hermite => {
                let window = self.hermite_window();
                self.lower.value.hermite_change(&window, tick)
            }
        }
    }

    #[inline]
    fn delta(&self) -> f64 {
        f64::from(self.ceil_tick) - f64::from(self.lower_tick)
    }

    fn open_before(&self, tick: i32) -> Option<(i32, &'a Keyframe)> {
        self.track.lower_entry(tick).filter(|(_, k)| is_open(k))
    }

    fn before(&self) -> (Option<i32>, f64, &'a Keyframe) {
        match self.open_before(self.lower_tick) {
            Some((t, k)) => (Some(t), f64::from(t), k),
            None => (None, f64::from(self.lower_tick) - self.delta(), self.lower),
        }
    }

    fn after(&self) -> (f64, &'a Keyframe) {
        let next = if is_open(self.ceil) {
            self.track.higher_entry(self.ceil_tick)
        } else {
            None
        };
        match next {
            Some((t, k)) => (f64::from(t), k),
            None => (f64::from(self.ceil_tick) + self.delta(), self.ceil),
        }
    }

    fn four_points(&self) -> ([&'a KeyframeValue; 4], [f64; 4]) {
        let (_, before_t, before) = self.before();
        let (after_t, after) = self.after();
        (
            [&before.value, &self.lower.value, &self.ceil.value, &after.value],
            [
                before_t,
                f64::from(self.lower_tick),
                f64::from(self.ceil_tick),
                after_t,
            ],
        )
    }

    fn five_points(&self) -> ([&'a KeyframeValue; 5], [f64; 5]) {
        let (before_tick, before_t, before) = self.before();
        let (after_t, after) = self.after();
        let (before_before_t, before_before) =
            match before_tick.and_then(|t| self.open_before(t)) {
                Some((t, k)) => (f64::from(t), k),
                None => (before_t - self.delta(), before),
            };
        (
            [
                &before_before.value,
                &before.value,
                &self.lower.value,
                &self.ceil.value,
                &after.value,
            ],
            [
                before_before_t,
                before_t,
                f64::from(self.lower_tick),
                f64::from(self.ceil_tick),
                after_t,
            ],
        )
    }

    /// Maximal run of open segments containing `lower -> ceil`, in tick order.
    fn hermite_window(&self) -> Vec<(f64, &'a KeyframeValue)> {
        let mut window = Vec::new();

        let mut cursor = self.lower_tick;
        while let Some((t, k)) = self.open_before(cursor) {
            window.push((f64::from(t), &k.value));
            cursor = t;
        }
        window.reverse();

        window.push((f64::from(self.lower_tick), &self.lower.value));
        window.push((f64::from(self.ceil_tick), &self.ceil.value));

        let (mut cursor, mut last) = (self.ceil_tick, self.ceil);
        while is_open(last) {
            let Some((t, k)) = self.track.higher_entry(cursor) else {
                break;
            };
            window.push((f64::from(t), &k.value));
            cursor = t;
            last = k;
        }
        window
    }
}
