//! Per-keyframe interpolation choice.
//!
//! Every keyframe carries an [`InterpolationType`]: one [`SidedInterpolationType`]
//! for the segment arriving at it (left) and one for the segment leaving it
//! (right). The sampler reads `lower.right` and `ceil.left` for a segment.

use serde::{Deserialize, Serialize};

use crate::error::CampathError;
use crate::spline::{FivePointFamily, FourPointFamily};

/// Interpolation family active on one side of a keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidedInterpolationType {
    /// Step: the value stays constant until the next keyframe.
    Hold,
    Linear,
    /// Zero slope at this keyframe.
    Ease,
    /// Catmull-Rom through the neighbouring keyframes.
    Smooth,
    Circular,
    MonotoneCubic,
    Nurbs,
    Quintic,
    Akima,
    Smoothing,
    Hermite,
}

/// How much neighbouring context a family needs, and which evaluator runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineContext {
    /// Blend of the two segment endpoints, eased by [`SidedInterpolationType::interpolate`].
    Pairwise,
    FourPoint(FourPointFamily),
    FivePoint(FivePointFamily),
    /// Whole run of connected keyframes.
    Hermite,
}

impl SidedInterpolationType {
    pub const ALL: [SidedInterpolationType; 11] = [
        Self::Hold,
        Self::Linear,
        Self::Ease,
        Self::Smooth,
        Self::Circular,
        Self::MonotoneCubic,
        Self::Nurbs,
        Self::Quintic,
        Self::Akima,
        Self::Smoothing,
        Self::Hermite,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::Smooth => "smooth",
            Self::Circular => "circular",
            Self::MonotoneCubic => "monotone_cubic",
            Self::Nurbs => "nurbs",
            Self::Quintic => "quintic",
            Self::Akima => "akima",
            Self::Smoothing => "smoothing",
            Self::Hermite => "hermite",
        }
    }

    /// Static dispatch table from family to evaluator arity.
    #[inline]
    pub fn context(&self) -> SplineContext {
        match self {
            Self::Hold | Self::Linear | Self::Ease => SplineContext::Pairwise,
            Self::Smooth => SplineContext::FourPoint(FourPointFamily::CatmullRom),
            Self::Circular => SplineContext::FourPoint(FourPointFamily::Circular),
            Self::MonotoneCubic => SplineContext::FourPoint(FourPointFamily::MonotoneCubic),
            Self::Nurbs => SplineContext::FourPoint(FourPointFamily::Nurbs),
            Self::Quintic => SplineContext::FourPoint(FourPointFamily::Quintic),
            Self::Akima => SplineContext::FivePoint(FivePointFamily::Akima),
            Self::Smoothing => SplineContext::FivePoint(FivePointFamily::Smoothing),
            Self::Hermite => SplineContext::Hermite,
        }
    }

    /// Eased blend amount for a pairwise segment whose left family is `left`
    /// (the right side of the lower keyframe) and right family is `right`.
    ///
    /// An `Ease` side has zero slope at its end of the segment; any other side
    /// has unit slope, so the curve joins a neighbouring linear segment without
    /// a kink.
    pub fn interpolate(left: Self, right: Self, amount: f64) -> f64 {
        let t = amount;
        match (left == Self::Ease, right == Self::Ease) {
            (true, true) => t * t * (3.0 - 2.0 * t),
            (true, false) => t * t * (2.0 - t),
            (false, true) => t + t * t - t * t * t,
            (false, false) => t,
        }
    }
}

/// Left/right pair stored on every keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterpolationType")]
pub struct InterpolationType {
    pub left: SidedInterpolationType,
    pub right: SidedInterpolationType,
}

impl InterpolationType {
    pub const SMOOTH: Self = Self::symmetric(SidedInterpolationType::Smooth);
    pub const LINEAR: Self = Self::symmetric(SidedInterpolationType::Linear);
    pub const EASE_IN: Self =
        Self::new(SidedInterpolationType::Ease, SidedInterpolationType::Linear);
    pub const EASE_OUT: Self =
        Self::new(SidedInterpolationType::Linear, SidedInterpolationType::Ease);
    pub const EASE_IN_OUT: Self = Self::symmetric(SidedInterpolationType::Ease);
    pub const HOLD: Self = Self::symmetric(SidedInterpolationType::Hold);
    pub const HERMITE: Self = Self::symmetric(SidedInterpolationType::Hermite);

    pub const fn new(left: SidedInterpolationType, right: SidedInterpolationType) -> Self {
        Self { left, right }
    }

    pub const fn symmetric(side: SidedInterpolationType) -> Self {
        Self::new(side, side)
    }

    /// Resolve a preset name as written by older documents (case-insensitive).
    pub fn from_preset_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let preset = match lower.as_str() {
            "ease_in" => Self::EASE_IN,
            "ease_out" => Self::EASE_OUT,
            "ease_in_out" => Self::EASE_IN_OUT,
            other => {
                let side = SidedInterpolationType::ALL
                    .iter()
                    .find(|s| s.name() == other)?;
                Self::symmetric(*side)
            }
        };
        Some(preset)
    }
}

impl Default for InterpolationType {
    fn default() -> Self {
        Self::SMOOTH
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInterpolationType {
    Preset(String),
    Pair {
        left: SidedInterpolationType,
        right: SidedInterpolationType,
    },
}

impl TryFrom<RawInterpolationType> for InterpolationType {
    type Error = CampathError;

    fn try_from(raw: RawInterpolationType) -> Result<Self, Self::Error> {
        match raw {
            RawInterpolationType::Pair { left, right } => Ok(Self::new(left, right)),
            RawInterpolationType::Preset(name) => Self::from_preset_name(&name)
                .ok_or(CampathError::UnknownInterpolation { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_resolve() {
        assert_eq!(
            InterpolationType::from_preset_name("SMOOTH"),
            Some(InterpolationType::SMOOTH)
        );
        assert_eq!(
            InterpolationType::from_preset_name("monotone_cubic"),
            Some(InterpolationType::symmetric(SidedInterpolationType::MonotoneCubic))
        );
        assert_eq!(
            InterpolationType::from_preset_name("ease_in"),
            Some(InterpolationType::EASE_IN)
        );
        assert_eq!(InterpolationType::from_preset_name("bouncy"), None);
    }

    #[test]
    fn serde_pair_and_preset() {
        let json = serde_json::to_string(&InterpolationType::EASE_OUT).unwrap();
        assert_eq!(json, r#"{"left":"linear","right":"ease"}"#);

        let parsed: InterpolationType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, InterpolationType::EASE_OUT);

        let preset: InterpolationType = serde_json::from_str(r#""hold""#).unwrap();
        assert_eq!(preset, InterpolationType::HOLD);

        let bad: Result<InterpolationType, _> = serde_json::from_str(r#""wobble""#);
        assert!(bad.is_err());
    }

    #[test]
    fn eased_amount_endpoints_and_slopes() {
        use SidedInterpolationType::*;
        let h = 1e-6;
        for (l, r) in [(Ease, Ease), (Ease, Linear), (Linear, Ease), (Linear, Smooth)] {
            assert!(SidedInterpolationType::interpolate(l, r, 0.0).abs() < 1e-12);
            assert!((SidedInterpolationType::interpolate(l, r, 1.0) - 1.0).abs() < 1e-12);

            let start_slope = SidedInterpolationType::interpolate(l, r, h) / h;
            let end_slope = (1.0 - SidedInterpolationType::interpolate(l, r, 1.0 - h)) / h;
            let expect_start = if l == Ease { 0.0 } else { 1.0 };
            let expect_end = if r == Ease { 0.0 } else { 1.0 };
            assert!((start_slope - expect_start).abs() < 1e-4, "{l:?}/{r:?} start={start_slope}");
            assert!((end_slope - expect_end).abs() < 1e-4, "{l:?}/{r:?} end={end_slope}");
        }
    }

    #[test]
    fn context_table() {
        assert_eq!(SidedInterpolationType::Hold.context(), SplineContext::Pairwise);
        assert_eq!(
            SidedInterpolationType::Smoothing.context(),
            SplineContext::FivePoint(FivePointFamily::Smoothing)
        );
        assert_eq!(SidedInterpolationType::Hermite.context(), SplineContext::Hermite);
    }
}
