//! Spline library: stateless evaluators over positions, plain values and wrapped angles.
//!
//! Each family exposes three flavours:
//! - `position` (3D vector, axes evaluated independently unless the family is spherical)
//! - `value` (unwrapped scalar)
//! - `degrees` (angle; unwound around the segment start, result wrapped to `[-180, 180)`)
//!
//! Point conventions:
//! - 4-point families take `[before, lower, ceil, after]`; the segment is `lower -> ceil`.
//! - 5-point families take `[before_before, before, lower, ceil, after]`; same segment.
//! - `amount` is the normalized position in the segment, `[0, 1]`.
//!
//! Every evaluator returns the segment start value when a time delta collapses
//! or the arithmetic produces a non-finite result.

pub mod akima;
pub mod catmull_rom;
pub mod circular;
pub mod hermite;
pub mod monotone_cubic;
pub mod nurbs;
pub mod quintic;
pub mod smoothing;

use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// Families evaluated on `[before, lower, ceil, after]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FourPointFamily {
    CatmullRom,
    Circular,
    MonotoneCubic,
    Nurbs,
    Quintic,
}

/// Families evaluated on `[before_before, before, lower, ceil, after]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FivePointFamily {
    Akima,
    Smoothing,
}

impl FourPointFamily {
    pub fn position(self, points: [Vector3; 4], times: [f64; 4], amount: f64) -> Vector3 {
        match self {
            Self::CatmullRom => catmull_rom::position(points, times, amount),
            Self::Circular => circular::position(points[1], points[2], amount),
            Self::MonotoneCubic => monotone_cubic::position(points, times, amount),
            Self::Nurbs => nurbs::position(points, amount),
            Self::Quintic => quintic::position(points[1], points[2], amount),
        }
    }

    pub fn value(self, points: [f64; 4], times: [f64; 4], amount: f64) -> f64 {
        match self {
            Self::CatmullRom => catmull_rom::value(points, times, amount),
            Self::Circular => circular::value(points[1], points[2], amount),
            Self::MonotoneCubic => monotone_cubic::value(points, times, amount),
            Self::Nurbs => nurbs::value(points, amount),
            Self::Quintic => quintic::value(points[1], points[2], amount),
        }
    }

    pub fn degrees(self, points: [f64; 4], times: [f64; 4], amount: f64) -> f64 {
        match self {
            Self::CatmullRom => catmull_rom::degrees(points, times, amount),
            Self::Circular => circular::degrees(points[1], points[2], amount),
            Self::MonotoneCubic => monotone_cubic::degrees(points, times, amount),
            Self::Nurbs => nurbs::degrees(points, amount),
            Self::Quintic => quintic::degrees(points[1], points[2], amount),
        }
    }
}

impl FivePointFamily {
    pub fn position(self, points: [Vector3; 5], times: [f64; 5], amount: f64) -> Vector3 {
        match self {
            Self::Akima => akima::position(points, times, amount),
            Self::Smoothing => smoothing::position(points, amount),
        }
    }

    pub fn value(self, points: [f64; 5], times: [f64; 5], amount: f64) -> f64 {
        match self {
            Self::Akima => akima::value(points, times, amount),
            Self::Smoothing => smoothing::value(points, amount),
        }
    }

    pub fn degrees(self, points: [f64; 5], times: [f64; 5], amount: f64) -> f64 {
        match self {
            Self::Akima => akima::degrees(points, times, amount),
            Self::Smoothing => smoothing::degrees(points, amount),
        }
    }
}

/// Evaluate `f` on each axis of `points` independently.
#[inline]
pub(crate) fn per_axis<const N: usize, F>(points: [Vector3; N], f: F) -> Vector3
where
    F: Fn([f64; N]) -> f64,
{
    Vector3::new(
        f(points.map(|p| p.x)),
        f(points.map(|p| p.y)),
        f(points.map(|p| p.z)),
    )
}

/// Cubic Hermite between `p0` (t = 0) and `p1` (t = 1).
///
/// Tangents are in units per normalized segment, i.e. already multiplied by the
/// segment duration.
///
/// H(t) = h00(t) * P0 + h10(t) * M0 + h01(t) * P1 + h11(t) * M1
#[inline]
pub(crate) fn cubic_hermite(p0: f64, p1: f64, m0: f64, m1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}
