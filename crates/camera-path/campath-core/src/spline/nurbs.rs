//! Uniform cubic B-spline over four control points.
//!
//! The curve is approximating: it is pulled towards the keyframes but does not
//! pass through them, so `amount = 0` is not the lower keyframe's value.
//! Keyframe times are ignored.

use super::per_axis;
use crate::math::{finite_or, unwind_degrees, wrap_degrees, Vector3};

pub fn position(points: [Vector3; 4], amount: f64) -> Vector3 {
    per_axis(points, |axis| interpolate(axis, amount))
}

pub fn value(points: [f64; 4], amount: f64) -> f64 {
    interpolate(points, amount)
}

pub fn degrees(points: [f64; 4], amount: f64) -> f64 {
    let unwound = unwind_degrees(points, 1);
    wrap_degrees(interpolate(unwound, amount))
}

/// B-spline basis weights at `t`; they always sum to one.
#[inline]
pub fn basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (1.0 - t3 + 3.0 * t2 - 3.0 * t) / 6.0,
        (4.0 - 6.0 * t2 + 3.0 * t3) / 6.0,
        (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) / 6.0,
        t3 / 6.0,
    ]
}

fn interpolate(p: [f64; 4], amount: f64) -> f64 {
    let b = basis(amount);
    let v = p[0] * b[0] + p[1] * b[1] + p[2] * b[2] + p[3] * b[3];
    finite_or(v, p[1])
}
