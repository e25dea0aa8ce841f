//! Akima spline over five points.
//!
//! Tangents at the segment endpoints weight the neighbouring secants by how
//! much the slope changes on the far side, which keeps the curve from ringing
//! around outliers. Boundary secants are linearly extrapolated.

use super::{cubic_hermite, per_axis};
use crate::math::{finite_or, unwind_degrees, wrap_degrees, Vector3};

const EPSILON: f64 = 1e-9;

pub fn position(points: [Vector3; 5], times: [f64; 5], amount: f64) -> Vector3 {
    per_axis(points, |axis| interpolate(axis, times, amount))
}

pub fn value(points: [f64; 5], times: [f64; 5], amount: f64) -> f64 {
    interpolate(points, times, amount)
}

pub fn degrees(points: [f64; 5], times: [f64; 5], amount: f64) -> f64 {
    let unwound = unwind_degrees(points, 2);
    wrap_degrees(interpolate(unwound, times, amount))
}

fn interpolate(y: [f64; 5], t: [f64; 5], amount: f64) -> f64 {
    if t.windows(2).any(|w| (w[1] - w[0]).abs() < EPSILON) {
        return y[2];
    }

    let m0 = (y[1] - y[0]) / (t[1] - t[0]);
    let m1 = (y[2] - y[1]) / (t[2] - t[1]);
    let m2 = (y[3] - y[2]) / (t[3] - t[2]);
    let m3 = (y[4] - y[3]) / (t[4] - t[3]);
    let m4 = 2.0 * m3 - m2;

    let tan_lower = weighted_slope(m1, m2, (m3 - m2).abs(), (m1 - m0).abs());
    let tan_ceil = weighted_slope(m2, m3, (m4 - m3).abs(), (m2 - m1).abs());

    let h = t[3] - t[2];
    finite_or(
        cubic_hermite(y[2], y[3], tan_lower * h, tan_ceil * h, amount),
        y[2],
    )
}

#[inline]
fn weighted_slope(left: f64, right: f64, w_left: f64, w_right: f64) -> f64 {
    let total = w_left + w_right;
    if total.abs() < EPSILON {
        (left + right) / 2.0
    } else {
        (w_left * left + w_right * right) / total
    }
}
