//! Non-uniform Catmull-Rom ("smooth") spline.
//!
//! Cubic Hermite between `lower` and `ceil` whose tangents are the central
//! finite differences over the neighbouring keyframes:
//! - `m1 = (p2 - p0) / (t2 - t0)`
//! - `m2 = (p3 - p1) / (t3 - t1)`
//!
//! Tangents are scaled by the segment duration before evaluation, so uneven
//! keyframe spacing does not distort speed at the joins.

use super::{cubic_hermite, per_axis};
use crate::math::{finite_or, unwind_degrees, wrap_degrees, Vector3};

const TIME_EPSILON: f64 = 1e-6;

pub fn position(points: [Vector3; 4], times: [f64; 4], amount: f64) -> Vector3 {
    per_axis(points, |axis| interpolate(axis, times, amount))
}

pub fn value(points: [f64; 4], times: [f64; 4], amount: f64) -> f64 {
    interpolate(points, times, amount)
}

pub fn degrees(points: [f64; 4], times: [f64; 4], amount: f64) -> f64 {
    let unwound = unwind_degrees(points, 1);
    wrap_degrees(interpolate(unwound, times, amount))
}

fn interpolate(p: [f64; 4], t: [f64; 4], amount: f64) -> f64 {
    let h = t[2] - t[1];
    if h.abs() < TIME_EPSILON {
        return p[1];
    }
    let secant = (p[2] - p[1]) / h;
    let m1 = central_slope(p[0], p[2], t[0], t[2]).unwrap_or(secant);
    let m2 = central_slope(p[1], p[3], t[1], t[3]).unwrap_or(secant);

    finite_or(cubic_hermite(p[1], p[2], m1 * h, m2 * h, amount), p[1])
}

#[inline]
fn central_slope(a: f64, b: f64, ta: f64, tb: f64) -> Option<f64> {
    let dt = tb - ta;
    (dt.abs() >= TIME_EPSILON).then(|| (b - a) / dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_segment_endpoints() {
        let p = [3.0, -1.0, 4.0, 1.5];
        let t = [0.0, 7.0, 20.0, 22.0];
        assert!((value(p, t, 0.0) - -1.0).abs() < 1e-12);
        assert!((value(p, t, 1.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let p = [0.0, 10.0, 20.0, 30.0];
        let t = [0.0, 10.0, 20.0, 30.0];
        for i in 0..=10 {
            let a = i as f64 / 10.0;
            assert!((value(p, t, a) - (10.0 + 10.0 * a)).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_length_segment_returns_anchor() {
        assert_eq!(value([1.0, 2.0, 3.0, 4.0], [0.0, 5.0, 5.0, 9.0], 0.5), 2.0);
    }

    #[test]
    fn degrees_cross_wrap_boundary_the_short_way() {
        let p = [340.0, 350.0, 10.0, 20.0];
        let t = [0.0, 10.0, 20.0, 30.0];
        let mid = degrees(p, t, 0.5);
        assert!(mid.abs() < 1e-9, "mid={mid}");
    }

    #[test]
    fn position_matches_per_axis_value() {
        let pts = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(2.0, 0.0, 4.0),
            Vector3::new(3.0, 1.0, 4.0),
        ];
        let t = [0.0, 1.0, 2.0, 3.0];
        let pos = position(pts, t, 0.3);
        assert!((pos.y - value([0.0, 2.0, 0.0, 1.0], t, 0.3)).abs() < 1e-12);
    }
}
