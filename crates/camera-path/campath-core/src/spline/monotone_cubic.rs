//! Monotone cubic (Fritsch-Carlson) interpolation.
//!
//! Tangents start as the mean of the adjacent secants, are zeroed at local
//! extrema and flat intervals, and are scaled back onto the `alpha^2 + beta^2 <= 9`
//! circle. The result never leaves `[min(lower, ceil), max(lower, ceil)]`.

use super::{cubic_hermite, per_axis};
use crate::math::{finite_or, unwind_degrees, wrap_degrees, Vector3};

const TIME_EPSILON: f64 = 1e-5;
const FLAT_EPSILON: f64 = 1e-9;

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

fn interpolate(y: [f64; 4], t: [f64; 4], amount: f64) -> f64 {
    if (t[1] - t[0]).abs() < TIME_EPSILON
        || (t[2] - t[1]).abs() < TIME_EPSILON
        || (t[3] - t[2]).abs() < TIME_EPSILON
    {
        return y[1];
    }

    let m0 = (y[1] - y[0]) / (t[1] - t[0]);
    let m1 = (y[2] - y[1]) / (t[2] - t[1]);
    let m2 = (y[3] - y[2]) / (t[3] - t[2]);

    let (mut tan1, mut tan2) = ((m0 + m1) / 2.0, (m1 + m2) / 2.0);

    if (y[2] - y[1]).abs() < FLAT_EPSILON {
        tan1 = 0.0;
        tan2 = 0.0;
    } else {
        if m0 * m1 <= 0.0 {
            tan1 = 0.0;
        }
        if m1 * m2 <= 0.0 {
            tan2 = 0.0;
        }
        let alpha = tan1 / m1;
        let beta = tan2 / m1;
        let radius_sq = alpha * alpha + beta * beta;
        if radius_sq > 9.0 {
            let tau = 3.0 / radius_sq.sqrt();
            tan1 = tau * alpha * m1;
            tan2 = tau * beta * m1;
        }
    }

    let h = t[2] - t[1];
    finite_or(cubic_hermite(y[1], y[2], tan1 * h, tan2 * h, amount), y[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_overshoots_segment_endpoints() {
        let cases: [([f64; 4], [f64; 4]); 4] = [
            ([0.0, 0.0, 10.0, 10.0], [0.0, 1.0, 2.0, 3.0]),
            ([0.0, 9.0, 10.0, 0.0], [0.0, 1.0, 2.0, 3.0]),
            ([-50.0, 0.0, 1.0, 100.0], [0.0, 10.0, 11.0, 12.0]),
            ([5.0, 0.0, 1.0, -3.0], [0.0, 2.0, 30.0, 31.0]),
        ];
        for (y, t) in cases {
            let lo = y[1].min(y[2]);
            let hi = y[1].max(y[2]);
            for i in 0..=100 {
                let v = value(y, t, i as f64 / 100.0);
                assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "y={y:?} v={v}");
            }
        }
    }

    #[test]
    fn flat_interval_stays_flat() {
        for i in 0..=10 {
            let v = value([0.0, 3.0, 3.0, 9.0], [0.0, 1.0, 2.0, 3.0], i as f64 / 10.0);
            assert!((v - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn collapsed_time_returns_anchor() {
        assert_eq!(value([1.0, 2.0, 3.0, 4.0], [0.0, 0.0, 1.0, 2.0], 0.5), 2.0);
    }
}
