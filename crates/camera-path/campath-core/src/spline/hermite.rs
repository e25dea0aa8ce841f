//! Piecewise cubic Hermite through a whole run of keyframes.
//!
//! Interior tangents are the spacing-weighted blend of the adjacent secants,
//! `(h_i * d_{i-1} + h_{i-1} * d_i) / (h_{i-1} + h_i)`, and the two ends use
//! one-sided secants. Queries outside the run are clamped to its ends.
//!
//! Points must be sorted by time. A pair of points closer than the time
//! epsilon returns the earlier point's value. A run whose ends are out of
//! order, or a NaN query, returns the first point's value.

use super::cubic_hermite;
use crate::math::{finite_or, unwind_degrees_slice, wrap_degrees, Vector3};

const TIME_EPSILON: f64 = 1e-9;

pub fn position(points: &[(f64, Vector3)], time: f64) -> Vector3 {
    let times: Vec<f64> = points.iter().map(|(t, _)| *t).collect();
    Vector3::new(
        interpolate(&times, &column(points, |p| p.x), time),
        interpolate(&times, &column(points, |p| p.y), time),
        interpolate(&times, &column(points, |p| p.z), time),
    )
}

fn column(points: &[(f64, Vector3)], f: impl Fn(&Vector3) -> f64) -> Vec<f64> {
    points.iter().map(|(_, p)| f(p)).collect()
}

pub fn value(points: &[(f64, f64)], time: f64) -> f64 {
    let (times, values): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    interpolate(&times, &values, time)
}

/// Angles are unwound from the first point before fitting.
pub fn degrees(points: &[(f64, f64)], time: f64) -> f64 {
    let (times, raw): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    let values = unwind_degrees_slice(&raw);
    wrap_degrees(interpolate(&times, &values, time))
}

/// Returns 0 for an empty run.
fn interpolate(times: &[f64], values: &[f64], time: f64) -> f64 {
    let n = times.len().min(values.len());
    match n {
        0 => return 0.0,
        1 => return values[0],
        _ => {}
    }

    let (first, last) = (times[0], times[n - 1]);
    if time.is_nan() || first.is_nan() || last.is_nan() || first > last {
        return values[0];
    }
    let time = time.max(first).min(last);
    let i = times[..n]
        .partition_point(|t| *t <= time)
        .saturating_sub(1)
        .min(n - 2);

    let h = times[i + 1] - times[i];
    if h.abs() < TIME_EPSILON {
        return values[i];
    }

    let m0 = tangent(times, values, n, i);
    let m1 = tangent(times, values, n, i + 1);
    let s = (time - times[i]) / h;
    finite_or(cubic_hermite(values[i], values[i + 1], m0 * h, m1 * h, s), values[i])
}

#[inline]
fn secant(times: &[f64], values: &[f64], j: usize) -> f64 {
    let dt = times[j + 1] - times[j];
    if dt.abs() < TIME_EPSILON {
        0.0
    } else {
        (values[j + 1] - values[j]) / dt
    }
}

fn tangent(times: &[f64], values: &[f64], n: usize, k: usize) -> f64 {
    if k == 0 {
        return secant(times, values, 0);
    }
    if k == n - 1 {
        return secant(times, values, n - 2);
    }
    let h_prev = times[k] - times[k - 1];
    let h_next = times[k + 1] - times[k];
    let total = h_prev + h_next;
    if total.abs() < TIME_EPSILON {
        return 0.0;
    }
    (h_next * secant(times, values, k - 1) + h_prev * secant(times, values, k)) / total
}
