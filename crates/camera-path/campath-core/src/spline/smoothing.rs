//! Gaussian kernel smoother over five points.
//!
//! The value at `amount` is a weighted average of the five points, weighted by
//! a Gaussian of the index distance to `2 + amount`. Index distance keeps the
//! feel independent of keyframe spacing. Being an average, the result always
//! lies in the convex hull of the inputs and does not pass through keyframes.

use super::per_axis;
use crate::math::{finite_or, unwind_degrees, wrap_degrees, Vector3};

/// Kernel width in index units.
pub const SIGMA: f64 = 0.5;

pub fn position(points: [Vector3; 5], amount: f64) -> Vector3 {
    per_axis(points, |axis| interpolate(axis, amount))
}

pub fn value(points: [f64; 5], amount: f64) -> f64 {
    interpolate(points, amount)
}

pub fn degrees(points: [f64; 5], amount: f64) -> f64 {
    let unwound = unwind_degrees(points, 2);
    wrap_degrees(interpolate(unwound, amount))
}

/// Normalized kernel weights for the five indices around `target_index`.
///
/// When every weight underflows (tiny `sigma`), all mass goes to the nearest
/// index, so the weights still sum to one.
pub fn gaussian_weights(target_index: f64, sigma: f64) -> [f64; 5] {
    let two_sigma_sq = 2.0 * sigma * sigma;
    let mut weights = [0.0; 5];
    for (i, w) in weights.iter_mut().enumerate() {
        let dist = i as f64 - target_index;
        *w = (-(dist * dist) / two_sigma_sq).exp();
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= f64::MIN_POSITIVE {
        let nearest = target_index.round().clamp(0.0, 4.0) as usize;
        let mut one_hot = [0.0; 5];
        one_hot[nearest] = 1.0;
        return one_hot;
    }
    weights.map(|w| w / total)
}

fn interpolate(y: [f64; 5], amount: f64) -> f64 {
    let weights = gaussian_weights(2.0 + amount, SIGMA);
    let v: f64 = y.iter().zip(weights).map(|(y, w)| y * w).sum();
    finite_or(v, y[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_for_any_sigma() {
        for sigma in [0.001, 0.1, 0.5, 1.0, 10.0] {
            for i in 0..=10 {
                let w = gaussian_weights(2.0 + i as f64 / 10.0, sigma);
                let sum: f64 = w.iter().sum();
                assert!((sum - 1.0).abs() < 1e-12, "sigma={sigma} sum={sum}");
                assert!(w.iter().all(|w| *w >= 0.0));
            }
        }
    }

    #[test]
    fn result_stays_in_convex_hull() {
        let y = [-4.0, 7.0, 1.0, 12.0, 3.0];
        for i in 0..=20 {
            let v = value(y, i as f64 / 20.0);
            assert!((-4.0..=12.0).contains(&v), "v={v}");
        }
    }

    #[test]
    fn constant_input_is_constant() {
        assert!((value([3.0; 5], 0.37) - 3.0).abs() < 1e-12);
    }
}
