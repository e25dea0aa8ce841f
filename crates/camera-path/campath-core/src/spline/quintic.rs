//! Quintic (smootherstep) pairwise interpolation.
//!
//! Velocity and acceleration are both zero at the segment endpoints.

use crate::math::{finite_or, lerp, rot_lerp, wrap_degrees, Vector3};

/// `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn smoother_step(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

pub fn position(p1: Vector3, p2: Vector3, amount: f64) -> Vector3 {
    p1.lerp(&p2, smoother_step(amount)).or_components(p1)
}

pub fn value(p1: f64, p2: f64, amount: f64) -> f64 {
    finite_or(lerp(p1, p2, smoother_step(amount)), p1)
}

pub fn degrees(p1: f64, p2: f64, amount: f64) -> f64 {
    wrap_degrees(finite_or(rot_lerp(p1, p2, smoother_step(amount)), p1))
}
