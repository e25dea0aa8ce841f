//! Circular interpolation: spherical blend of positions about the world origin.
//!
//! Scalars blend linearly and angles take the shortest arc.

use crate::math::{finite_or, lerp, rot_lerp, wrap_degrees, Vector3};

const DENOM_EPSILON: f64 = 1e-9;
const ANGLE_EPSILON: f64 = 1e-6;

pub fn position(p1: Vector3, p2: Vector3, amount: f64) -> Vector3 {
    slerp(p1, p2, amount).or_components(p1)
}

pub fn value(p1: f64, p2: f64, amount: f64) -> f64 {
    finite_or(lerp(p1, p2, amount), p1)
}

pub fn degrees(p1: f64, p2: f64, amount: f64) -> f64 {
    wrap_degrees(finite_or(rot_lerp(p1, p2, amount), p1))
}

/// Slerp between two position vectors, treating them as directions from the
/// origin. Lengths are blended implicitly by the sine weights.
///
/// Falls back to a straight lerp when either vector is near zero length or the
/// two are (anti)parallel.
fn slerp(v1: Vector3, v2: Vector3, t: f64) -> Vector3 {
    let denom = (v1.length_squared() * v2.length_squared()).sqrt();
    if denom < DENOM_EPSILON {
        return v1.lerp(&v2, t);
    }

    let cos_theta = (v1.dot(&v2) / denom).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();
    if theta.abs() < ANGLE_EPSILON {
        return v1.lerp(&v2, t);
    }

    let st = theta.sin();
    if st.abs() < DENOM_EPSILON {
        return v1.lerp(&v2, t);
    }
    let c1 = ((1.0 - t) * theta).sin() / st;
    let c2 = (t * theta).sin() / st;
    v1 * c1 + v2 * c2
}
