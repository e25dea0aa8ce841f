//! Small vector/angle toolkit shared by the spline library and the change blends.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 3D vector in world units (serialized as `{ "x", "y", "z" }`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn lerp(&self, other: &Vector3, t: f64) -> Self {
        Self::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Per-component pick: keep finite components, take the rest from `fallback`.
    pub fn or_components(self, fallback: Vector3) -> Self {
        Self::new(
            finite_or(self.x, fallback.x),
            finite_or(self.y, fallback.y),
            finite_or(self.z, fallback.z),
        )
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
#[inline]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d >= 180.0 {
        d -= 360.0;
    }
    if d < -180.0 {
        d += 360.0;
    }
    d
}

/// Shortest-arc blend from `a` to `b`. The result is not wrapped.
#[inline]
pub fn rot_lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * wrap_degrees(b - a)
}

/// Unwind raw angles onto a continuous number line anchored at `points[anchor]`.
///
/// Each neighbour is placed by adding the shortest-path delta to the previous
/// unwound value, walking outward from the anchor in both directions.
pub fn unwind_degrees<const N: usize>(points: [f64; N], anchor: usize) -> [f64; N] {
    let mut out = points;
    if N == 0 {
        return out;
    }
    let anchor = anchor.min(N.saturating_sub(1));
    out[anchor] = points[anchor];
    for i in (0..anchor).rev() {
        out[i] = out[i + 1] + wrap_degrees(points[i] - points[i + 1]);
    }
    for i in anchor + 1..N {
        out[i] = out[i - 1] + wrap_degrees(points[i] - points[i - 1]);
    }
    out
}

/// Slice variant of [`unwind_degrees`] anchored at the first element.
pub fn unwind_degrees_slice(points: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        out.push(*first);
        let mut prev_raw = *first;
        let mut prev = *first;
        for raw in iter {
            prev += wrap_degrees(raw - prev_raw);
            prev_raw = *raw;
            out.push(prev);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_degrees_canonical_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(-180.0), -180.0);
        assert_eq!(wrap_degrees(359.0), -1.0);
        assert_eq!(wrap_degrees(-540.0), -180.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }

    #[test]
    fn rot_lerp_takes_short_way() {
        let mid = rot_lerp(350.0, 10.0, 0.5);
        assert!((wrap_degrees(mid) - 0.0).abs() < 1e-9, "mid={mid}");
    }

    #[test]
    fn unwind_is_continuous_across_wrap() {
        let out = unwind_degrees([340.0, 355.0, 5.0, 20.0], 1);
        assert_eq!(out, [340.0, 355.0, 365.0, 380.0]);

        let back = unwind_degrees([10.0, 350.0, 330.0], 0);
        assert_eq!(back, [10.0, -10.0, -30.0]);

        let slice = unwind_degrees_slice(&[170.0, -170.0, -150.0]);
        assert_eq!(slice, vec![170.0, 190.0, 210.0]);
    }

    #[test]
    fn or_components_replaces_nan() {
        let v = Vector3::new(f64::NAN, 2.0, f64::INFINITY)
            .or_components(Vector3::new(1.0, 9.0, 3.0));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }
}
