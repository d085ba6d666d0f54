//! Scalar helpers on top of nalgebra's 2D vectors.
//!
//! Component-wise arithmetic, dot products and magnitudes come straight from
//! [`nalgebra`]; this module only adds the planar operations it lacks.

use crate::error::{GeometryError, Result};

use super::Vector2;

/// 2D scalar cross product: `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unsigned angle between two vectors in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` so that (anti)parallel inputs never
/// produce `NaN` through rounding.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    let cos = a.dot(b) / (a.norm() * b.norm());
    cos.clamp(-1.0, 1.0).acos()
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` has zero magnitude.
pub fn normalized(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len == 0.0 || !len.is_finite() {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_2d(v: &Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}
