use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::vector_2d::normalized;
use crate::math::{Point2, Vector2};

/// A directed line segment from `a` to `b`.
///
/// Construction rejects coincident endpoints, so [`Segment::direction`] and
/// [`Segment::normal`] are always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point2,
    b: Point2,
    direction: Vector2,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `a` and `b` are equal, or
    /// [`GeometryError::ZeroVector`] if `b - a` has no usable length.
    pub fn new(a: Point2, b: Point2) -> Result<Self> {
        if a == b {
            return Err(GeometryError::Degenerate(format!(
                "segment endpoints coincide at ({}, {})",
                a.x, a.y
            ))
            .into());
        }
        let direction = normalized(&(b - a))?;
        Ok(Self { a, b, direction })
    }

    /// Returns the start point.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.a
    }

    /// Returns the end point.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.b
    }

    /// Returns the unit direction vector from `a` to `b`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Returns the un-normalized vector `b - a`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.b - self.a
    }

    /// Returns the unit direction rotated 90° counter-clockwise.
    ///
    /// The normal points to the left of the walking direction.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        let dir = self.direction();
        Vector2::new(-dir.y, dir.x)
    }

    /// Returns a copy of the segment moved by `offset`.
    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self {
            a: self.a + offset,
            b: self.b + offset,
            direction: self.direction,
        }
    }

    /// Intersects this segment with `other`.
    ///
    /// With `infinite_lines` both segments are extended to full lines and only
    /// parallel lines produce `None`. Otherwise the intersection must also lie
    /// within both segments (parameters in `[0, 1]`).
    #[must_use]
    pub fn intersection(&self, other: &Segment, infinite_lines: bool) -> Option<Point2> {
        let r = self.vector();
        let s = other.vector();
        let (t, u) = line_line_intersect_2d(&self.a, &r, &other.a, &s)?;

        if !infinite_lines && !((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)) {
            return None;
        }

        Some(point_at(&self.a, &r, t))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point2::new(ax, ay), Point2::new(bx, by)).unwrap()
    }

    #[test]
    fn coincident_endpoints_rejected() {
        let p = Point2::new(1.0, 2.0);
        assert!(Segment::new(p, p).is_err());
    }

    #[test]
    fn overflowing_length_rejected() {
        let a = Point2::new(-f64::MAX, 0.0);
        let b = Point2::new(f64::MAX, 0.0);
        assert!(Segment::new(a, b).is_err());
    }

    #[test]
    fn direction_and_normal() {
        let s = seg(1.0, 1.0, 1.0, 5.0);
        assert_abs_diff_eq!(s.direction(), Vector2::new(0.0, 1.0), epsilon = 1e-12);
        // Counter-clockwise rotation of +Y is -X.
        assert_abs_diff_eq!(s.normal(), Vector2::new(-1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(s.vector(), Vector2::new(0.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let s = seg(0.0, 0.0, 2.0, 0.0).translate(&Vector2::new(0.5, -1.0));
        assert_abs_diff_eq!(*s.a(), Point2::new(0.5, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*s.b(), Point2::new(2.5, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn intersection_inside_segments() {
        let p = seg(0.0, 0.0, 2.0, 2.0)
            .intersection(&seg(0.0, 2.0, 2.0, 0.0), false)
            .unwrap();
        assert_abs_diff_eq!(p, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn intersection_outside_segments() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(3.0, -1.0, 3.0, 1.0);
        assert!(a.intersection(&b, false).is_none());

        let p = a.intersection(&b, true).unwrap();
        assert_abs_diff_eq!(p, Point2::new(3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn intersection_parallel_is_none() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(0.0, 1.0, 1.0, 1.0);
        assert!(a.intersection(&b, true).is_none());
        assert!(a.intersection(&b, false).is_none());
    }

    #[test]
    fn intersection_at_shared_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        let p = a.intersection(&b, false).unwrap();
        assert_abs_diff_eq!(p, Point2::new(1.0, 0.0), epsilon = 1e-12);
    }
}
