use crate::error::Result;
use crate::math::{Point2, Vector2};

use super::Segment;

/// A center segment together with its two parallel stroke edges.
///
/// `edge1` is the center shifted by `+half_thickness * normal` (the left side
/// when walking from `a` to `b`); `edge2` is shifted the opposite way.
#[derive(Debug, Clone, Copy)]
pub struct OffsetSegment {
    center: Segment,
    edge1: Segment,
    edge2: Segment,
}

impl OffsetSegment {
    /// Builds the offset edges of `center` at `half_thickness` on each side.
    #[must_use]
    pub fn new(center: Segment, half_thickness: f64) -> Self {
        let offset: Vector2 = center.normal() * half_thickness;
        Self {
            center,
            edge1: center.translate(&offset),
            edge2: center.translate(&-offset),
        }
    }

    /// Builds an offset segment between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` and `b` coincide.
    pub fn from_points(a: Point2, b: Point2, half_thickness: f64) -> Result<Self> {
        Ok(Self::new(Segment::new(a, b)?, half_thickness))
    }

    /// Returns the center line.
    #[must_use]
    pub fn center(&self) -> &Segment {
        &self.center
    }

    /// Returns the left edge.
    #[must_use]
    pub fn edge1(&self) -> &Segment {
        &self.edge1
    }

    /// Returns the right edge.
    #[must_use]
    pub fn edge2(&self) -> &Segment {
        &self.edge2
    }
}
