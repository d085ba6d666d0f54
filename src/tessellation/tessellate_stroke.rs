use crate::error::{Result, TessellationError};
use crate::geometry::OffsetSegment;
use crate::math::Point2;

use super::end_cap::resolve_end_caps;
use super::joint::resolve_joint;
use super::stroke_style::{EndCapStyle, StrokeStyle};

/// Generates a flat triangle list covering a polyline drawn with a thickness.
///
/// The output is a sequence of vertices read in groups of three, one
/// independent triangle per group, in path order: cap and joint triangles sit
/// where they occur along the path, before the quad of the segment they close.
///
/// Consecutive duplicate points are skipped. Input with fewer than two
/// distinct points produces no triangles.
#[derive(Debug)]
pub struct TessellateStroke {
    points: Vec<Point2>,
    style: StrokeStyle,
}

impl TessellateStroke {
    /// Creates a new stroke tessellation operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, style: StrokeStyle) -> Self {
        Self { points, style }
    }

    /// Executes the tessellation into a fresh vertex list.
    ///
    /// # Errors
    ///
    /// Returns an error if any input coordinate is not finite.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let mut vertices = Vec::new();
        self.execute_into(&mut vertices)?;
        Ok(vertices)
    }

    /// Appends the tessellated triangles to `vertices`.
    ///
    /// Existing content is left untouched. On error nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if any input coordinate is not finite.
    pub fn execute_into(&self, vertices: &mut Vec<Point2>) -> Result<()> {
        tessellate_into(&self.points, &self.style, vertices)
    }
}

/// Tessellates `points` with `style` into a new triangle list.
///
/// # Errors
///
/// Returns an error if any input coordinate is not finite.
pub fn tessellate(points: &[Point2], style: &StrokeStyle) -> Result<Vec<Point2>> {
    let mut vertices = Vec::new();
    tessellate_into(points, style, &mut vertices)?;
    Ok(vertices)
}

/// Appends the triangles of `points` stroked with `style` to `vertices`.
///
/// Existing content is left untouched. On error nothing is appended.
///
/// # Errors
///
/// Returns an error if any input coordinate is not finite.
pub fn tessellate_into(
    points: &[Point2],
    style: &StrokeStyle,
    vertices: &mut Vec<Point2>,
) -> Result<()> {
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(TessellationError::InvalidParameters(format!(
            "point {i} has a non-finite coordinate"
        ))
        .into());
    }

    let segments = build_segments(points, style);
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        tracing::debug!(points = points.len(), "no segments to tessellate");
        return Ok(());
    };

    let initial_len = vertices.len();
    let ends = resolve_end_caps(vertices, first, last, style);

    let mut start1 = ends.start1;
    let mut start2 = ends.start2;

    for (i, segment) in segments.iter().enumerate() {
        let (end1, end2, next_start1, next_start2) = match segments.get(i + 1) {
            Some(next) => {
                let joint = resolve_joint(vertices, segment, next, style);
                (joint.end1, joint.end2, joint.next_start1, joint.next_start2)
            }
            None => (ends.end1, ends.end2, start1, start2),
        };

        vertices.extend_from_slice(&[start1, start2, end1, end1, start2, end2]);

        start1 = next_start1;
        start2 = next_start2;
    }

    tracing::debug!(
        points = points.len(),
        segments = segments.len(),
        triangles = (vertices.len() - initial_len) / 3,
        "stroke tessellated"
    );

    Ok(())
}

/// Builds one offset segment per pair of distinct consecutive points, plus
/// the closing segment for [`EndCapStyle::Joint`].
///
/// Pairs too close (or too far apart) for their direction to be normalized
/// are skipped like coincident ones.
fn build_segments(points: &[Point2], style: &StrokeStyle) -> Vec<OffsetSegment> {
    let half = style.half_thickness();
    let mut segments = Vec::with_capacity(points.len());

    let closing = if style.end_cap_style() == EndCapStyle::Joint {
        points.last().zip(points.first())
    } else {
        None
    };

    let pairs = points
        .windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(closing);

    for (a, b) in pairs {
        if a == b {
            continue;
        }
        match OffsetSegment::from_points(*a, *b, half) {
            Ok(segment) => segments.push(segment),
            Err(err) => tracing::trace!(%err, "skipping degenerate segment"),
        }
    }

    segments
}

/// Groups a flat vertex list into triangles. A trailing partial group is ignored.
#[must_use]
pub fn triangles(vertices: &[Point2]) -> impl Iterator<Item = [Point2; 3]> + '_ {
    vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}
