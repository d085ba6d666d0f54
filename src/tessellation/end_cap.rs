use crate::geometry::OffsetSegment;
use crate::math::Point2;

use super::joint::resolve_joint;
use super::stroke_style::{EndCapStyle, StrokeStyle};
use super::triangle_fan::emit_triangle_fan;

/// Outer boundary points where the stroked path starts and ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEnds {
    pub start1: Point2,
    pub start2: Point2,
    pub end1: Point2,
    pub end2: Point2,
}

/// Resolves the path's start and end boundaries for the style's end cap.
///
/// Round caps append a half-disc fan at each end. With
/// [`EndCapStyle::Joint`], `last` is the closing segment and the corner
/// between it and `first` is resolved like any interior joint.
pub fn resolve_end_caps(
    vertices: &mut Vec<Point2>,
    first: &OffsetSegment,
    last: &OffsetSegment,
    style: &StrokeStyle,
) -> PathEnds {
    let mut ends = PathEnds {
        start1: *first.edge1().a(),
        start2: *first.edge2().a(),
        end1: *last.edge1().b(),
        end2: *last.edge2().b(),
    };

    match style.end_cap_style() {
        EndCapStyle::Butt => {}
        EndCapStyle::Square => {
            let h = style.half_thickness();
            ends.start1 -= first.edge1().direction() * h;
            ends.start2 -= first.edge2().direction() * h;
            ends.end1 += last.edge1().direction() * h;
            ends.end2 += last.edge2().direction() * h;
        }
        EndCapStyle::Round => {
            let round_min_angle = style.round_min_angle();
            emit_triangle_fan(
                vertices,
                first.center().a(),
                first.center().a(),
                first.edge1().a(),
                first.edge2().a(),
                false,
                round_min_angle,
            );
            emit_triangle_fan(
                vertices,
                last.center().b(),
                last.center().b(),
                last.edge1().b(),
                last.edge2().b(),
                true,
                round_min_angle,
            );
        }
        EndCapStyle::Joint => {
            let joint = resolve_joint(vertices, last, first, style);
            ends.end1 = joint.end1;
            ends.end2 = joint.end2;
            ends.start1 = joint.next_start1;
            ends.start2 = joint.next_start2;
        }
    }

    ends
}
