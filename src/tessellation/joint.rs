use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::OffsetSegment;
use crate::math::vector_2d::{angle_between, cross_2d};
use crate::math::Point2;

use super::stroke_style::{JointStyle, StrokeStyle};
use super::triangle_fan::{emit_triangle_fan, fan_sweep};

/// Outer corners closer than this fraction of the half thickness are treated
/// as one point, so a collinear round joint emits no fan.
const COINCIDENT_CORNER_RATIO: f64 = 1e-9;

/// A joint's outer arc spans at most a half turn. A larger sweep means the
/// near-collinear corners were unwrapped the wrong way round.
const MAX_JOINT_SWEEP: f64 = 1.5 * PI;

/// Boundary points produced where two stroked segments meet.
///
/// `end1`/`end2` close the incoming segment; `next_start1`/`next_start2` open
/// the outgoing one. The `1` points always lie on the `edge1` side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointBoundary {
    pub end1: Point2,
    pub end2: Point2,
    pub next_start1: Point2,
    pub next_start2: Point2,
}

/// Returns the joint style actually used between `a` and `b`.
///
/// Miters whose corner angle, folded into `[0, π/2]`, falls below the style's
/// miter threshold are drawn beveled.
#[must_use]
pub fn effective_joint_style(
    a: &OffsetSegment,
    b: &OffsetSegment,
    style: &StrokeStyle,
) -> JointStyle {
    let angle = angle_between(&a.center().direction(), &b.center().direction());
    let wrapped = if angle > FRAC_PI_2 { PI - angle } else { angle };

    match style.joint_style() {
        JointStyle::Miter if wrapped < style.miter_min_angle() => {
            tracing::trace!(wrapped, "miter demoted to bevel");
            JointStyle::Bevel
        }
        joint_style => joint_style,
    }
}

/// Resolves the corner between consecutive offset segments `a` and `b`.
///
/// Bevel and round corners append their filling triangles to `vertices`;
/// miter corners add nothing.
pub fn resolve_joint(
    vertices: &mut Vec<Point2>,
    a: &OffsetSegment,
    b: &OffsetSegment,
    style: &StrokeStyle,
) -> JointBoundary {
    match effective_joint_style(a, b, style) {
        JointStyle::Miter => resolve_miter(a, b),
        joint_style @ (JointStyle::Bevel | JointStyle::Round) => {
            resolve_flattened(vertices, a, b, joint_style, style)
        }
    }
}

fn resolve_miter(a: &OffsetSegment, b: &OffsetSegment) -> JointBoundary {
    let end1 = a
        .edge1()
        .intersection(b.edge1(), true)
        .unwrap_or(*a.edge1().b());
    let end2 = a
        .edge2()
        .intersection(b.edge2(), true)
        .unwrap_or(*a.edge2().b());

    JointBoundary {
        end1,
        end2,
        next_start1: end1,
        next_start2: end2,
    }
}

fn resolve_flattened(
    vertices: &mut Vec<Point2>,
    a: &OffsetSegment,
    b: &OffsetSegment,
    joint_style: JointStyle,
    style: &StrokeStyle,
) -> JointBoundary {
    let dir_a = a.center().direction();
    let dir_b = b.center().direction();
    let angle = angle_between(&dir_a, &dir_b);
    let clockwise = cross_2d(&dir_a, &dir_b) < 0.0;

    // edge1 lies left of the center line, so it is on the outside of a
    // clockwise turn.
    let (outer_a, outer_b, inner_a, inner_b) = if clockwise {
        (a.edge1(), b.edge1(), a.edge2(), b.edge2())
    } else {
        (a.edge2(), b.edge2(), a.edge1(), b.edge1())
    };

    let inner_hit = inner_a.intersection(inner_b, style.allow_overlap());
    let inner_sec = inner_hit.unwrap_or(*inner_a.b());

    // Without an inner intersection, near-reversals restart from the outer edge.
    let inner_start = match inner_hit {
        Some(p) => p,
        None if angle > FRAC_PI_2 => {
            tracing::trace!(angle, "no inner intersection, restarting from outer edge");
            *outer_a.b()
        }
        None => *inner_a.b(),
    };

    let boundary = if clockwise {
        JointBoundary {
            end1: *outer_a.b(),
            end2: inner_sec,
            next_start1: *outer_b.a(),
            next_start2: inner_start,
        }
    } else {
        JointBoundary {
            end1: inner_sec,
            end2: *outer_a.b(),
            next_start1: inner_start,
            next_start2: *outer_b.a(),
        }
    };

    match joint_style {
        JointStyle::Round => {
            let pivot = a.center().b();
            let coincident = (outer_b.a() - outer_a.b()).norm()
                <= COINCIDENT_CORNER_RATIO * style.half_thickness();
            let sweep = fan_sweep(pivot, outer_a.b(), outer_b.a(), clockwise);

            if coincident || sweep.abs() > MAX_JOINT_SWEEP {
                tracing::trace!(sweep, "near-collinear round joint, no fan");
            } else {
                emit_triangle_fan(
                    vertices,
                    &inner_sec,
                    pivot,
                    outer_a.b(),
                    outer_b.a(),
                    clockwise,
                    style.round_min_angle(),
                );
            }
        }
        JointStyle::Bevel | JointStyle::Miter => {
            vertices.extend_from_slice(&[*outer_a.b(), *outer_b.a(), inner_sec]);
        }
    }

    boundary
}
