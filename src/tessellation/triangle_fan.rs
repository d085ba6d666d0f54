use std::f64::consts::TAU;

use crate::math::vector_2d::rotate_2d;
use crate::math::Point2;

use super::stroke_style::ROUND_ANGLE_LOWER_BOUND;

/// Returns the number of fan triangles for a sweep of `sweep` radians.
///
/// Each triangle covers at least `min_angle`, and there is always at least one.
/// `min_angle` is raised to [`ROUND_ANGLE_LOWER_BOUND`] if smaller.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fan_triangle_count(sweep: f64, min_angle: f64) -> usize {
    ((sweep.abs() / min_angle.max(ROUND_ANGLE_LOWER_BOUND)).floor() as usize).max(1)
}

/// Returns the signed sweep from `start` to `end` around `origin`.
///
/// The result is negative for clockwise sweeps and positive otherwise, with
/// magnitude in `[0, 2π)`.
#[must_use]
pub fn fan_sweep(origin: &Point2, start: &Point2, end: &Point2, clockwise: bool) -> f64 {
    let p1 = start - origin;
    let p2 = end - origin;

    let mut angle1 = p1.y.atan2(p1.x);
    let mut angle2 = p2.y.atan2(p2.x);

    if clockwise {
        if angle2 > angle1 {
            angle2 -= TAU;
        }
    } else if angle1 > angle2 {
        angle1 -= TAU;
    }

    angle2 - angle1
}

/// Appends a fan of triangles approximating the arc from `start` to `end`
/// around `origin`.
///
/// Every triangle is `(previous, next, connect_to)`. Intermediate arc points
/// are `start` rotated around `origin`; the last one is `end` itself so the
/// fan meets the adjacent geometry exactly. Returns the number of triangles
/// emitted.
#[allow(clippy::cast_precision_loss)]
pub fn emit_triangle_fan(
    vertices: &mut Vec<Point2>,
    connect_to: &Point2,
    origin: &Point2,
    start: &Point2,
    end: &Point2,
    clockwise: bool,
    min_angle: f64,
) -> usize {
    let radial = start - origin;
    let sweep = fan_sweep(origin, start, end, clockwise);
    let count = fan_triangle_count(sweep, min_angle);
    let step = sweep / count as f64;

    vertices.reserve(count * 3);
    let mut previous = *start;
    for t in 0..count {
        let next = if t + 1 == count {
            *end
        } else {
            origin + rotate_2d(&radial, (t + 1) as f64 * step)
        };

        vertices.extend_from_slice(&[previous, next, *connect_to]);
        previous = next;
    }

    count
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::tessellation::stroke_style::ROUND_MIN_ANGLE;

    #[test]
    fn count_uses_floor_with_minimum_one() {
        assert_eq!(fan_triangle_count(0.0, ROUND_MIN_ANGLE), 1);
        assert_eq!(fan_triangle_count(0.1, ROUND_MIN_ANGLE), 1);
        assert_eq!(fan_triangle_count(FRAC_PI_2, ROUND_MIN_ANGLE), 8);
        assert_eq!(fan_triangle_count(-PI, ROUND_MIN_ANGLE), 17);
    }

    #[test]
    fn count_bounded_for_tiny_angles() {
        let limit = fan_triangle_count(TAU, ROUND_ANGLE_LOWER_BOUND);
        assert_eq!(fan_triangle_count(TAU, 1e-20), limit);
        assert_eq!(fan_triangle_count(TAU, 0.0), limit);
        assert!(limit < 7000);
    }

    #[test]
    fn sweep_direction() {
        let origin = Point2::origin();
        let top = Point2::new(0.0, 1.0);
        let right = Point2::new(1.0, 0.0);
        assert_abs_diff_eq!(fan_sweep(&origin, &top, &right, true), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(
            fan_sweep(&origin, &top, &right, false),
            3.0 * FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn half_disc_counter_clockwise() {
        let origin = Point2::origin();
        let start = Point2::new(0.0, 0.1);
        let end = Point2::new(0.0, -0.1);
        let mut vertices = Vec::new();
        let count =
            emit_triangle_fan(&mut vertices, &origin, &origin, &start, &end, false, ROUND_MIN_ANGLE);

        assert_eq!(count, 17);
        assert_eq!(vertices.len(), 17 * 3);

        for tri in vertices.chunks_exact(3) {
            // Counter-clockwise from +Y to -Y passes through -X.
            assert!(tri[0].x <= 1e-12 && tri[1].x <= 1e-12);
            assert_abs_diff_eq!((tri[0] - origin).norm(), 0.1, epsilon = 1e-12);
            assert_abs_diff_eq!((tri[1] - origin).norm(), 0.1, epsilon = 1e-12);
            assert_eq!(tri[2], origin);
        }
    }

    #[test]
    fn fan_is_contiguous_and_lands_on_end() {
        let origin = Point2::new(1.0, 0.0);
        let connect_to = Point2::new(0.9, 0.1);
        let start = Point2::new(1.0, -0.1);
        let end = Point2::new(1.1, 0.0);
        let mut vertices = Vec::new();
        let count = emit_triangle_fan(
            &mut vertices,
            &connect_to,
            &origin,
            &start,
            &end,
            false,
            ROUND_MIN_ANGLE,
        );

        assert_eq!(count, 8);
        assert_eq!(vertices[0], start);
        assert_eq!(vertices[vertices.len() - 2], end);

        let tris: Vec<_> = vertices.chunks_exact(3).collect();
        for pair in tris.windows(2) {
            assert_eq!(pair[0][1], pair[1][0]);
        }

        let step = FRAC_PI_2 / 8.0;
        for tri in &tris {
            let a = tri[0] - origin;
            let b = tri[1] - origin;
            let angle = a.y.atan2(a.x);
            let next = b.y.atan2(b.x);
            assert_abs_diff_eq!(next - angle, step, epsilon = 1e-9);
            assert!(next - angle >= ROUND_MIN_ANGLE - 1e-9);
        }
    }

    #[test]
    fn tiny_sweep_emits_single_triangle() {
        let origin = Point2::origin();
        let start = Point2::new(1.0, 0.0);
        let end = Point2::new(0.999, 0.01);
        let mut vertices = Vec::new();
        let count =
            emit_triangle_fan(&mut vertices, &origin, &origin, &start, &end, false, ROUND_MIN_ANGLE);
        assert_eq!(count, 1);
        assert_eq!(vertices, vec![start, end, origin]);
    }
}
