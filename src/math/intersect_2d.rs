use super::vector_2d::cross_2d;
use super::{Point2, Vector2, PARALLEL_TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Lines whose direction cross product is below [`PARALLEL_TOLERANCE`] in
/// magnitude are treated as parallel. The directions are not normalized, so
/// the tolerance scales with their lengths.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let denominator = cross_2d(d1, d2);
    if denominator.abs() < PARALLEL_TOLERANCE {
        return None;
    }
    let origin_dist = p2 - p1;
    let t = cross_2d(&origin_dist, d2) / denominator;
    let u = cross_2d(&origin_dist, d1) / denominator;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn crossing_diagonals() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Vector2::new(2.0, -2.0),
        )
        .unwrap_or((f64::NAN, f64::NAN));
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(u, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_have_no_solution() {
        let result = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(-3.0, 0.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn near_parallel_within_tolerance() {
        // cross = 1 * 5e-5 stays under the parallel threshold.
        let result = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(1.0, 5e-5),
        );
        assert!(result.is_none());
    }

    #[test]
    fn point_at_scales_direction() {
        let p = point_at(&Point2::new(1.0, 1.0), &Vector2::new(2.0, -4.0), 0.25);
        assert_abs_diff_eq!(p, Point2::new(1.5, 0.0), epsilon = 1e-12);
    }
}
