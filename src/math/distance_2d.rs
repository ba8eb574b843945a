use super::{Point2, TOLERANCE};

/// Returns the minimum distance from `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = *b - *a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return nalgebra::distance(p, a);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((*p - *a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    nalgebra::distance(p, &(*a + ab * t))
}

/// Returns the minimum distance from `p` to a polyline given by its vertices.
///
/// A polyline with fewer than two vertices has no segments and is infinitely
/// far away.
#[must_use]
pub fn point_to_polyline_dist(p: &Point2, vertices: &[Point2]) -> f64 {
    vertices
        .windows(2)
        .map(|seg| point_to_segment_dist(p, &seg[0], &seg[1]))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_dist_perpendicular_projection() {
        // (1, 1) to (0,0)→(2,0). Closest at (1,0).
        let d = point_to_segment_dist(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(
            &Point2::new(-1.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn segment_dist_vertical_segment() {
        let d = point_to_segment_dist(
            &Point2::new(3.0, 5.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 10.0),
        );
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_dist(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn polyline_dist_takes_closest_segment() {
        let path = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let d = point_to_polyline_dist(&Point2::new(12.0, 6.0), &path);
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn polyline_dist_single_vertex_is_infinite() {
        let d = point_to_polyline_dist(&Point2::new(0.0, 0.0), &[Point2::new(0.0, 0.0)]);
        assert!(d.is_infinite());
    }
}
