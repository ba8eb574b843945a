use crate::config::DEFAULT_ROUTE_CLEARANCE;
use crate::math::{Point2, Rect};

use super::candidates::{candidates, collapse_repeats};

/// Bend position of the unchecked fallback route.
const FALLBACK_FRACTION: f64 = 0.7;

/// How a route was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A candidate that clears every obstacle.
    Clear,
    /// The unchecked fallback; may cross gate bodies.
    Fallback,
}

/// An orthogonal waypoint path with at least two points.
///
/// When start and end coincide the path is `[start, start]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub waypoints: Vec<Point2>,
    pub kind: RouteKind,
}

/// Computes obstacle-avoiding orthogonal routes.
///
/// Stateless apart from the clearance: identical inputs always give
/// identical output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSynthesizer {
    clearance: f64,
}

impl Default for RouteSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE_CLEARANCE)
    }
}

impl RouteSynthesizer {
    /// Creates a synthesizer that keeps `clearance` away from every obstacle.
    #[must_use]
    pub fn new(clearance: f64) -> Self {
        Self { clearance }
    }

    #[must_use]
    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    /// Returns the first candidate route from `start` to `end` that clears all
    /// `obstacles`, or `None` when every candidate is blocked.
    ///
    /// `obstacles` are raw gate bodies; the clearance is applied here.
    #[must_use]
    pub fn synthesize(&self, start: Point2, end: Point2, obstacles: &[Rect]) -> Option<Vec<Point2>> {
        let padded: Vec<Rect> = obstacles
            .iter()
            .map(|r| r.expanded(self.clearance))
            .collect();
        candidates()
            .map(|c| c.waypoints(start, end))
            .find(|waypoints| is_clear(waypoints, &padded))
    }

    /// Like [`Self::synthesize`], but falls back to [`fallback_route`] so a
    /// path always exists.
    #[must_use]
    pub fn route(&self, start: Point2, end: Point2, obstacles: &[Rect]) -> Route {
        if let Some(waypoints) = self.synthesize(start, end, obstacles) {
            return Route {
                waypoints,
                kind: RouteKind::Clear,
            };
        }
        tracing::trace!(?start, ?end, "no clear route, using fallback");
        Route {
            waypoints: fallback_route(start, end),
            kind: RouteKind::Fallback,
        }
    }
}

/// Whether no segment of `waypoints` touches any of the (already padded)
/// obstacles. A single blocked segment rejects the whole path.
#[must_use]
pub fn is_clear(waypoints: &[Point2], obstacles: &[Rect]) -> bool {
    waypoints.windows(2).all(|seg| {
        let bounds = Rect::segment_box(&seg[0], &seg[1]);
        !obstacles.iter().any(|obstacle| bounds.overlaps(obstacle))
    })
}

/// The unchecked dog-leg route: leaves along the dominant axis and bends at
/// 70% of the displacement.
#[must_use]
pub fn fallback_route(start: Point2, end: Point2) -> Vec<Point2> {
    let d = end - start;
    let points = if d.x.abs() > d.y.abs() {
        let bend_x = start.x + d.x * FALLBACK_FRACTION;
        vec![
            start,
            Point2::new(bend_x, start.y),
            Point2::new(bend_x, end.y),
            end,
        ]
    } else {
        let bend_y = start.y + d.y * FALLBACK_FRACTION;
        vec![
            start,
            Point2::new(start.x, bend_y),
            Point2::new(end.x, bend_y),
            end,
        ]
    };
    collapse_repeats(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use crate::routing::is_orthogonal;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size(Point2::new(x, y), Vector2::new(w, h))
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn unobstructed_route_is_first_candidate() {
        let route = RouteSynthesizer::default()
            .synthesize(p(0.0, 0.0), p(100.0, 50.0), &[])
            .unwrap();
        assert_eq!(
            route,
            vec![p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0), p(100.0, 50.0)]
        );
    }

    #[test]
    fn blocked_horizontal_falls_through_to_vertical() {
        // Sits on the first horizontal leg but not on the vertical-first path.
        let obstacles = [rect(40.0, -10.0, 20.0, 20.0)];
        let route = RouteSynthesizer::default()
            .synthesize(p(0.0, 0.0), p(100.0, 50.0), &obstacles)
            .unwrap();
        assert_eq!(
            route,
            vec![p(0.0, 0.0), p(0.0, 25.0), p(100.0, 25.0), p(100.0, 50.0)]
        );
    }

    #[test]
    fn straight_line_blocked_uses_detour() {
        // Every direct shape collapses onto y=0 and hits the obstacle; the first
        // detour whose return leg misses it is offset 30, horizontal, 0.7.
        let obstacles = [rect(40.0, -10.0, 20.0, 20.0)];
        let route = RouteSynthesizer::default()
            .synthesize(p(0.0, 0.0), p(100.0, 0.0), &obstacles)
            .unwrap();
        assert_eq!(
            route,
            vec![
                p(0.0, 0.0),
                p(0.0, 30.0),
                p(70.0, 30.0),
                p(70.0, 0.0),
                p(100.0, 0.0)
            ]
        );
        let padded: Vec<Rect> = obstacles.iter().map(|r| r.expanded(5.0)).collect();
        assert!(is_clear(&route, &padded));
    }

    #[test]
    fn clearance_is_respected() {
        // The obstacle's bottom edge is 3 units above the direct path: blocked
        // with clearance 5, free with clearance 0.
        let obstacles = [rect(40.0, -23.0, 20.0, 20.0)];
        let tight = RouteSynthesizer::new(0.0)
            .synthesize(p(0.0, 0.0), p(100.0, 0.0), &obstacles)
            .unwrap();
        assert_eq!(tight, vec![p(0.0, 0.0), p(50.0, 0.0), p(100.0, 0.0)]);
        let padded = RouteSynthesizer::new(5.0)
            .synthesize(p(0.0, 0.0), p(100.0, 0.0), &obstacles)
            .unwrap();
        assert_ne!(padded, tight);
    }

    #[test]
    fn exhausted_search_returns_none_and_route_falls_back() {
        let obstacles = [rect(-500.0, -500.0, 1000.0, 1000.0)];
        let synth = RouteSynthesizer::default();
        assert!(synth
            .synthesize(p(0.0, 0.0), p(100.0, 50.0), &obstacles)
            .is_none());
        let route = synth.route(p(0.0, 0.0), p(100.0, 50.0), &obstacles);
        assert_eq!(route.kind, RouteKind::Fallback);
        assert_eq!(
            route.waypoints,
            vec![p(0.0, 0.0), p(70.0, 0.0), p(70.0, 50.0), p(100.0, 50.0)]
        );
    }

    #[test]
    fn fallback_goes_vertical_when_dy_dominates() {
        let pts = fallback_route(p(0.0, 0.0), p(10.0, 100.0));
        assert_eq!(
            pts,
            vec![p(0.0, 0.0), p(0.0, 70.0), p(10.0, 70.0), p(10.0, 100.0)]
        );
    }

    #[test]
    fn coincident_endpoints_route_clear() {
        let pin = p(68.0, 20.0);
        let route = RouteSynthesizer::default().route(pin, pin, &[]);
        assert_eq!(route.kind, RouteKind::Clear);
        assert_eq!(route.waypoints, vec![pin, pin]);
        assert!(is_orthogonal(&route.waypoints));
    }

    #[test]
    fn routing_is_deterministic() {
        let obstacles = [
            rect(40.0, -10.0, 20.0, 20.0),
            rect(120.0, 30.0, 75.0, 50.0),
            rect(60.0, 60.0, 60.0, 40.0),
        ];
        let synth = RouteSynthesizer::default();
        let a = synth.route(p(0.0, 0.0), p(200.0, 120.0), &obstacles);
        let b = synth.route(p(0.0, 0.0), p(200.0, 120.0), &obstacles);
        assert_eq!(a, b);
    }

    #[test]
    fn clear_routes_are_valid() {
        let obstacles = [rect(40.0, -10.0, 20.0, 20.0), rect(100.0, 40.0, 30.0, 30.0)];
        let padded: Vec<Rect> = obstacles.iter().map(|r| r.expanded(5.0)).collect();
        let synth = RouteSynthesizer::default();
        for end in [p(200.0, 0.0), p(150.0, 150.0), p(-80.0, 60.0), p(30.0, -90.0)] {
            let route = synth.route(p(0.0, 0.0), end, &obstacles);
            assert!(route.waypoints.len() >= 2);
            assert!(is_orthogonal(&route.waypoints), "{:?}", route.waypoints);
            assert_eq!(route.waypoints.first(), Some(&p(0.0, 0.0)));
            assert_eq!(route.waypoints.last(), Some(&end));
            if route.kind == RouteKind::Clear {
                assert!(is_clear(&route.waypoints, &padded));
            }
        }
    }
}
