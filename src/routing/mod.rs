//! Obstacle-avoiding orthogonal routing for wires.
//!
//! Routing is a generate-and-validate search: [`candidates`] yields route
//! shapes in a fixed priority order and [`RouteSynthesizer`] accepts the first
//! one whose segments all clear the padded gate bodies.

mod candidates;
mod synthesizer;

pub use candidates::{candidates, Candidate, Leg, BEND_FRACTIONS, DETOUR_OFFSETS};
pub use synthesizer::{fallback_route, is_clear, Route, RouteKind, RouteSynthesizer};

use crate::math::{Point2, TOLERANCE};

/// Whether each consecutive pair of points differs along exactly one axis.
///
/// A two-point path whose ends coincide is the route of a zero-length wire
/// and also counts as orthogonal.
#[must_use]
pub fn is_orthogonal(points: &[Point2]) -> bool {
    if let [a, b] = points {
        if nalgebra::distance(a, b) <= TOLERANCE {
            return true;
        }
    }
    points.windows(2).all(|seg| {
        let dx = (seg[1].x - seg[0].x).abs() > TOLERANCE;
        let dy = (seg[1].y - seg[0].y).abs() > TOLERANCE;
        dx != dy
    })
}
