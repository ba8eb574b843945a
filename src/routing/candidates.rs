use crate::math::Point2;

/// Bend positions, as fractions of the start→end displacement, in try order.
pub const BEND_FRACTIONS: [f64; 5] = [0.5, 0.7, 0.3, 0.8, 0.2];

/// Perpendicular detour distances, in try order.
pub const DETOUR_OFFSETS: [f64; 6] = [30.0, 60.0, 100.0, -30.0, -60.0, -100.0];

/// Which axis the route leaves the start point along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// start → bend shares start's y.
    HorizontalFirst,
    /// start → bend shares start's x.
    VerticalFirst,
}

/// One candidate shape for a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub leg: Leg,
    pub fraction: f64,
    /// Perpendicular displacement of the bend; 0 for the direct shapes.
    pub offset: f64,
}

impl Candidate {
    /// Orthogonal waypoints of this candidate between `start` and `end`.
    ///
    /// Direct shapes have three segments. Detours first step sideways by
    /// `offset`, so the bend leaves the straight line while every segment
    /// stays axis-aligned. Repeated points are collapsed.
    #[must_use]
    pub fn waypoints(&self, start: Point2, end: Point2) -> Vec<Point2> {
        let d = end - start;
        let raw: Vec<Point2> = match self.leg {
            Leg::HorizontalFirst => {
                let bend = Point2::new(start.x + d.x * self.fraction, start.y + self.offset);
                vec![
                    start,
                    Point2::new(start.x, bend.y),
                    bend,
                    Point2::new(bend.x, end.y),
                    end,
                ]
            }
            Leg::VerticalFirst => {
                let bend = Point2::new(start.x + self.offset, start.y + d.y * self.fraction);
                vec![
                    start,
                    Point2::new(bend.x, start.y),
                    bend,
                    Point2::new(end.x, bend.y),
                    end,
                ]
            }
        };
        collapse_repeats(raw)
    }
}

/// All candidates in priority order: the direct shapes for every bend
/// fraction (horizontal-first before vertical-first), then the same shapes
/// displaced by each detour offset.
pub fn candidates() -> impl Iterator<Item = Candidate> {
    let shapes = |offset: f64| {
        BEND_FRACTIONS.into_iter().flat_map(move |fraction| {
            [Leg::HorizontalFirst, Leg::VerticalFirst].map(|leg| Candidate {
                leg,
                fraction,
                offset,
            })
        })
    };
    shapes(0.0).chain(DETOUR_OFFSETS.into_iter().flat_map(shapes))
}

/// Drops consecutive duplicate points, keeping at least two so a zero-length
/// route still has both endpoints.
#[allow(clippy::float_cmp)]
pub(crate) fn collapse_repeats(points: Vec<Point2>) -> Vec<Point2> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return points;
    };
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    if out.len() < 2 {
        return vec![first, last];
    }
    out
}
