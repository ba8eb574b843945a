use super::{Point2, Vector2};

/// An axis-aligned rectangle, used for gate footprints and route obstacles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner (minimum x and y).
    pub min: Point2,
    /// Bottom-right corner (maximum x and y).
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(origin: Point2, size: Vector2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Bounding box of the segment `a`→`b`, padded by one unit in both
    /// extents so horizontal and vertical segments still cover an area.
    #[must_use]
    pub fn segment_box(a: &Point2, b: &Point2) -> Self {
        let min = Point2::new(a.x.min(b.x), a.y.min(b.y));
        let size = Vector2::new((b.x - a.x).abs() + 1.0, (b.y - a.y).abs() + 1.0);
        Self::from_origin_size(min, size)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns this rectangle grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector2::new(margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Half-open containment: the top and left edges are inside, the bottom
    /// and right edges are not.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}
