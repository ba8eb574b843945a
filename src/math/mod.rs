pub mod distance_2d;
pub mod rect;

pub use distance_2d::point_to_segment_dist;
pub use rect::Rect;

/// 2D point type (canvas coordinates, y grows downwards).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
