//! Euclidean distance between planar points.

use crate::point::Point;

/// Squared Euclidean distance `(a.x - b.x)² + (a.y - b.y)²`.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Euclidean distance `sqrt((a.x - b.x)² + (a.y - b.y)²)`.
///
/// Symmetric, non-negative, and zero when `a == b`.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    squared_euclidean(a, b).sqrt()
}
