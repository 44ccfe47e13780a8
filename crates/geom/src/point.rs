//! Point types.

use serde::Serialize;

/// An immutable point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        crate::distance::euclidean(*self, *other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A training point: a [`Point`] paired with its ground-truth label.
///
/// Query-scoped data such as the distance to the current query is not stored
/// here; the KNN selector keeps it in a caller-owned buffer instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint<L> {
    point: Point,
    label: L,
}

impl<L> LabeledPoint<L> {
    /// Creates a labeled point.
    pub fn new(point: Point, label: L) -> Self {
        Self { point, label }
    }

    /// Returns the underlying point.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Returns the label.
    pub fn label(&self) -> &L {
        &self.label
    }
}
