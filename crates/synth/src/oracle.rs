//! Ground-truth labelling of synthetic points.

use std::fmt;

use serde::Serialize;

/// Label produced by the default [`CubicOracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// On or below the boundary.
    Red,
    /// Strictly above the boundary.
    Blue,
}

impl Color {
    /// Returns the lowercase name used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Assigns the ground-truth label to a point.
///
/// Implementations must be pure: the same `(x, y)` always yields the same label.
pub trait LabelOracle {
    /// Label type produced by this oracle.
    type Label: Clone + PartialEq;

    /// Returns the label for the point `(x, y)`.
    fn label(&self, x: f64, y: f64) -> Self::Label;
}

/// Cubic decision boundary `f(x) = x³ - x`.
///
/// A point is [`Color::Red`] when `f(x) >= y` and [`Color::Blue`] otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicOracle;

impl CubicOracle {
    /// Evaluates the boundary `x³ - x`.
    #[inline]
    pub fn boundary(x: f64) -> f64 {
        x * x * x - x
    }
}

impl LabelOracle for CubicOracle {
    type Label = Color;

    fn label(&self, x: f64, y: f64) -> Color {
        if Self::boundary(x) >= y {
            Color::Red
        } else {
            Color::Blue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_boundary_values() {
        assert_abs_diff_eq!(CubicOracle::boundary(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicOracle::boundary(1.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicOracle::boundary(-1.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicOracle::boundary(2.0), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicOracle::boundary(-2.0), -6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(CubicOracle::boundary(0.5), -0.375, epsilon = 1e-12);
    }

    #[test]
    fn test_labels_either_side() {
        let oracle = CubicOracle;
        // f(2) = 6
        assert_eq!(oracle.label(2.0, 5.9), Color::Red);
        assert_eq!(oracle.label(2.0, 6.1), Color::Blue);
        // f(0.5) = -0.375
        assert_eq!(oracle.label(0.5, -0.5), Color::Red);
        assert_eq!(oracle.label(0.5, 0.0), Color::Blue);
    }

    #[test]
    fn test_on_boundary_is_red() {
        let oracle = CubicOracle;
        assert_eq!(oracle.label(0.0, 0.0), Color::Red);
        assert_eq!(oracle.label(1.0, 0.0), Color::Red);
        assert_eq!(oracle.label(2.0, 6.0), Color::Red);
    }

    #[test]
    fn test_deterministic() {
        let oracle = CubicOracle;
        for i in -20..=20 {
            for j in -20..=20 {
                let (x, y) = (i as f64 * 0.1, j as f64 * 0.3);
                assert_eq!(oracle.label(x, y), oracle.label(x, y));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Red.to_string(), "red");
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(format!("{:>5}", Color::Red), "  red");
    }
}
