//! Configuration for synthetic dataset generation.

use serde::Serialize;

use crate::error::SynthError;

/// A half-open coordinate interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Creates a range without validating it. See [`AxisRange::validate`].
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `v` lies inside `[min, max)`.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }

    /// Checks that both bounds and the span `max - min` are finite and
    /// `min < max`.
    ///
    /// `axis` names the range in the returned error.
    pub fn validate(&self, axis: &'static str) -> Result<(), SynthError> {
        if !self.min.is_finite()
            || !self.max.is_finite()
            || !(self.max - self.min).is_finite()
            || self.min >= self.max
        {
            return Err(SynthError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Configuration for a synthetic labeled dataset.
///
/// # Example
///
/// ```
/// use vicinity_synth::{AxisRange, SynthConfig};
///
/// let config = SynthConfig::new(40)
///     .with_x_range(AxisRange::new(-1.5, 1.5))
///     .with_y_range(AxisRange::new(-2.0, 2.0));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SynthConfig {
    /// Number of training points.
    n: usize,
    /// Range for x coordinates.
    x_range: AxisRange,
    /// Range for y coordinates.
    y_range: AxisRange,
}

impl SynthConfig {
    /// Creates a configuration for `n` training points.
    ///
    /// Defaults: `x_range = [-2, 2)`, `y_range = [-3, 3)`, which frames the
    /// interesting part of the cubic decision boundary.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            x_range: AxisRange::new(-2.0, 2.0),
            y_range: AxisRange::new(-3.0, 3.0),
        }
    }

    /// Sets the x coordinate range.
    pub fn with_x_range(mut self, range: AxisRange) -> Self {
        self.x_range = range;
        self
    }

    /// Sets the y coordinate range.
    pub fn with_y_range(mut self, range: AxisRange) -> Self {
        self.y_range = range;
        self
    }

    /// Returns the number of training points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the x coordinate range.
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// Returns the y coordinate range.
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Validates this configuration.
    ///
    /// Returns an error if n < 1 or either range is invalid. The x range is
    /// checked before the y range.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.n < 1 {
            return Err(SynthError::InvalidN { n: self.n });
        }
        self.x_range.validate("x")?;
        self.y_range.validate("y")?;
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new(50)
    }
}
