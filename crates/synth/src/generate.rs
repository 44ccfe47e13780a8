//! Uniform point generation and labeled dataset construction.

use rand::Rng;
use tracing::debug;
use vicinity_geom::{LabeledPoint, Point};

use crate::config::{AxisRange, SynthConfig};
use crate::error::SynthError;
use crate::oracle::LabelOracle;

/// Draws points uniformly from a rectangle `[x.min, x.max) × [y.min, y.max)`.
///
/// The generator holds no randomness of its own; every draw consumes the
/// caller's RNG.
#[derive(Debug, Clone, Copy)]
pub struct PointGenerator {
    x_range: AxisRange,
    y_range: AxisRange,
}

impl PointGenerator {
    /// Creates a generator after validating both ranges.
    pub fn new(x_range: AxisRange, y_range: AxisRange) -> Result<Self, SynthError> {
        x_range.validate("x")?;
        y_range.validate("y")?;
        Ok(Self { x_range, y_range })
    }

    /// Creates a generator from the ranges of `config`.
    pub fn from_config(config: &SynthConfig) -> Result<Self, SynthError> {
        Self::new(config.x_range(), config.y_range())
    }

    /// Draws one point. `x` is drawn before `y`.
    pub fn generate(&self, rng: &mut impl Rng) -> Point {
        let x = rng.random_range(self.x_range.min()..self.x_range.max());
        let y = rng.random_range(self.y_range.min()..self.y_range.max());
        Point::new(x, y)
    }
}

/// Generates `config.n()` points and labels each with `oracle`.
///
/// # Errors
///
/// Returns [`SynthError`] if `config` fails validation.
pub fn generate_training_set<O: LabelOracle>(
    config: &SynthConfig,
    oracle: &O,
    rng: &mut impl Rng,
) -> Result<Vec<LabeledPoint<O::Label>>, SynthError> {
    config.validate()?;
    let generator = PointGenerator::from_config(config)?;

    let training: Vec<_> = (0..config.n())
        .map(|_| {
            let p = generator.generate(rng);
            LabeledPoint::new(p, oracle.label(p.x(), p.y()))
        })
        .collect();

    debug!(n = training.len(), "generated training set");
    Ok(training)
}

/// Generates `count` unlabeled query points from the ranges of `config`.
///
/// # Errors
///
/// Returns [`SynthError`] if either range in `config` is invalid.
pub fn generate_queries(
    config: &SynthConfig,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Point>, SynthError> {
    let generator = PointGenerator::from_config(config)?;
    Ok((0..count).map(|_| generator.generate(rng)).collect())
}
