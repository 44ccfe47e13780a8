//! KNN classification entry point and scratch buffer management.

use tracing::debug;
use vicinity_geom::{LabeledPoint, Point};

use crate::config::KnnConfig;
use crate::error::KnnError;
use crate::result::{Neighbor, Prediction};
use crate::select::select_k_nearest;
use crate::vote::majority_vote;

/// Pre-allocated scratch buffers for KNN classification.
///
/// Holds the query-scoped distance of every training point, so the training
/// set itself is never written to. Reuse across calls to
/// [`classify_with_scratch`] to avoid per-query allocation. Concurrent
/// queries over the same training set need one scratch each.
///
/// # Example
///
/// ```
/// use vicinity_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200, 5);
/// // Use with classify_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Distance of each training point to the last query, by training index.
    pub(crate) distances: Vec<f64>,
    /// Bounded sorted neighbor buffer.
    pub(crate) neighbors: Vec<Neighbor>,
}

impl KnnScratch {
    /// Creates a scratch buffer sized for `max_training` points and `k` neighbors.
    pub fn new(max_training: usize, k: usize) -> Self {
        Self {
            distances: Vec::with_capacity(max_training),
            neighbors: Vec::with_capacity(k),
        }
    }

    /// Distances computed by the most recent query, indexed by training position.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }
}

/// Validates all inputs.
fn validate_inputs<L>(
    training: &[LabeledPoint<L>],
    query: Point,
    config: &KnnConfig,
) -> Result<(), KnnError> {
    if training.is_empty() {
        return Err(KnnError::EmptyTrainingSet);
    }
    config.validate(training.len())?;

    if !query.is_finite() {
        return Err(KnnError::NonFiniteInput { input: "query" });
    }
    if training.iter().any(|lp| !lp.point().is_finite()) {
        return Err(KnnError::NonFiniteInput { input: "training" });
    }
    Ok(())
}

/// Internal implementation that assumes all inputs are validated.
fn classify_inner<L: PartialEq + Clone>(
    training: &[LabeledPoint<L>],
    query: Point,
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Prediction<L>, KnnError> {
    select_k_nearest(
        training,
        query,
        config.k(),
        &mut scratch.distances,
        &mut scratch.neighbors,
    );

    let (label, votes) = majority_vote(
        scratch
            .neighbors
            .iter()
            .map(|n| training[n.index()].label()),
    )?;

    debug!(
        k = config.k(),
        votes,
        nearest = ?scratch.neighbors.first().map(Neighbor::distance),
        "classified query"
    );

    Ok(Prediction::new(label, votes, scratch.neighbors.clone()))
}

/// Classifies `query` by majority vote among its k nearest training points.
///
/// This is the simple entry point. For loops over many queries, use
/// [`classify_with_scratch`] to reuse allocations.
///
/// # Errors
///
/// Returns [`KnnError`] if the training set is empty, `k` is not in `1..n`,
/// or the query or any training point is non-finite.
pub fn classify<L: PartialEq + Clone>(
    training: &[LabeledPoint<L>],
    query: Point,
    config: &KnnConfig,
) -> Result<Prediction<L>, KnnError> {
    validate_inputs(training, query, config)?;
    let mut scratch = KnnScratch::new(training.len(), config.k());
    classify_inner(training, query, config, &mut scratch)
}

/// Classifies `query`, reusing pre-allocated scratch buffers.
///
/// Identical to [`classify`] but reuses `scratch`. Buffers grow as needed and
/// never shrink.
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid.
pub fn classify_with_scratch<L: PartialEq + Clone>(
    training: &[LabeledPoint<L>],
    query: Point,
    config: &KnnConfig,
    scratch: &mut KnnScratch,
) -> Result<Prediction<L>, KnnError> {
    validate_inputs(training, query, config)?;
    classify_inner(training, query, config, scratch)
}

/// Returns the k nearest neighbors of `query`, sorted by ascending distance.
///
/// # Errors
///
/// Same validation as [`classify`].
pub fn nearest_neighbors<L>(
    training: &[LabeledPoint<L>],
    query: Point,
    config: &KnnConfig,
) -> Result<Vec<Neighbor>, KnnError> {
    validate_inputs(training, query, config)?;
    let mut distances = Vec::with_capacity(training.len());
    let mut neighbors = Vec::with_capacity(config.k());
    select_k_nearest(training, query, config.k(), &mut distances, &mut neighbors);
    Ok(neighbors)
}
