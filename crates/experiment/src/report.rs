//! Serializable experiment outputs.

use std::collections::BTreeMap;

use serde::Serialize;
use vicinity_geom::{LabeledPoint, Point};
use vicinity_knn::Prediction;

use crate::error::ExperimentError;

/// One query classified against one generated training set.
#[derive(Debug, Clone, Serialize)]
pub struct SingleRun<L> {
    /// The generated training set.
    pub training: Vec<LabeledPoint<L>>,
    /// The query point.
    pub query: Point,
    /// KNN prediction for the query.
    pub prediction: Prediction<L>,
    /// Oracle label for the query.
    pub truth: L,
}

impl<L: PartialEq> SingleRun<L> {
    /// Returns `true` when the prediction matches the oracle.
    pub fn is_correct(&self) -> bool {
        *self.prediction.label() == self.truth
    }

    /// Iterates over the neighbor training points with their distances, nearest first.
    pub fn neighbor_points(&self) -> impl Iterator<Item = (&LabeledPoint<L>, f64)> + '_ {
        self.prediction
            .neighbors()
            .iter()
            .map(|n| (&self.training[n.index()], n.distance()))
    }
}

/// Accuracy summary over many queries.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    /// Size of the generated training set.
    pub n_training: usize,
    /// Neighbors consulted per query.
    pub k: usize,
    /// Queries classified so far.
    pub n_queries: usize,
    /// Queries whose prediction matched the oracle.
    pub n_correct: usize,
    /// `n_correct / n_queries`, or 0 before any query is recorded.
    pub accuracy: f64,
    /// truth label -> predicted label -> count
    pub confusion: BTreeMap<String, BTreeMap<String, usize>>,
}

impl ExperimentReport {
    pub(crate) fn new(n_training: usize, k: usize) -> Self {
        Self {
            n_training,
            k,
            n_queries: 0,
            n_correct: 0,
            accuracy: 0.0,
            confusion: BTreeMap::new(),
        }
    }

    /// Records one classified query.
    pub(crate) fn record(&mut self, truth: String, predicted: String) {
        self.n_queries += 1;
        if truth == predicted {
            self.n_correct += 1;
        }
        *self
            .confusion
            .entry(truth)
            .or_default()
            .entry(predicted)
            .or_default() += 1;
        self.accuracy = self.n_correct as f64 / self.n_queries as f64;
    }
}

/// Serialize an experiment report to a JSON string.
pub fn to_json(report: &ExperimentReport) -> Result<String, ExperimentError> {
    serde_json::to_string_pretty(report).map_err(|e| ExperimentError::Serialization {
        reason: e.to_string(),
    })
}
