//! Output types for KNN classification queries.

use serde::Serialize;

/// One entry of a neighbor set: a training-set index and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Position of the point in the training set.
    index: usize,
    /// Euclidean distance to the query.
    distance: f64,
}

impl Neighbor {
    /// Creates a neighbor entry.
    pub fn new(index: usize, distance: f64) -> Self {
        Self { index, distance }
    }

    /// Returns the training-set index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the distance to the query.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Result of a KNN classification query.
///
/// Holds the winning label, the number of neighbors that voted for it, and
/// the neighbor set sorted by ascending distance (ties in scan order).
#[derive(Debug, Clone, Serialize)]
pub struct Prediction<L> {
    label: L,
    votes: usize,
    neighbors: Vec<Neighbor>,
}

impl<L> Prediction<L> {
    pub(crate) fn new(label: L, votes: usize, neighbors: Vec<Neighbor>) -> Self {
        Self {
            label,
            votes,
            neighbors,
        }
    }

    /// Returns the predicted label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Returns how many neighbors voted for the predicted label.
    pub fn votes(&self) -> usize {
        self.votes
    }

    /// Returns the neighbor set.
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    /// Returns the training-set indices of the neighbors, nearest first.
    pub fn neighbor_indices(&self) -> Vec<usize> {
        self.neighbors.iter().map(Neighbor::index).collect()
    }
}
