//! K-nearest-neighbor classification over planar points.
//!
//! A query is classified in two steps:
//!
//! | Step | Rule |
//! |------|------|
//! | Select | single pass over the training set keeping a sorted buffer of the k nearest; ties keep scan order |
//! | Vote | most frequent label among the k; a tie goes to the label that reached the count first |
//!
//! # Quick start
//!
//! ```
//! use vicinity_geom::{LabeledPoint, Point};
//! use vicinity_knn::{KnnConfig, classify};
//!
//! let training = vec![
//!     LabeledPoint::new(Point::new(-2.0, 0.0), "blue"),
//!     LabeledPoint::new(Point::new(0.0, 0.0), "red"),
//!     LabeledPoint::new(Point::new(2.0, 0.0), "blue"),
//! ];
//! let prediction = classify(&training, Point::new(0.1, 0.0), &KnnConfig::new(2)).unwrap();
//! assert_eq!(*prediction.label(), "red");
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate inputs
//!   ├─ select_k_nearest()   (select.rs)
//!   └─ majority_vote()      (vote.rs)
//! ```
//!
//! Distances are written to a caller-owned [`KnnScratch`], never to the
//! training points. For loops over many queries use
//! [`classify_with_scratch`] with a reusable scratch.

pub mod config;
pub mod error;
pub mod knn;
pub mod result;
pub mod select;
pub mod vote;

pub use config::KnnConfig;
pub use error::KnnError;
pub use knn::{KnnScratch, classify, classify_with_scratch, nearest_neighbors};
pub use result::{Neighbor, Prediction};
pub use select::select_k_nearest;
pub use vote::majority_vote;

/// Square-root heuristic for k.
///
/// Returns `floor(sqrt(n_training))`, clamped to `1..=n_training - 1` so the
/// result is a valid k whenever `n_training >= 2`.
pub fn k_sqrt(n_training: usize) -> usize {
    let k = (n_training as f64).sqrt().floor() as usize;
    k.clamp(1, n_training.saturating_sub(1).max(1))
}
