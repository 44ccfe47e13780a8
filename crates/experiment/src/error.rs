//! Experiment error types.

use vicinity_knn::KnnError;
use vicinity_synth::SynthError;

/// Errors that can occur while running an experiment.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// Dataset generation failed.
    #[error("data generation failed: {0}")]
    Synth(#[from] SynthError),

    /// Classification failed.
    #[error("classification failed: {0}")]
    Knn(#[from] KnnError),

    /// The number of evaluation queries was zero.
    #[error("n_queries must be >= 1, got {n_queries}")]
    InvalidQueries { n_queries: usize },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
