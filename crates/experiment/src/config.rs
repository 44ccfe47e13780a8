//! Experiment configuration.

use vicinity_knn::{KnnConfig, k_sqrt};
use vicinity_synth::SynthConfig;

use crate::error::ExperimentError;

/// Configuration for an experiment run.
///
/// # Example
///
/// ```
/// use vicinity_experiment::ExperimentConfig;
/// use vicinity_synth::SynthConfig;
///
/// let config = ExperimentConfig::new(SynthConfig::new(64)).with_n_queries(10);
/// assert_eq!(config.k(), 8); // floor(sqrt(64))
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Dataset settings.
    synth: SynthConfig,
    /// Explicit k; `None` uses [`k_sqrt`] of the training size.
    k: Option<usize>,
    /// Number of queries classified by [`run_experiment`](crate::run_experiment).
    n_queries: usize,
}

impl ExperimentConfig {
    /// Creates a configuration for the given dataset.
    ///
    /// Defaults: `k = None` (square-root heuristic), `n_queries = 100`.
    pub fn new(synth: SynthConfig) -> Self {
        Self {
            synth,
            k: None,
            n_queries: 100,
        }
    }

    /// Sets an explicit k.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the number of evaluation queries.
    pub fn with_n_queries(mut self, n_queries: usize) -> Self {
        self.n_queries = n_queries;
        self
    }

    /// Returns the dataset settings.
    pub fn synth(&self) -> &SynthConfig {
        &self.synth
    }

    /// Returns the effective k.
    pub fn k(&self) -> usize {
        self.k.unwrap_or_else(|| k_sqrt(self.synth.n()))
    }

    /// Returns the number of evaluation queries.
    pub fn n_queries(&self) -> usize {
        self.n_queries
    }

    /// Returns the KNN configuration for this experiment.
    pub fn knn(&self) -> KnnConfig {
        KnnConfig::new(self.k())
    }

    /// Validates dataset settings, then k against the training size, then
    /// the query count.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.synth.validate()?;
        self.knn().validate(self.synth.n())?;
        if self.n_queries < 1 {
            return Err(ExperimentError::InvalidQueries {
                n_queries: self.n_queries,
            });
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}
