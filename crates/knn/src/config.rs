//! Configuration for KNN classification queries.

use crate::error::KnnError;

/// Configuration for a KNN classification query.
///
/// # Example
///
/// ```
/// use vicinity_knn::KnnConfig;
///
/// let config = KnnConfig::new(3);
///
/// assert!(config.validate(10).is_ok());
/// assert!(config.validate(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Validates this configuration against a training set of `n` points.
    ///
    /// Returns [`KnnError::InvalidK`] unless `1 <= k < n`.
    pub fn validate(&self, n: usize) -> Result<(), KnnError> {
        if self.k < 1 || self.k >= n {
            return Err(KnnError::InvalidK { k: self.k, n });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
