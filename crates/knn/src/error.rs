//! Error types for the vicinity-knn crate.

/// Error type for all fallible operations in the vicinity-knn crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training set is empty.
    #[error("no training points provided")]
    EmptyTrainingSet,

    /// Returned when k is outside `1..n`.
    #[error("k must satisfy 1 <= k < n, got k = {k}, n = {n}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of training points.
        n: usize,
    },

    /// Returned when a vote is requested over zero neighbors.
    #[error("cannot vote over an empty neighbor set")]
    EmptyNeighborSet,

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_training_set() {
        let e = KnnError::EmptyTrainingSet;
        assert_eq!(e.to_string(), "no training points provided");
    }

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 5, n: 5 };
        assert_eq!(e.to_string(), "k must satisfy 1 <= k < n, got k = 5, n = 5");
    }

    #[test]
    fn error_empty_neighbor_set() {
        let e = KnnError::EmptyNeighborSet;
        assert_eq!(e.to_string(), "cannot vote over an empty neighbor set");
    }

    #[test]
    fn error_non_finite_input() {
        let e = KnnError::NonFiniteInput { input: "query" };
        assert_eq!(e.to_string(), "non-finite value in query");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
