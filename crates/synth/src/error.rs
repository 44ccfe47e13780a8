//! Error types for the vicinity-synth crate.

/// Error type for all fallible operations in the vicinity-synth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    /// Returned when a coordinate range is empty, inverted, or non-finite.
    #[error("invalid {axis} range: min {min} must be finite and less than max {max}")]
    InvalidRange {
        /// Axis name (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Returned when the requested number of training points is zero.
    #[error("n must be >= 1, got {n}")]
    InvalidN {
        /// The invalid n value.
        n: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_range() {
        let e = SynthError::InvalidRange {
            axis: "x",
            min: 1.0,
            max: -1.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid x range: min 1 must be finite and less than max -1"
        );
    }

    #[test]
    fn error_invalid_n() {
        let e = SynthError::InvalidN { n: 0 };
        assert_eq!(e.to_string(), "n must be >= 1, got 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SynthError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SynthError>();
    }
}
