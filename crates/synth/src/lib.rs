//! Synthetic labeled 2-D datasets.
//!
//! Points are drawn uniformly from a rectangle with a caller-supplied RNG and
//! labeled by a [`LabelOracle`]. The default [`CubicOracle`] colours a point
//! red when it lies on or below `y = x³ - x` and blue otherwise.
//!
//! # Quick start
//!
//! ```
//! use vicinity_synth::{CubicOracle, SynthConfig, generate_training_set};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SynthConfig::new(20);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let training = generate_training_set(&config, &CubicOracle, &mut rng).unwrap();
//! assert_eq!(training.len(), 20);
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod oracle;

pub use config::{AxisRange, SynthConfig};
pub use error::SynthError;
pub use generate::{PointGenerator, generate_queries, generate_training_set};
pub use oracle::{Color, CubicOracle, LabelOracle};
