//! End-to-end KNN experiments on synthetic data.
//!
//! Ties the workspace together: generate a labeled training set, classify
//! queries with KNN, and score the predictions against the oracle.
//!
//! ```
//! use vicinity_experiment::{ExperimentConfig, run_experiment};
//! use vicinity_synth::{CubicOracle, SynthConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = ExperimentConfig::new(SynthConfig::new(100)).with_n_queries(20);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let report = run_experiment(&config, &CubicOracle, &mut rng).unwrap();
//! assert_eq!(report.n_queries, 20);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod run;

pub use config::ExperimentConfig;
pub use error::ExperimentError;
pub use report::{ExperimentReport, SingleRun, to_json};
pub use run::{run_experiment, run_single};
