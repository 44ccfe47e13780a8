//! Pure conversion functions: TOML config structs + CLI overrides -> crate API config types.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use vicinity_experiment::ExperimentConfig;
use vicinity_synth::{AxisRange, SynthConfig};

use crate::cli::CommonArgs;
use crate::config::{DataToml, VicinityConfig};

/// Builds a [`SynthConfig`] from the TOML data section, with an optional size override.
pub fn build_synth_config(data: &DataToml, n_override: Option<usize>) -> SynthConfig {
    SynthConfig::new(n_override.unwrap_or(data.n))
        .with_x_range(AxisRange::new(data.x_min, data.x_max))
        .with_y_range(AxisRange::new(data.y_min, data.y_max))
}

/// Builds and validates an [`ExperimentConfig`] from file settings and CLI overrides.
pub fn build_experiment_config(
    config: &VicinityConfig,
    common: &CommonArgs,
    queries_override: Option<usize>,
) -> Result<ExperimentConfig> {
    let synth = build_synth_config(&config.data, common.n);
    let mut exp = ExperimentConfig::new(synth)
        .with_n_queries(queries_override.unwrap_or(config.evaluate.n_queries));
    if let Some(k) = common.k.or(config.knn.k) {
        exp = exp.with_k(k);
    }
    exp.validate().context("invalid configuration")?;
    Ok(exp)
}

/// Creates the RNG: seeded when a seed is given (CLI wins over file), OS entropy otherwise.
pub fn build_rng(config: &VicinityConfig, seed_override: Option<u64>) -> StdRng {
    match seed_override.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
