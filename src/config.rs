use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::DEFAULT_CONFIG;

/// Top-level Vicinity configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct VicinityConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Synthetic data settings.
    #[serde(default)]
    pub data: DataToml,

    /// Classifier settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Evaluate settings.
    #[serde(default)]
    pub evaluate: EvaluateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    #[serde(default = "default_x_max")]
    pub x_max: f64,
    #[serde(default = "default_y_min")]
    pub y_min: f64,
    #[serde(default = "default_y_max")]
    pub y_max: f64,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            n: default_n(),
            x_min: default_x_min(),
            x_max: default_x_max(),
            y_min: default_y_min(),
            y_max: default_y_max(),
        }
    }
}

fn default_n() -> usize {
    50
}
fn default_x_min() -> f64 {
    -2.0
}
fn default_x_max() -> f64 {
    2.0
}
fn default_y_min() -> f64 {
    -3.0
}
fn default_y_max() -> f64 {
    3.0
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    /// Neighbors per vote; unset means floor(sqrt(n)).
    #[serde(default)]
    pub k: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateToml {
    #[serde(default = "default_n_queries")]
    pub n_queries: usize,
}

impl Default for EvaluateToml {
    fn default() -> Self {
        Self {
            n_queries: default_n_queries(),
        }
    }
}

fn default_n_queries() -> usize {
    100
}

/// Reads and parses the configuration at `path`.
///
/// A missing file is only tolerated at the default path, where it yields
/// the built-in defaults.
pub fn load(path: &Path) -> Result<VicinityConfig> {
    if !path.exists() && path == Path::new(DEFAULT_CONFIG) {
        return Ok(VicinityConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
