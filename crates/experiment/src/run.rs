//! Experiment drivers: generate data, classify, compare with the oracle.

use std::fmt::Display;

use rand::Rng;
use tracing::{debug, info};
use vicinity_knn::{KnnScratch, classify, classify_with_scratch};
use vicinity_synth::{LabelOracle, PointGenerator, generate_queries, generate_training_set};

use crate::config::ExperimentConfig;
use crate::error::ExperimentError;
use crate::report::{ExperimentReport, SingleRun};

/// Generates a training set and one query, then classifies the query.
///
/// The training set is drawn before the query, both from `rng`.
///
/// # Errors
///
/// Returns [`ExperimentError`] if the configuration is invalid.
#[tracing::instrument(skip_all, fields(n = config.synth().n(), k = config.k()))]
pub fn run_single<O: LabelOracle>(
    config: &ExperimentConfig,
    oracle: &O,
    rng: &mut impl Rng,
) -> Result<SingleRun<O::Label>, ExperimentError> {
    config.validate()?;

    let training = generate_training_set(config.synth(), oracle, rng)?;
    let query = PointGenerator::from_config(config.synth())?.generate(rng);
    let truth = oracle.label(query.x(), query.y());

    let prediction = classify(&training, query, &config.knn())?;
    debug!(votes = prediction.votes(), "single query classified");

    Ok(SingleRun {
        training,
        query,
        prediction,
        truth,
    })
}

/// Generates one training set and scores `config.n_queries()` queries against it.
///
/// A single scratch buffer is reused for every query.
///
/// # Errors
///
/// Returns [`ExperimentError`] if the configuration is invalid.
#[tracing::instrument(skip_all, fields(n = config.synth().n(), k = config.k(), n_queries = config.n_queries()))]
pub fn run_experiment<O>(
    config: &ExperimentConfig,
    oracle: &O,
    rng: &mut impl Rng,
) -> Result<ExperimentReport, ExperimentError>
where
    O: LabelOracle,
    O::Label: Display,
{
    config.validate()?;

    let training = generate_training_set(config.synth(), oracle, rng)?;
    let queries = generate_queries(config.synth(), config.n_queries(), rng)?;
    let knn = config.knn();

    let mut scratch = KnnScratch::new(training.len(), knn.k());
    let mut report = ExperimentReport::new(training.len(), knn.k());

    for query in queries {
        let prediction = classify_with_scratch(&training, query, &knn, &mut scratch)?;
        let truth = oracle.label(query.x(), query.y());
        report.record(truth.to_string(), prediction.label().to_string());
    }

    info!(
        n_correct = report.n_correct,
        accuracy = report.accuracy,
        "experiment complete"
    );
    Ok(report)
}
