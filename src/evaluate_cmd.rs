//! Evaluate command: score many random queries against the oracle.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vicinity_experiment::{run_experiment, to_json};
use vicinity_synth::CubicOracle;

use crate::cli::EvaluateArgs;
use crate::config;
use crate::convert;

/// Run the accuracy experiment and emit the JSON report.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    // 1. Load project TOML
    let config = config::load(&args.common.config)?;
    let exp = convert::build_experiment_config(&config, &args.common, args.queries)?;
    let mut rng = convert::build_rng(&config, args.common.seed);

    // 2. Run queries
    info!(
        n = exp.synth().n(),
        k = exp.k(),
        n_queries = exp.n_queries(),
        "running evaluation"
    );
    let report = run_experiment(&exp, &CubicOracle, &mut rng).context("evaluation failed")?;
    let json = to_json(&report).context("failed to serialize report")?;

    // 3. Emit report
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), accuracy = report.accuracy, "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
