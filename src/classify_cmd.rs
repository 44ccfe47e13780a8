//! Classify command: one training set, one query, one prediction.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vicinity_experiment::{SingleRun, run_single};
use vicinity_synth::{Color, CubicOracle};

use crate::cli::ClassifyArgs;
use crate::config;
use crate::convert;

/// Run a single classification and print it.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();

    let config = config::load(&args.common.config)?;
    let exp = convert::build_experiment_config(&config, &args.common, None)?;
    let mut rng = convert::build_rng(&config, args.common.seed);

    info!(n = exp.synth().n(), k = exp.k(), "classifying one query");
    let single = run_single(&exp, &CubicOracle, &mut rng).context("classification failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let json = serde_json::to_string_pretty(&single).context("failed to serialize run")?;
        writeln!(out, "{json}")?;
    } else {
        write_table(&mut out, &single)?;
    }
    Ok(())
}

/// Writes the human-readable report.
fn write_table(out: &mut impl Write, run: &SingleRun<Color>) -> io::Result<()> {
    let q = run.query;

    writeln!(out, "Training set ({} points):", run.training.len())?;
    writeln!(out, "{:>5} {:>10} {:>10} {:>6} {:>10}", "#", "x", "y", "label", "distance")?;
    for (i, lp) in run.training.iter().enumerate() {
        let p = lp.point();
        writeln!(
            out,
            "{:>5} {:>10.4} {:>10.4} {:>6} {:>10.4}",
            i,
            p.x(),
            p.y(),
            lp.label(),
            p.distance(&q)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Query: ({:.4}, {:.4})", q.x(), q.y())?;
    writeln!(out)?;
    writeln!(out, "Nearest {} neighbors:", run.prediction.neighbors().len())?;
    for (lp, d) in run.neighbor_points() {
        let p = lp.point();
        writeln!(
            out,
            "      {:>10.4} {:>10.4} {:>6} {:>10.4}",
            p.x(),
            p.y(),
            lp.label(),
            d
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Predicted: {} ({} of {} votes)",
        run.prediction.label(),
        run.prediction.votes(),
        run.prediction.neighbors().len()
    )?;
    writeln!(
        out,
        "Actual:    {} ({})",
        run.truth,
        if run.is_correct() { "correct" } else { "incorrect" }
    )?;
    Ok(())
}
