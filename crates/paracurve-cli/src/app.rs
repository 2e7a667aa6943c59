//! Application entry point: generate, report, aggregate.

use std::io::{self, Write};

use anyhow::{Context, Result};
use paracurve_geometry::summarize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::generate::generate_curves;
use crate::report::{write_report, write_sum};

/// Run the application against stdout.
pub fn run(config: &RunConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(config, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Run the application, writing the report to `out`.
pub fn run_to<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding curve generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let shapes = generate_curves(&mut rng, &config.generator())?;
    write_report(out, &shapes, config.format).context("failed to write curve report")?;

    let summary = summarize(&shapes, config.workers)?;
    debug!(
        circles = summary.circles.len(),
        workers = config.workers,
        "summed circle radii"
    );
    info!(radius_sum = summary.radius_sum, "circle radius total");

    write_sum(out, summary.radius_sum, config.format).context("failed to write radius total")?;
    Ok(())
}
