//! paracurve: sample random parametric curves and sum their circle radii.

use anyhow::Result;
use paracurve_cli::{app, config, logging};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::env_filter())
        .init();

    let config = config::RunConfig::parse();
    app::run(&config)
}
