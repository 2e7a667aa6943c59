//! Run configuration from CLI flags and environment.
//!
//! Every flag is optional; a bare `paracurve` invocation draws ten curves
//! from an entropy seed and sums circle radii on four workers.

use clap::Parser;
use paracurve_core::{CurveError, Result};
use paracurve_geometry::DEFAULT_WORKERS;

use crate::generate::{GeneratorConfig, DEFAULT_COUNT};
use crate::report::ReportFormat;

/// Sample random parametric curves and sum their circle radii.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "paracurve", version, about)]
pub struct RunConfig {
    /// Number of curves to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for the random generator (drawn from entropy when omitted).
    #[arg(short, long, env = "PARACURVE_SEED")]
    pub seed: Option<u64>,

    /// Worker threads used to sum circle radii.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl RunConfig {
    /// Parse CLI arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig::with_count(self.count)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CurveError::InvalidConfig(
                "--workers must be at least 1".into(),
            ));
        }
        self.generator().validate()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            workers: DEFAULT_WORKERS,
            format: ReportFormat::Text,
        }
    }
}
