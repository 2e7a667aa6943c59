//! paracurve command-line application: generation, reporting, and aggregation.

pub mod app;
pub mod config;
pub mod generate;
pub mod logging;
pub mod report;
