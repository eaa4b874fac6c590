// File: crates/perfplot-report/src/lib.rs
// Summary: Shared pieces of the report binaries: output run, logging, figure catalogues, measurements.

pub mod logging;
pub mod measurements;
pub mod mock;
pub mod real;
pub mod run;

pub use measurements::{load_measurements, Measurement};
pub use run::{ReportRun, OUTPUT_DIR};
