// File: crates/perfplot-report/src/bin/real_charts.rs
// Summary: Renders figures from the recorded benchmark measurements and prints their summary.

use anyhow::{Context, Result};
use perfplot_report::{load_measurements, logging, real, ReportRun, OUTPUT_DIR};

fn main() -> Result<()> {
    logging::init_tracing();

    let rows = load_measurements().context("loading recorded measurements")?;

    let mut run = ReportRun::start("Generating charts from recorded test data", OUTPUT_DIR)?;
    real::generate_all(&mut run, &rows)?;
    run.finish("measurement");

    real::print_summary(&rows);
    Ok(())
}
