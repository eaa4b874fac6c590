// File: crates/perfplot-report/src/bin/mock_charts.rs
// Summary: Renders the illustrative performance-chapter figures from fabricated numbers.

use anyhow::Result;
use perfplot_report::{logging, mock, ReportRun, OUTPUT_DIR};

fn main() -> Result<()> {
    logging::init_tracing();

    let mut run = ReportRun::start("Generating performance test charts", OUTPUT_DIR)?;
    mock::generate_all(&mut run)?;
    run.finish("illustrative");
    Ok(())
}
