// File: crates/perfplot-report/src/measurements.rs
// Summary: Recorded load-test measurements (embedded CSV) and their console summary.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Benchmark results after connection-pool tuning and warm-up, one row per
/// concurrency level.
pub const MEASUREMENTS_CSV: &str = include_str!("../data/real_measurements.csv");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Measurement {
    pub concurrency: u32,
    pub total: u64,
    pub success: u64,
    pub failed: u64,
    /// Percent.
    pub success_rate: f64,
    pub duration_s: f64,
    pub tps: f64,
    pub avg_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub p99_latency_ms: f64,
}

/// Parse the measurement table, rejecting rows whose counts do not add up.
pub fn parse_measurements(csv_text: &str) -> Result<Vec<Measurement>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<Measurement>().enumerate() {
        let m = rec.with_context(|| format!("parsing measurement row {}", i + 1))?;
        if m.success + m.failed != m.total {
            bail!(
                "row {} (concurrency {}): success {} + failed {} != total {}",
                i + 1, m.concurrency, m.success, m.failed, m.total
            );
        }
        out.push(m);
    }
    if out.is_empty() {
        bail!("no measurements found");
    }
    debug!(rows = out.len(), "loaded measurements");
    Ok(out)
}

/// The embedded measurements.
pub fn load_measurements() -> Result<Vec<Measurement>> {
    parse_measurements(MEASUREMENTS_CSV)
}

/// Fixed-width summary table, one line per concurrency level.
pub fn summary_table(rows: &[Measurement]) -> String {
    let mut out = format!(
        "{:<12} {:>10} {:>14} {:>14} {:>13} {:>14}\n",
        "concurrency", "TPS", "avg latency", "p95 latency", "success rate", "failed/total"
    );
    for m in rows {
        out.push_str(&format!(
            "{:<12} {:>10.2} {:>12.2}ms {:>12.2}ms {:>12.2}% {:>14}\n",
            m.concurrency,
            m.tps,
            m.avg_latency_ms,
            m.p95_latency_ms,
            m.success_rate,
            format!("{}/{}", m.failed, m.total),
        ));
    }
    out
}
