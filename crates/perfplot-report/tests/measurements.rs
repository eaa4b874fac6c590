// File: crates/perfplot-report/tests/measurements.rs
// Purpose: Embedded measurement table parsing and the console summary.

use perfplot_report::measurements::{parse_measurements, summary_table};
use perfplot_report::load_measurements;

const HEADER: &str = "concurrency,total,success,failed,success_rate,duration_s,tps,avg_latency_ms,min_latency_ms,max_latency_ms,p95_latency_ms,p99_latency_ms";

#[test]
fn embedded_table_has_three_levels() {
    let rows = load_measurements().expect("embedded csv parses");
    let levels: Vec<u32> = rows.iter().map(|m| m.concurrency).collect();
    assert_eq!(levels, vec![50, 100, 200]);
    assert_eq!(rows[1].tps, 1498.76);
    assert_eq!(rows[2].p99_latency_ms, 485.16);
    assert!(rows.iter().all(|m| m.success + m.failed == m.total));
}

#[test]
fn inconsistent_counts_are_rejected() {
    let text = format!("{HEADER}\n50,100,90,5,90.0,1.0,100.0,1,1,1,1,1\n");
    let err = parse_measurements(&text).unwrap_err();
    assert!(err.to_string().contains("concurrency 50"), "{err}");
}

#[test]
fn malformed_rows_and_empty_tables_are_rejected() {
    let text = format!("{HEADER}\n50,not-a-number,90,10,90.0,1.0,100.0,1,1,1,1,1\n");
    assert!(parse_measurements(&text).is_err());
    assert!(parse_measurements(&format!("{HEADER}\n")).is_err());
}

#[test]
fn whitespace_around_fields_is_tolerated() {
    let text = format!("{HEADER}\n 10 , 4 , 4 , 0 , 100.0 , 1.0 , 4.0 , 1 , 1 , 1 , 1 , 1 \n");
    let rows = parse_measurements(&text).expect("trimmed fields parse");
    assert_eq!(rows[0].concurrency, 10);
}

#[test]
fn summary_lists_every_level() {
    let rows = load_measurements().unwrap();
    let table = summary_table(&rows);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 1 + rows.len());
    assert!(lines[0].contains("TPS"));
    assert!(lines[1].starts_with("50"));
    assert!(lines[1].contains("999.33"));
    assert!(lines[1].contains("150/30150"));
    assert!(lines[3].contains("99.41%"));
}
