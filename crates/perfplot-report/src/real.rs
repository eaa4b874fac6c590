// File: crates/perfplot-report/src/real.rs
// Summary: Figures built from the recorded benchmark measurements.

use std::path::Path;

use anyhow::Result;
use perfplot_core::{
    palette, render_grid, render_grouped_bar, render_line, ChartKind, ChartSpec, Dataset, Figure,
    GridSpec, LegendPosition, ReferenceLine, Series, ValueFormat, ValueLabels,
};

use crate::measurements::{summary_table, Measurement};
use crate::run::ReportRun;

pub const FIG_THROUGHPUT: &str = "fig6-2-real-throughput-curve.png";
pub const FIG_LATENCY: &str = "fig6-1-real-api-latency.png";
pub const FIG_SUCCESS_RATE: &str = "fig6-3-real-success-rate.png";
pub const FIG_SUMMARY: &str = "fig6-4-real-performance-summary.png";

/// Throughput the system was designed for.
pub const TARGET_TPS: f64 = 1000.0;

fn concurrency(rows: &[Measurement]) -> Vec<f64> {
    rows.iter().map(|m| m.concurrency as f64).collect()
}

fn column(rows: &[Measurement], f: impl Fn(&Measurement) -> f64) -> Vec<f64> {
    rows.iter().map(f).collect()
}

fn concurrency_labels(rows: &[Measurement]) -> Vec<String> {
    rows.iter().map(|m| m.concurrency.to_string()).collect()
}

pub fn throughput_curve(rows: &[Measurement], out: &Path) -> perfplot_core::Result<Figure> {
    let data = Dataset::numeric(&concurrency(rows))
        .with_series(Series::new("Measured TPS", column(rows, |m| m.tps)).with_color(palette::blue()));

    let spec = ChartSpec::line(out.join(FIG_THROUGHPUT))
        .title("System Throughput")
        .axes("Concurrency", "Throughput (TPS)")
        .reference_line(ReferenceLine::new(TARGET_TPS, "Design target (1000 TPS)", palette::green()))
        .value_labels(ValueLabels::new(ValueFormat::new(0, " TPS")).offset(50.0).font_size(10.0).boxed())
        .legend(LegendPosition::LowerRight)
        .size(10.0, 6.0);
    render_line(&data, &spec)
}

pub fn api_latency(rows: &[Measurement], out: &Path) -> perfplot_core::Result<Figure> {
    let scenarios = rows.iter().map(|m| format!("{} concurrent", m.concurrency));
    let data = Dataset::new(scenarios)
        .with_series(Series::new("Average latency", column(rows, |m| m.avg_latency_ms)).with_color(palette::blue()))
        .with_series(Series::new("P95 latency", column(rows, |m| m.p95_latency_ms)).with_color(palette::green()))
        .with_series(Series::new("P99 latency", column(rows, |m| m.p99_latency_ms)).with_color(palette::yellow()));

    let spec = ChartSpec::grouped_bar(out.join(FIG_LATENCY))
        .title("API Response Latency")
        .axes("Test scenario", "Latency (ms)")
        .bar_width(0.25)
        .value_labels(ValueLabels::new(ValueFormat::new(1, "ms")))
        .size(12.0, 6.0);
    render_grouped_bar(&data, &spec)
}

pub fn success_rate(rows: &[Measurement], out: &Path) -> perfplot_core::Result<Figure> {
    let colors = [palette::green(), palette::blue(), palette::yellow()];
    let data = Dataset::new(concurrency_labels(rows)).with_series(
        Series::new("", column(rows, |m| m.success_rate))
            .with_point_colors((0..rows.len()).map(|i| colors[i % colors.len()]).collect())
            .with_alpha(0.8),
    );

    let spec = ChartSpec::grouped_bar(out.join(FIG_SUCCESS_RATE))
        .title("Request Success Rate by Concurrency")
        .axes("Concurrency", "Success rate (%)")
        .y_range(94.0, 100.0)
        .reference_line(ReferenceLine::new(99.0, "Excellent threshold (99%)", palette::pure_green()).with_alpha(0.7))
        .reference_line(ReferenceLine::new(95.0, "Acceptable threshold (95%)", palette::orange()).with_alpha(0.5))
        .value_labels(
            ValueLabels::new(ValueFormat::new(2, "%"))
                .inside()
                .offset(-0.15)
                .font_size(11.0)
                .bold()
                .color(palette::dark_green()),
        )
        .legend(LegendPosition::LowerRight)
        .size(10.0, 6.0);
    render_grouped_bar(&data, &spec)
}

pub fn performance_summary(rows: &[Measurement], out: &Path) -> perfplot_core::Result<Figure> {
    let xs = concurrency(rows);
    let labels = concurrency_labels(rows);

    let tps = Dataset::numeric(&xs).with_series(Series::new("", column(rows, |m| m.tps)).with_color(palette::blue()));
    let tps_spec = ChartSpec::panel(ChartKind::Line)
        .title("Throughput (TPS)")
        .title_size(12.0)
        .axes("Concurrency", "TPS")
        .reference_line(ReferenceLine::new(TARGET_TPS, "Design target", palette::pure_green()).with_alpha(0.5))
        .legend(LegendPosition::LowerRight);

    let avg = Dataset::new(labels.clone())
        .with_series(Series::new("", column(rows, |m| m.avg_latency_ms)).with_color(palette::green()).with_alpha(0.8));
    let avg_spec = ChartSpec::panel(ChartKind::GroupedBar)
        .title("Average Response Latency")
        .title_size(12.0)
        .axes("Concurrency", "Latency (ms)")
        .reference_line(ReferenceLine::new(100.0, "Target threshold", palette::orange()).with_alpha(0.5));

    let success = Dataset::new(labels.clone())
        .with_series(Series::new("", column(rows, |m| m.success_rate)).with_color(palette::yellow()).with_alpha(0.8));
    let success_spec = ChartSpec::panel(ChartKind::GroupedBar)
        .title("Request Success Rate")
        .title_size(12.0)
        .axes("Concurrency", "Success rate (%)")
        .y_range(98.0, 100.0)
        .reference_line(ReferenceLine::new(99.0, "Excellent threshold", palette::pure_green()).with_alpha(0.5))
        .legend(LegendPosition::LowerLeft);

    let p99 = Dataset::new(labels)
        .with_series(Series::new("", column(rows, |m| m.p99_latency_ms)).with_color(palette::red()).with_alpha(0.8));
    let p99_spec = ChartSpec::panel(ChartKind::GroupedBar)
        .title("P99 Latency")
        .title_size(12.0)
        .axes("Concurrency", "Latency (ms)");

    let grid = GridSpec::new(2, 2, out.join(FIG_SUMMARY))
        .title("Performance Test Summary")
        .size(14.0, 10.0)
        .panel(tps, tps_spec)
        .panel(avg, avg_spec)
        .panel(success, success_spec)
        .panel(p99, p99_spec);
    render_grid(&grid)
}

/// Render and write every measurement figure, then print the data summary.
pub fn generate_all(run: &mut ReportRun, rows: &[Measurement]) -> Result<()> {
    let dir = run.dir().to_path_buf();
    run.emit(FIG_THROUGHPUT, throughput_curve(rows, &dir))?;
    run.emit(FIG_LATENCY, api_latency(rows, &dir))?;
    run.emit(FIG_SUCCESS_RATE, success_rate(rows, &dir))?;
    run.emit(FIG_SUMMARY, performance_summary(rows, &dir))?;
    Ok(())
}

/// Console summary of the recorded measurements.
pub fn print_summary(rows: &[Measurement]) {
    println!();
    println!("Recorded measurement summary:");
    println!("------------------------------------------------------------");
    print!("{}", summary_table(rows));
}
