// File: crates/perfplot-report/src/mock.rs
// Summary: Illustrative figures for the performance chapter, built from fabricated numbers.

use std::path::Path;

use anyhow::Result;
use perfplot_core::{
    palette, render_grid, render_grouped_bar, render_line, Annotation, ChartKind, ChartSpec, Dataset,
    Figure, GridSpec, LegendPosition, ReferenceLine, Series, ValueFormat, ValueLabels,
};

use crate::run::ReportRun;

pub const FIG_API_RESPONSE: &str = "fig6-1-api-response-time.png";
pub const FIG_THROUGHPUT: &str = "fig6-2-throughput-curve.png";
pub const FIG_RESOURCE_USAGE: &str = "fig6-3-resource-usage.png";
pub const FIG_STRESS_TEST: &str = "fig6-4-stress-test.png";
pub const FIG_DELIVERY_RATE: &str = "fig6-5-delivery-rate.png";
pub const FIG_PRIORITY_QUEUE: &str = "fig6-6-priority-queue.png";

pub fn api_response_time(out: &Path) -> perfplot_core::Result<Figure> {
    let data = Dataset::new([
        "/msg/send_msg",
        "/msg/get_msg_record",
        "/msg/list_msg_records",
        "/user/list",
        "/scheduled/create",
    ])
    .with_series(Series::new("Average", [45.0, 32.0, 68.0, 28.0, 52.0]).with_color(palette::blue()))
    .with_series(Series::new("P95", [78.0, 55.0, 110.0, 48.0, 88.0]).with_color(palette::green()))
    .with_series(Series::new("P99", [120.0, 85.0, 180.0, 72.0, 135.0]).with_color(palette::yellow()));

    let spec = ChartSpec::grouped_bar(out.join(FIG_API_RESPONSE))
        .title("API Response Time")
        .axes("API endpoint", "Response time (ms)")
        .bar_width(0.25)
        .x_tick_rotation(15.0)
        .value_labels(ValueLabels::new(ValueFormat::new(0, "ms")))
        .size(12.0, 6.0);
    render_grouped_bar(&data, &spec)
}

pub fn throughput_curve(out: &Path) -> perfplot_core::Result<Figure> {
    let data = Dataset::numeric(&[50.0, 100.0, 200.0, 500.0, 1000.0])
        .with_series(Series::new("System throughput", [520.0, 980.0, 1250.0, 1450.0, 1520.0]).with_color(palette::blue()));

    let spec = ChartSpec::line(out.join(FIG_THROUGHPUT))
        .title("System Throughput")
        .axes("Concurrency", "Throughput (TPS)")
        .reference_line(ReferenceLine::new(1000.0, "Design target (1000 TPS)", palette::red()))
        .value_labels(ValueLabels::new(ValueFormat::new(0, " TPS")).offset(30.0).font_size(10.0).boxed())
        .legend(LegendPosition::LowerRight)
        .size(10.0, 6.0);
    render_line(&data, &spec)
}

pub fn resource_usage(out: &Path) -> perfplot_core::Result<Figure> {
    let data = Dataset::new(["API service", "Message consumer", "MySQL", "Redis", "Kafka"])
        .with_series(Series::new("Idle", [5.0, 8.0, 3.0, 2.0, 4.0]).with_color(palette::green()))
        .with_series(Series::new("Low load (50 concurrent)", [15.0, 25.0, 8.0, 5.0, 10.0]).with_color(palette::blue()))
        .with_series(Series::new("Medium load (100 concurrent)", [28.0, 42.0, 15.0, 10.0, 18.0]).with_color(palette::yellow()))
        .with_series(Series::new("High load (200 concurrent)", [45.0, 68.0, 25.0, 18.0, 30.0]).with_color(palette::red()));

    let spec = ChartSpec::grouped_bar(out.join(FIG_RESOURCE_USAGE))
        .title("System Resource Usage")
        .axes("Component", "CPU usage (%)")
        .bar_width(0.2)
        .legend(LegendPosition::UpperRight)
        .size(12.0, 6.0);
    render_grouped_bar(&data, &spec)
}

pub fn stress_test(out: &Path) -> perfplot_core::Result<Figure> {
    let concurrency = [1000.0, 1500.0, 2000.0, 2500.0];

    let tps = Dataset::numeric(&concurrency)
        .with_series(Series::new("TPS", [1520.0, 1580.0, 1620.0, 1450.0]).with_color(palette::blue()));
    let tps_spec = ChartSpec::panel(ChartKind::Line)
        .title("TPS Under Extreme Concurrency")
        .title_size(13.0)
        .axes("Concurrency", "Throughput (TPS)")
        .value_labels(ValueLabels::new(ValueFormat::new(0, "")).offset(20.0).font_size(10.0))
        .legend(LegendPosition::LowerLeft);

    let errors = Dataset::numeric(&concurrency).with_series(
        Series::new("", [3.5, 5.8, 12.5, 25.3])
            .with_point_colors(vec![palette::green(), palette::yellow(), palette::red(), palette::crimson()])
            .with_alpha(0.8),
    );
    let errors_spec = ChartSpec::panel(ChartKind::GroupedBar)
        .title("Error Rate Under Extreme Concurrency")
        .title_size(13.0)
        .axes("Concurrency", "Error rate (%)")
        .reference_line(ReferenceLine::new(5.0, "Acceptable threshold (5%)", palette::pure_red()))
        .value_labels(ValueLabels::new(ValueFormat::new(1, "%")).font_size(10.0));

    let grid = GridSpec::new(1, 2, out.join(FIG_STRESS_TEST))
        .size(14.0, 5.0)
        .panel(tps, tps_spec)
        .panel(errors, errors_spec);
    render_grid(&grid)
}

pub fn delivery_rate(out: &Path) -> perfplot_core::Result<Figure> {
    let channels = ["Email", "SMS", "Lark"];
    let colors = vec![palette::blue(), palette::green(), palette::yellow()];

    let volume = Dataset::new(channels)
        .with_series(Series::new("Messages sent", [4000.0, 3000.0, 3000.0]).with_point_colors(colors.clone()));
    let volume_spec = ChartSpec::panel(ChartKind::Pie)
        .title("Message Volume by Channel")
        .title_size(13.0)
        .explode([0.05, 0.0, 0.0])
        .shadow(true);

    let rates = Dataset::new(channels)
        .with_series(Series::new("", [99.95, 99.90, 99.97]).with_point_colors(colors).with_alpha(0.8));
    let rates_spec = ChartSpec::panel(ChartKind::GroupedBar)
        .title("Delivery Rate by Channel")
        .title_size(13.0)
        .axes("Channel", "Delivery rate (%)")
        .y_range(99.5, 100.0)
        .reference_line(ReferenceLine::new(99.9, "Design target (99.9%)", palette::pure_red()))
        .value_labels(ValueLabels::new(ValueFormat::shortest("%")).inside().offset(-0.05).font_size(11.0).bold())
        .legend(LegendPosition::LowerLeft);

    let grid = GridSpec::new(1, 2, out.join(FIG_DELIVERY_RATE))
        .size(14.0, 5.0)
        .panel(volume, volume_spec)
        .panel(rates, rates_spec);
    render_grid(&grid)
}

pub fn priority_queue(out: &Path) -> perfplot_core::Result<Figure> {
    let message_counts = [10, 50, 100];
    let avg = [0.8, 2.5, 8.5];
    let min = [0.3, 1.2, 3.5];

    let data = Dataset::new(["High priority\n(6 workers)", "Medium priority\n(3 workers)", "Low priority\n(1 worker)"])
        .with_series(Series::new("Average processing time", avg).with_color(palette::blue()).with_alpha(0.8))
        .with_series(Series::new("Fastest processing time", min).with_color(palette::green()).with_alpha(0.8));

    let mut spec = ChartSpec::grouped_bar(out.join(FIG_PRIORITY_QUEUE))
        .title("Priority Queue Processing Performance")
        .axes("Priority queue", "Processing time (s)")
        .bar_width(0.35)
        .size(10.0, 6.0);
    for (i, count) in message_counts.iter().enumerate() {
        let top = avg[i].max(min[i]) + 0.5;
        spec = spec.annotate(Annotation::new(i as f64, top, format!("{count} messages")).boxed());
    }
    render_grouped_bar(&data, &spec)
}

/// Render and write every illustrative figure, in chapter order.
pub fn generate_all(run: &mut ReportRun) -> Result<()> {
    let dir = run.dir().to_path_buf();
    run.emit(FIG_API_RESPONSE, api_response_time(&dir))?;
    run.emit(FIG_THROUGHPUT, throughput_curve(&dir))?;
    run.emit(FIG_RESOURCE_USAGE, resource_usage(&dir))?;
    run.emit(FIG_STRESS_TEST, stress_test(&dir))?;
    run.emit(FIG_DELIVERY_RATE, delivery_rate(&dir))?;
    run.emit(FIG_PRIORITY_QUEUE, priority_queue(&dir))?;
    Ok(())
}
