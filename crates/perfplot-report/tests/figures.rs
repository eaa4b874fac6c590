// File: crates/perfplot-report/tests/figures.rs
// Purpose: Every report figure lays out cleanly with the expected shape and file name.

use std::path::Path;

use perfplot_core::ChartKind;
use perfplot_report::{load_measurements, mock, real};

fn assert_named(fig: &perfplot_core::Figure, dir: &Path, name: &str) {
    assert_eq!(fig.output, dir.join(name));
    assert!(name.starts_with("fig6-") && name.ends_with(".png"), "{name}");
}

#[test]
fn illustrative_figures() {
    let dir = Path::new("charts");

    let fig = mock::api_response_time(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_API_RESPONSE);
    assert_eq!(fig.panels[0].bars.len(), 15);
    assert_eq!(fig.panels[0].bar_labels()[0], "45ms");

    let fig = mock::throughput_curve(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_THROUGHPUT);
    assert_eq!(fig.panels[0].point_labels(), vec!["520 TPS", "980 TPS", "1250 TPS", "1450 TPS", "1520 TPS"]);

    let fig = mock::resource_usage(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_RESOURCE_USAGE);
    assert_eq!(fig.panels[0].bars.len(), 20);
    assert!(fig.panels[0].bar_labels().is_empty());

    let fig = mock::stress_test(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_STRESS_TEST);
    let kinds: Vec<_> = fig.panels.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Line, ChartKind::GroupedBar]);
    assert_eq!(fig.panels[1].bar_labels(), vec!["3.5%", "5.8%", "12.5%", "25.3%"]);

    let fig = mock::delivery_rate(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_DELIVERY_RATE);
    let pcts: Vec<_> = fig.panels[0].wedges.iter().map(|w| w.percent_label.text.as_str()).collect();
    assert_eq!(pcts, vec!["40.00%", "30.00%", "30.00%"]);
    assert!(fig.panels[0].shadow);
    assert_eq!(fig.panels[1].bar_labels(), vec!["99.95%", "99.9%", "99.97%"]);

    let fig = mock::priority_queue(dir).unwrap();
    assert_named(&fig, dir, mock::FIG_PRIORITY_QUEUE);
    let notes: Vec<_> = fig.panels[0].annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(notes, vec!["10 messages", "50 messages", "100 messages"]);
}

#[test]
fn measurement_figures() {
    let rows = load_measurements().unwrap();
    let dir = Path::new("charts");

    let fig = real::throughput_curve(&rows, dir).unwrap();
    assert_named(&fig, dir, real::FIG_THROUGHPUT);
    assert_eq!(fig.panels[0].point_labels(), vec!["999 TPS", "1499 TPS", "1265 TPS"]);
    assert_eq!(fig.panels[0].reference_lines[0].value, real::TARGET_TPS);

    let fig = real::api_latency(&rows, dir).unwrap();
    assert_named(&fig, dir, real::FIG_LATENCY);
    assert_eq!(fig.panels[0].bars.len(), 9);
    assert_eq!(fig.panels[0].bar_labels()[1], "32.2ms");

    let fig = real::success_rate(&rows, dir).unwrap();
    assert_named(&fig, dir, real::FIG_SUCCESS_RATE);
    assert_eq!(fig.panels[0].bar_labels(), vec!["99.50%", "99.50%", "99.41%"]);
    assert_eq!(fig.panels[0].reference_lines.len(), 2);

    let fig = real::performance_summary(&rows, dir).unwrap();
    assert_named(&fig, dir, real::FIG_SUMMARY);
    assert_eq!(fig.panels.len(), 4);
    assert!(fig.title.is_some());
}

#[test]
fn figure_names_are_unique_per_driver() {
    let mut mock_names = vec![
        mock::FIG_API_RESPONSE,
        mock::FIG_THROUGHPUT,
        mock::FIG_RESOURCE_USAGE,
        mock::FIG_STRESS_TEST,
        mock::FIG_DELIVERY_RATE,
        mock::FIG_PRIORITY_QUEUE,
    ];
    mock_names.sort();
    mock_names.dedup();
    assert_eq!(mock_names.len(), 6);

    let real_names = [real::FIG_LATENCY, real::FIG_THROUGHPUT, real::FIG_SUCCESS_RATE, real::FIG_SUMMARY];
    assert!(real_names.iter().all(|n| !mock_names.contains(n)));
}
