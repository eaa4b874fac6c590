// File: crates/perfplot-core/tests/grouped_bar.rs
// Purpose: Grouped bar layout: bar count, label text, ordering and limits.

use perfplot_core::{
    render_grouped_bar, Annotation, ChartError, ChartSpec, Dataset, ReferenceLine, Series,
    ValueFormat, ValueLabels, palette,
};

fn labelled(format: ValueFormat) -> ChartSpec {
    ChartSpec::grouped_bar("unused.png").value_labels(ValueLabels::new(format))
}

#[test]
fn two_apis_two_series_end_to_end() {
    let data = Dataset::new(["A", "B"])
        .with_series(Series::new("avg", [10.0, 20.0]))
        .with_series(Series::new("p95", [15.0, 30.0]));
    let fig = render_grouped_bar(&data, &labelled(ValueFormat::new(0, "ms"))).expect("layout");

    assert_eq!(fig.panels.len(), 1);
    let panel = &fig.panels[0];
    assert_eq!(panel.bars.len(), 4);
    assert_eq!(panel.bar_labels(), vec!["10ms", "20ms", "15ms", "30ms"]);

    let axes = panel.axes.as_ref().expect("bar charts have axes");
    let ticks: Vec<_> = axes.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(ticks, vec!["A", "B"]);

    // Within a group series sit left to right; groups follow category order.
    let bar = |s: usize, c: usize| panel.bars.iter().find(|b| b.series == s && b.category == c).unwrap();
    assert!(bar(0, 0).rect.right <= bar(1, 0).rect.left + 1e-3);
    assert!(bar(1, 0).rect.right < bar(0, 1).rect.left);
    // Taller value, taller bar.
    assert!(bar(1, 1).rect.height() > bar(0, 1).rect.height());
}

#[test]
fn every_bar_is_labelled_with_its_value() {
    for n in 1..=6usize {
        for k in 1..=4usize {
            let mut data = Dataset::new((0..n).map(|i| format!("c{i}")));
            for j in 0..k {
                let values: Vec<f64> = (0..n).map(|i| (i * 10 + j) as f64 + 0.25).collect();
                data.add_series(Series::new(format!("s{j}"), values));
            }
            let fig = render_grouped_bar(&data, &labelled(ValueFormat::new(2, "ms"))).expect("layout");
            let panel = &fig.panels[0];
            assert_eq!(panel.bars.len(), n * k, "n={n} k={k}");
            for b in &panel.bars {
                let expected = format!("{:.2}ms", (b.category * 10 + b.series) as f64 + 0.25);
                assert_eq!(b.label.as_ref().map(|l| l.text.as_str()), Some(expected.as_str()));
            }
        }
    }
}

#[test]
fn changing_a_value_changes_its_label() {
    let spec = labelled(ValueFormat::new(0, "ms"));
    let before = Dataset::new(["A", "B"]).with_series(Series::new("avg", [10.0, 20.0]));
    let after = Dataset::new(["A", "B"]).with_series(Series::new("avg", [10.0, 21.0]));
    let a = render_grouped_bar(&before, &spec).unwrap();
    let b = render_grouped_bar(&after, &spec).unwrap();
    assert_eq!(a.panels[0].bar_labels(), vec!["10ms", "20ms"]);
    assert_eq!(b.panels[0].bar_labels(), vec!["10ms", "21ms"]);
}

#[test]
fn more_than_four_series_is_rejected() {
    let mut data = Dataset::new(["A"]);
    for j in 0..5 {
        data.add_series(Series::new(format!("s{j}"), [j as f64]));
    }
    let err = render_grouped_bar(&data, &ChartSpec::grouped_bar("unused.png")).unwrap_err();
    assert!(matches!(err, ChartError::TooManySeries { max: 4, got: 5, .. }), "{err}");
}

#[test]
fn overlapping_bar_width_is_rejected() {
    let data = Dataset::new(["A", "B"])
        .with_series(Series::new("a", [1.0, 2.0]))
        .with_series(Series::new("b", [1.0, 2.0]))
        .with_series(Series::new("c", [1.0, 2.0]));
    let spec = ChartSpec::grouped_bar("unused.png").bar_width(0.4);
    let err = render_grouped_bar(&data, &spec).unwrap_err();
    assert!(matches!(err, ChartError::BarsOverlap { series: 3, .. }), "{err}");
}

#[test]
fn per_category_colours_and_reference_lines() {
    let colors = vec![palette::green(), palette::yellow(), palette::red()];
    let data = Dataset::new(["1000", "1500", "2000"])
        .with_series(Series::new("", [3.5, 5.8, 12.5]).with_point_colors(colors.clone()).with_alpha(0.8));
    let spec = ChartSpec::grouped_bar("unused.png")
        .reference_line(ReferenceLine::new(5.0, "threshold", palette::pure_red()))
        .reference_line(ReferenceLine::new(10.0, "", palette::orange()));
    let fig = render_grouped_bar(&data, &spec).unwrap();
    let panel = &fig.panels[0];

    let got: Vec<_> = panel.bars.iter().map(|b| b.color).collect();
    assert_eq!(got, colors);
    assert!(panel.bars.iter().all(|b| (b.alpha - 0.8).abs() < 1e-6));
    assert_eq!(panel.reference_lines.len(), 2);

    // Unlabelled series and reference lines stay out of the legend.
    let legend = panel.legend.as_ref().expect("one labelled reference line");
    let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["threshold"]);
}

#[test]
fn fixed_range_and_inside_labels() {
    let data = Dataset::new(["Email", "SMS"]).with_series(Series::new("", [99.95, 99.90]));
    let spec = ChartSpec::grouped_bar("unused.png")
        .y_range(99.5, 100.0)
        .value_labels(ValueLabels::new(ValueFormat::new(2, "%")).inside().offset(-0.05));
    let fig = render_grouped_bar(&data, &spec).unwrap();
    let panel = &fig.panels[0];
    let frame = panel.axes.as_ref().unwrap().frame;

    assert_eq!(panel.bar_labels(), vec!["99.95%", "99.90%"]);
    for b in &panel.bars {
        let label = b.label.as_ref().unwrap();
        assert!(label.y > b.rect.top, "inside labels sit below the bar top");
        assert!(b.rect.top > frame.top && b.rect.top < frame.bottom);
    }
}

#[test]
fn inverted_range_is_rejected() {
    let data = Dataset::new(["A"]).with_series(Series::new("", [1.0]));
    let spec = ChartSpec::grouped_bar("unused.png").y_range(5.0, 1.0);
    assert!(matches!(render_grouped_bar(&data, &spec), Err(ChartError::InvalidRange { .. })));
}

#[test]
fn annotations_follow_category_positions() {
    let data = Dataset::new(["high", "medium", "low"])
        .with_series(Series::new("avg", [0.8, 2.5, 8.5]))
        .with_series(Series::new("min", [0.3, 1.2, 3.5]));
    let mut spec = ChartSpec::grouped_bar("unused.png").bar_width(0.35);
    for (i, count) in [10, 50, 100].iter().enumerate() {
        spec = spec.annotate(Annotation::new(i as f64, 9.0, format!("{count} messages")).boxed());
    }
    let fig = render_grouped_bar(&data, &spec).unwrap();
    let panel = &fig.panels[0];
    let ticks = &panel.axes.as_ref().unwrap().x_ticks;

    assert_eq!(panel.annotations.len(), 3);
    for (a, t) in panel.annotations.iter().zip(ticks) {
        assert!((a.x - t.pos).abs() < 1e-3);
        assert!(a.boxed);
    }
    assert_eq!(panel.annotations[2].text, "100 messages");
}

#[test]
fn all_zero_bars_keep_distinct_ticks() {
    let data = Dataset::new(["A", "B"]).with_series(Series::new("idle", [0.0, 0.0]));
    let fig = render_grouped_bar(&data, &labelled(ValueFormat::new(0, "%"))).unwrap();
    let panel = &fig.panels[0];
    let labels: Vec<&str> = panel.axes.as_ref().unwrap().y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert!(labels.len() >= 2, "{labels:?}");
    let mut unique = labels.clone();
    unique.dedup();
    assert_eq!(unique, labels, "tick labels repeat");
    assert_eq!(labels[0], "0.0");
    assert_eq!(panel.bar_labels(), vec!["0%", "0%"]);
}
