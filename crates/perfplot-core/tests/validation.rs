// File: crates/perfplot-core/tests/validation.rs
// Purpose: Malformed input is rejected before any layout or file output.

use perfplot_core::{
    render, render_grid, render_line, ChartError, ChartKind, ChartSpec, Dataset, GridSpec, Series,
};

#[test]
fn series_length_mismatch_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fig9-9-mismatch.png");
    let data = Dataset::new(["a", "b", "c"]).with_series(Series::new("short", [1.0, 2.0]));

    let err = render(&data, &ChartSpec::grouped_bar(&out)).unwrap_err();
    match err {
        ChartError::LengthMismatch { series, expected, got } => {
            assert_eq!(series, "short");
            assert_eq!((expected, got), (3, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn non_finite_values_are_rejected() {
    let data = Dataset::new(["a", "b"]).with_series(Series::new("s", [1.0, f64::NAN]));
    let err = render_line(&data, &ChartSpec::line("unused.png")).unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { ref category, .. } if category == "b"), "{err}");
}

#[test]
fn empty_inputs_are_rejected() {
    let no_series = Dataset::new(["a"]);
    assert!(matches!(
        render(&no_series, &ChartSpec::line("unused.png")),
        Err(ChartError::EmptyDataset("series"))
    ));

    let no_categories = Dataset::new(Vec::<String>::new()).with_series(Series::new("s", Vec::<f64>::new()));
    assert!(matches!(
        render(&no_categories, &ChartSpec::grouped_bar("unused.png")),
        Err(ChartError::EmptyDataset("categories"))
    ));
}

#[test]
fn point_colour_count_must_match() {
    let data = Dataset::new(["a", "b"])
        .with_series(Series::new("s", [1.0, 2.0]).with_point_colors(vec![perfplot_core::palette::red()]));
    let err = render(&data, &ChartSpec::grouped_bar("unused.png")).unwrap_err();
    assert!(matches!(err, ChartError::AuxLengthMismatch { expected: 2, got: 1, .. }), "{err}");
}

#[test]
fn one_bad_panel_fails_the_whole_grid() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grid.png");
    let good = Dataset::new(["a", "b"]).with_series(Series::new("s", [1.0, 2.0]));
    let bad = Dataset::new(["x", "y"]).with_series(Series::new("p", [1.0, -1.0]));

    let grid = GridSpec::new(1, 2, &out)
        .panel(good, ChartSpec::panel(ChartKind::GroupedBar))
        .panel(bad, ChartSpec::panel(ChartKind::Pie));
    let err = render_grid(&grid).unwrap_err();
    assert!(matches!(err, ChartError::NegativeValue { ref category, .. } if category == "y"), "{err}");
    assert!(!out.exists());
}

#[test]
fn errors_describe_the_problem() {
    let data = Dataset::new(["a", "b", "c"]).with_series(Series::new("avg", [1.0]));
    let msg = render(&data, &ChartSpec::grouped_bar("unused.png")).unwrap_err().to_string();
    assert!(msg.contains("avg") && msg.contains('1') && msg.contains('3'), "{msg}");
}

#[test]
fn non_finite_positions_are_rejected() {
    let data = Dataset::numeric(&[1.0, f64::NAN, 3.0]).with_series(Series::new("tps", [1.0, 2.0, 3.0]));
    let err = render_line(&data, &ChartSpec::line("unused.png")).unwrap_err();
    assert!(matches!(err, ChartError::NonFinitePosition { .. }), "{err}");

    let data = Dataset::numeric(&[1.0, f64::INFINITY]).with_series(Series::new("tps", [1.0, 2.0]));
    assert!(render_line(&data, &ChartSpec::line("unused.png")).is_err());
}
