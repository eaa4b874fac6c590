// File: crates/perfplot-core/tests/ticks.rs
// Purpose: Tick generation, number formatting and content-bounds trimming helpers.

use perfplot_core::dataset::format_number;
use perfplot_core::geometry::{content_bounds, RectI32};
use perfplot_core::grid::{nice_step, nice_ticks, tick_decimals};
use perfplot_core::ValueFormat;

#[test]
fn nice_steps_round_up() {
    assert_eq!(nice_step(10.0, 5), 2.0);
    assert_eq!(nice_step(1600.0, 6), 500.0);
    assert_eq!(nice_step(12.0, 6), 2.0);
    assert!((nice_step(0.5, 6) - 0.1).abs() < 1e-12);
    assert_eq!(nice_step(13.0, 6), 2.5);
}

#[test]
fn ticks_stay_inside_the_range() {
    let ticks = nice_ticks(0.0, 1575.0, 6);
    assert_eq!(ticks, vec![0.0, 500.0, 1000.0, 1500.0]);

    let ticks = nice_ticks(99.5, 100.0, 6);
    assert!(ticks.len() >= 4, "{ticks:?}");
    assert!(ticks.iter().all(|&t| (99.5 - 1e-9..=100.0 + 1e-9).contains(&t)), "{ticks:?}");
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(nice_ticks(3.0, 3.0, 6), vec![3.0]);
}

#[test]
fn tick_decimals_match_step() {
    assert_eq!(tick_decimals(500.0), 0);
    assert_eq!(tick_decimals(0.5), 1);
    assert_eq!(tick_decimals(0.25), 2);
}

#[test]
fn numbers_print_without_trailing_zeros() {
    assert_eq!(format_number(50.0), "50");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(-1000.0), "-1000");
    assert_eq!(format_number(0.125), "0.125");
}

#[test]
fn value_formats() {
    assert_eq!(ValueFormat::new(0, "ms").format(45.0), "45ms");
    assert_eq!(ValueFormat::new(1, "%").format(3.5), "3.5%");
    assert_eq!(ValueFormat::new(2, "%").format(99.9), "99.90%");
    assert_eq!(ValueFormat::new(0, " TPS").format(1498.76), "1499 TPS");
    assert_eq!(ValueFormat::shortest("%").format(99.90), "99.9%");
    assert_eq!(ValueFormat::shortest("%").format(99.95), "99.95%");
    assert_eq!(ValueFormat::shortest("%").format(100.0), "100%");
    assert_eq!(ValueFormat::shortest("").format(-0.5), "-0.5");
}

#[test]
fn content_bounds_finds_painted_pixels() {
    let (w, h) = (6usize, 4usize);
    let white = [255u8, 255, 255, 255];
    let mut px = white.repeat(w * h);
    assert_eq!(content_bounds(&px, w, h, white), None);

    for (x, y) in [(1usize, 1usize), (4, 2)] {
        let i = (y * w + x) * 4;
        px[i..i + 4].copy_from_slice(&[0, 0, 0, 255]);
    }
    let b = content_bounds(&px, w, h, white).expect("two dark pixels");
    assert_eq!(b, RectI32::from_ltrb(1, 1, 5, 3));
    assert_eq!(b.outset_clipped(2, w as i32, h as i32), RectI32::from_ltrb(0, 0, 6, 4));
}

#[test]
fn ticks_at_the_edge_of_float_resolution_terminate() {
    // Spacing between doubles near 1e16 is 2, wider than the chosen step.
    let lo = 1e16 - 0.2;
    let hi = 1e16 + 4.0;
    let ticks = nice_ticks(lo, hi, 6);
    assert!(!ticks.is_empty() && ticks.len() <= 6, "{ticks:?}");

    let ticks = nice_ticks(0.0, 1e9, 1_000_000_000);
    assert!(ticks.len() <= perfplot_core::grid::MAX_TICKS);
}
