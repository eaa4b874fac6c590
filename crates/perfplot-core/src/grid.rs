// File: crates/perfplot-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span / target` up to a 1/2/2.5/5 x 10^k step.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs().max(1e-12) / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Most ticks `nice_ticks` will return for one axis.
pub const MAX_TICKS: usize = 1000;

/// Tick values at multiples of a nice step lying inside `[min, max]`.
/// When the step is below the float resolution at `min` the two ends are returned.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < 1e-12 {
        return vec![lo];
    }
    let step = nice_step(hi - lo, target);
    if lo + step == lo || hi + step == hi {
        return vec![lo, hi];
    }
    let first = (lo / step).ceil() * step;
    // tolerance keeps the last tick when hi is an exact multiple
    let n = (((hi - first) / step + 1e-9).floor().max(0.0) as usize).min(MAX_TICKS - 1);
    (0..=n)
        // snap away float noise like 0.30000000000000004
        .map(|i| ((first + i as f64 * step) / step).round() * step)
        .collect()
}

/// Number of decimals needed to print every tick at `step` without noise.
pub fn tick_decimals(step: f64) -> usize {
    let mut d = 0usize;
    let mut s = step.abs();
    while d < 6 && (s - s.round()).abs() > 1e-9 {
        s *= 10.0;
        d += 1;
    }
    d
}
