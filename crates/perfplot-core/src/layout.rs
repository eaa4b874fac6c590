// File: crates/perfplot-core/src/layout.rs
// Summary: Validation and layout of bar, line and pie panels into scene marks.
// Notes:
// - Everything here is pure: no fonts, no surfaces. Text extents are
//   estimated, which is enough for placing legends and margins; the final
//   image is trimmed to its painted content anyway.

use tracing::debug;

use crate::dataset::{format_number, Dataset};
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::grid::{nice_step, nice_ticks, tick_decimals};
use crate::scale::{BandScale, LinearScale, ValueScale};
use crate::scene::{
    AxesMark, BarMark, Legend, LegendEntry, LegendGlyph, LineMark, PanelScene, PointMark,
    ReferenceLineMark, TextMark, TextRole, Tick, WedgeMark,
};
use crate::spec::{ChartKind, ChartSpec, LabelPlacement, LegendPosition, ValueLabels};
use crate::text::{estimate_height, estimate_width, HAlign, VAlign};
use crate::theme::palette;
use crate::types::pt;

/// Most series a grouped bar chart will place side by side.
pub const MAX_BAR_SERIES: usize = 4;

const TICK_PT: f32 = 10.0;
const AXIS_LABEL_PT: f32 = 12.0;
const LEGEND_PT: f32 = 10.0;
const OUTER_PAD: f32 = 12.0;
const LABEL_GAP: f32 = 3.0;
const LINE_WIDTH: f32 = 2.0 * 100.0 / 72.0;
const MARKER_RADIUS: f32 = 4.0 * 100.0 / 72.0;

// ---- validation -------------------------------------------------------------

/// Check a dataset/spec pair against the rules of `spec.kind`.
pub fn validate(dataset: &Dataset, spec: &ChartSpec) -> Result<()> {
    dataset.validate()?;
    if let Some((min, max)) = spec.y_range {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ChartError::InvalidRange { min, max });
        }
    }
    match spec.kind {
        ChartKind::GroupedBar => {
            let k = dataset.series.len();
            if k > MAX_BAR_SERIES {
                return Err(ChartError::TooManySeries { chart: spec.kind.name(), max: MAX_BAR_SERIES, got: k });
            }
            let width = bar_width(spec, k);
            if !(width > 0.0) || width * k as f64 > 1.0 + 1e-9 {
                return Err(ChartError::BarsOverlap { series: k, width });
            }
        }
        ChartKind::Line => {
            if spec.reference_lines.len() > 1 {
                return Err(ChartError::TooManyReferenceLines {
                    chart: spec.kind.name(),
                    max: 1,
                    got: spec.reference_lines.len(),
                });
            }
        }
        ChartKind::Pie => {
            if dataset.series.len() != 1 {
                return Err(ChartError::TooManySeries { chart: spec.kind.name(), max: 1, got: dataset.series.len() });
            }
            let s = &dataset.series[0];
            for (i, &v) in s.values.iter().enumerate() {
                if v < 0.0 {
                    return Err(ChartError::NegativeValue { category: dataset.categories[i].clone(), value: v });
                }
            }
            if s.values.iter().sum::<f64>() <= 0.0 {
                return Err(ChartError::ZeroTotal);
            }
            if !spec.explode.is_empty() && spec.explode.len() != dataset.len() {
                return Err(ChartError::AuxLengthMismatch {
                    what: "explode offsets",
                    expected: dataset.len(),
                    got: spec.explode.len(),
                });
            }
        }
    }
    Ok(())
}

fn bar_width(spec: &ChartSpec, series: usize) -> f64 {
    spec.bar_width.unwrap_or(0.8 / series.max(1) as f64)
}

// ---- shared pieces ----------------------------------------------------------

fn title_mark(spec: &ChartSpec, cell: RectF) -> (Option<TextMark>, f32) {
    if spec.title.is_empty() {
        return (None, OUTER_PAD);
    }
    let size = pt(spec.title_size);
    let mark = TextMark::new(&spec.title, (cell.center_x(), cell.top + OUTER_PAD), size, TextRole::Title)
        .align(HAlign::Center, VAlign::Top)
        .bold(true);
    (Some(mark), OUTER_PAD + estimate_height(&spec.title, size) + 10.0)
}

/// Vertical extent of the x tick labels once rotated.
fn x_tick_extent(labels: &[String], rotation_ccw: f32) -> f32 {
    let size = pt(TICK_PT);
    let rad = rotation_ccw.abs().to_radians();
    labels
        .iter()
        .map(|l| estimate_width(l, size) * rad.sin() + estimate_height(l, size) * rad.cos())
        .fold(0.0f32, f32::max)
}

/// Carve the plot frame out of `cell`, leaving room for title, ticks and axis titles.
fn plot_frame(spec: &ChartSpec, cell: RectF, top: f32, y_tick_labels: &[String], x_tick_labels: &[String]) -> RectF {
    let tick = pt(TICK_PT);
    let axis = pt(AXIS_LABEL_PT);
    let y_tick_w = y_tick_labels.iter().map(|l| estimate_width(l, tick)).fold(0.0f32, f32::max);
    let left = OUTER_PAD + y_tick_w + 8.0 + if spec.y_label.is_empty() { 0.0 } else { axis * 1.2 + 6.0 };
    let bottom = OUTER_PAD + x_tick_extent(x_tick_labels, spec.x_tick_rotation) + 8.0
        + if spec.x_label.is_empty() { 0.0 } else { axis * 1.2 + 6.0 };
    cell.inset(left, top, OUTER_PAD + 8.0, bottom)
}

fn value_ticks(vs: &ValueScale) -> Vec<(f64, String)> {
    let step = nice_step(vs.vmax - vs.vmin, 6);
    let decimals = tick_decimals(step);
    nice_ticks(vs.vmin, vs.vmax, 6)
        .into_iter()
        .map(|v| (v, format!("{:.*}", decimals, v)))
        .collect()
}

fn axes_mark(
    spec: &ChartSpec,
    frame: RectF,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
    x_grid: bool,
) -> AxesMark {
    let tick = pt(TICK_PT);
    let axis = pt(AXIS_LABEL_PT);
    let rotated = spec.x_tick_rotation.abs() > f32::EPSILON;
    let x_extent = x_ticks
        .iter()
        .map(|t| {
            let rad = spec.x_tick_rotation.abs().to_radians();
            estimate_width(&t.label, tick) * rad.sin() + estimate_height(&t.label, tick) * rad.cos()
        })
        .fold(0.0f32, f32::max);
    let y_extent = y_ticks.iter().map(|t| estimate_width(&t.label, tick)).fold(0.0f32, f32::max);

    let x_label = (!spec.x_label.is_empty()).then(|| {
        TextMark::new(&spec.x_label, (frame.center_x(), frame.bottom + 8.0 + x_extent + 6.0), axis, TextRole::AxisLabel)
            .align(HAlign::Center, VAlign::Top)
    });
    let y_label = (!spec.y_label.is_empty()).then(|| {
        TextMark::new(&spec.y_label, (frame.left - 8.0 - y_extent - 6.0, frame.center_y()), axis, TextRole::AxisLabel)
            .align(HAlign::Center, VAlign::Bottom)
            .rotated(-90.0)
    });

    AxesMark {
        frame,
        x_ticks,
        y_ticks,
        tick_size: tick,
        x_tick_rotation: if rotated { -spec.x_tick_rotation } else { 0.0 },
        x_grid,
        y_grid: true,
        x_label,
        y_label,
    }
}

fn value_label(labels: &ValueLabels, value: f64, x: f32, vs: &ValueScale) -> TextMark {
    let y = vs.to_px(value + labels.offset);
    let (y, v) = match labels.placement {
        LabelPlacement::Above => (y - LABEL_GAP, VAlign::Bottom),
        LabelPlacement::Inside => (y + LABEL_GAP, VAlign::Top),
    };
    TextMark::new(labels.format.format(value), (x, y), pt(labels.font_size), TextRole::Value)
        .align(HAlign::Center, v)
        .bold(labels.bold)
        .color(labels.color)
        .boxed(labels.boxed)
}

fn reference_marks(spec: &ChartSpec, frame: RectF, vs: &ValueScale) -> Vec<ReferenceLineMark> {
    spec.reference_lines
        .iter()
        .map(|r| ReferenceLineMark {
            value: r.value,
            y: vs.to_px(r.value),
            x0: frame.left,
            x1: frame.right,
            color: r.color,
            alpha: r.alpha,
            dashed: r.dashed,
        })
        .collect()
}

fn legend(spec: &ChartSpec, frame: RectF, mut entries: Vec<LegendEntry>) -> Option<Legend> {
    for r in &spec.reference_lines {
        if !r.label.is_empty() {
            entries.push(LegendEntry {
                label: r.label.clone(),
                color: r.color,
                alpha: r.alpha,
                glyph: LegendGlyph::Line { marker: false, dashed: r.dashed },
            });
        }
    }
    if entries.is_empty() || spec.legend == LegendPosition::Hidden {
        return None;
    }
    let size = pt(LEGEND_PT);
    let row_height = size * 1.5;
    let text_w = entries.iter().map(|e| estimate_width(&e.label, size)).fold(0.0f32, f32::max);
    let w = 10.0 + 28.0 + 8.0 + text_w + 10.0;
    let h = 8.0 + row_height * entries.len() as f32 + 4.0;
    let pad = 8.0;
    let (left, top) = match spec.legend {
        LegendPosition::UpperLeft | LegendPosition::Hidden => (frame.left + pad, frame.top + pad),
        LegendPosition::UpperRight => (frame.right - pad - w, frame.top + pad),
        LegendPosition::LowerLeft => (frame.left + pad, frame.bottom - pad - h),
        LegendPosition::LowerRight => (frame.right - pad - w, frame.bottom - pad - h),
    };
    Some(Legend {
        position: spec.legend,
        rect: RectF::from_ltwh(left, top, w, h),
        font_size: size,
        row_height,
        entries,
    })
}

/// Y range covering `lo..hi` with matplotlib-like margins; bars keep their
/// zero baseline when all values are non-negative. A flat range is widened
/// by 5% of its value (or to a unit span at zero).
fn auto_range(lo: f64, hi: f64, zero_based: bool, headroom: f64) -> (f64, f64) {
    let (mut lo, mut hi) = (lo, hi);
    if zero_based {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if hi - lo <= 1e-12 * lo.abs().max(1.0) {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        (lo, hi) = if zero_based && lo == 0.0 { (0.0, pad) } else { (lo - pad, hi + pad) };
    }
    let span = (hi - lo).abs().max(1e-9);
    let bottom = if zero_based && lo >= 0.0 { lo } else { lo - span * 0.05 };
    (bottom, hi + span * (0.05 + headroom))
}

fn data_extent(dataset: &Dataset, spec: &ChartSpec) -> (f64, f64) {
    let (mut lo, mut hi) = dataset.value_range().unwrap_or((0.0, 1.0));
    for r in &spec.reference_lines {
        lo = lo.min(r.value);
        hi = hi.max(r.value);
    }
    for a in &spec.annotations {
        hi = hi.max(a.y);
    }
    if let Some(l) = &spec.value_labels {
        if l.placement == LabelPlacement::Above && l.offset > 0.0 {
            hi += l.offset;
        }
    }
    (lo, hi)
}

fn annotation_marks(spec: &ChartSpec, to_x: impl Fn(f64) -> f32, vs: &ValueScale) -> Vec<TextMark> {
    spec.annotations
        .iter()
        .map(|a| {
            TextMark::new(&a.text, (to_x(a.x), vs.to_px(a.y)), pt(a.font_size), TextRole::Annotation)
                .align(HAlign::Center, VAlign::Bottom)
                .boxed(a.boxed)
        })
        .collect()
}

// ---- grouped bar ------------------------------------------------------------

pub fn layout_grouped_bar(dataset: &Dataset, spec: &ChartSpec, cell: RectF) -> Result<PanelScene> {
    let mut spec = spec.clone();
    spec.kind = ChartKind::GroupedBar;
    validate(dataset, &spec)?;

    let n = dataset.len();
    let k = dataset.series.len();
    let width = bar_width(&spec, k);
    let labels_on = spec.value_labels.is_some();

    let (lo, hi) = data_extent(dataset, &spec);
    let (vmin, vmax) = spec.y_range.unwrap_or_else(|| auto_range(lo, hi, true, if labels_on { 0.06 } else { 0.0 }));

    let (title, top) = title_mark(&spec, cell);
    // First pass with a provisional scale to size the tick labels.
    let provisional = ValueScale::new_linear(0.0, 1.0, vmin, vmax);
    let y_tick_text: Vec<String> = value_ticks(&provisional).into_iter().map(|(_, s)| s).collect();
    let frame = plot_frame(&spec, cell, top, &y_tick_text, &dataset.categories);

    let vs = ValueScale::new_linear(frame.top, frame.bottom, vmin, vmax);
    let band = BandScale::new(frame.left, frame.right, n);
    let base = 0.0f64.clamp(vmin, vmax);

    let mut scene = PanelScene::new(ChartKind::GroupedBar, cell);
    scene.title = title;

    for (j, s) in dataset.series.iter().enumerate() {
        let offset = (j as f64 - (k as f64 - 1.0) / 2.0) * width;
        for (i, &v) in s.values.iter().enumerate() {
            let center = i as f64 + offset;
            let left = band.to_px(center - width / 2.0);
            let right = band.to_px(center + width / 2.0);
            let (y0, y1) = (vs.to_px(v.max(base)), vs.to_px(v.min(base)));
            let color = s
                .point_colors
                .as_ref()
                .map(|c| c[i])
                .or(s.color)
                .unwrap_or_else(|| palette::nth(j));
            let label = spec.value_labels.as_ref().map(|l| value_label(l, v, (left + right) * 0.5, &vs));
            scene.bars.push(BarMark {
                series: j,
                category: i,
                value: v,
                rect: RectF::from_ltrb(left, y0, right, y1),
                color,
                alpha: s.alpha,
                label,
            });
        }
    }

    let x_ticks = dataset
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| Tick { pos: band.to_px(i as f64), label: c.clone() })
        .collect();
    let y_ticks = value_ticks(&vs)
        .into_iter()
        .map(|(v, label)| Tick { pos: vs.to_px(v), label })
        .collect();
    scene.axes = Some(axes_mark(&spec, frame, x_ticks, y_ticks, false));
    scene.reference_lines = reference_marks(&spec, frame, &vs);
    scene.annotations = annotation_marks(&spec, |x| band.to_px(x), &vs);

    let entries = dataset
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.label.is_empty())
        .map(|(j, s)| LegendEntry {
            label: s.label.clone(),
            color: s.color.unwrap_or_else(|| palette::nth(j)),
            alpha: s.alpha,
            glyph: LegendGlyph::Swatch,
        })
        .collect();
    scene.legend = legend(&spec, frame, entries);

    debug!(categories = n, series = k, bars = scene.bars.len(), "laid out grouped bar panel");
    Ok(scene)
}

// ---- line -------------------------------------------------------------------

pub fn layout_line(dataset: &Dataset, spec: &ChartSpec, cell: RectF) -> Result<PanelScene> {
    let mut spec = spec.clone();
    spec.kind = ChartKind::Line;
    validate(dataset, &spec)?;

    let n = dataset.len();
    let labels_on = spec.value_labels.is_some();
    let xs: Vec<f64> = (0..n).map(|i| dataset.x_at(i)).collect();
    let (xlo, xhi) = xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), &x| (a.min(x), b.max(x)));
    let xspan = (xhi - xlo).abs().max(1.0);
    let (xmin, xmax) = (xlo - xspan * 0.05, xhi + xspan * 0.05);

    let (lo, hi) = data_extent(dataset, &spec);
    let (vmin, vmax) = spec.y_range.unwrap_or_else(|| auto_range(lo, hi, false, if labels_on { 0.08 } else { 0.0 }));

    // Numeric datasets get nice ticks; index datasets tick each category.
    let x_tick_values: Vec<(f64, String)> = if dataset.positions.is_some() {
        nice_ticks(xmin, xmax, 6).into_iter().map(|v| (v, format_number(v))).collect()
    } else {
        dataset.categories.iter().enumerate().map(|(i, c)| (i as f64, c.clone())).collect()
    };

    let (title, top) = title_mark(&spec, cell);
    let provisional = ValueScale::new_linear(0.0, 1.0, vmin, vmax);
    let y_tick_text: Vec<String> = value_ticks(&provisional).into_iter().map(|(_, s)| s).collect();
    let x_tick_text: Vec<String> = x_tick_values.iter().map(|(_, s)| s.clone()).collect();
    let frame = plot_frame(&spec, cell, top, &y_tick_text, &x_tick_text);

    let vs = ValueScale::new_linear(frame.top, frame.bottom, vmin, vmax);
    let hs = LinearScale::new(frame.left, frame.right, xmin, xmax);

    let mut scene = PanelScene::new(ChartKind::Line, cell);
    scene.title = title;

    for (j, s) in dataset.series.iter().enumerate() {
        let color = s.color.unwrap_or_else(|| palette::nth(j));
        let points = s
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = hs.to_px(xs[i]);
                PointMark {
                    x,
                    y: vs.to_px(v),
                    value: v,
                    label: spec.value_labels.as_ref().map(|l| value_label(l, v, x, &vs)),
                }
            })
            .collect();
        scene.lines.push(LineMark {
            series: j,
            color,
            stroke_width: LINE_WIDTH,
            marker_radius: MARKER_RADIUS,
            points,
        });
    }

    let x_ticks = x_tick_values
        .into_iter()
        .map(|(v, label)| Tick { pos: hs.to_px(v), label })
        .collect();
    let y_ticks = value_ticks(&vs)
        .into_iter()
        .map(|(v, label)| Tick { pos: vs.to_px(v), label })
        .collect();
    scene.axes = Some(axes_mark(&spec, frame, x_ticks, y_ticks, true));
    scene.reference_lines = reference_marks(&spec, frame, &vs);
    scene.annotations = annotation_marks(&spec, |x| hs.to_px(x), &vs);

    let entries = dataset
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.label.is_empty())
        .map(|(j, s)| LegendEntry {
            label: s.label.clone(),
            color: s.color.unwrap_or_else(|| palette::nth(j)),
            alpha: s.alpha,
            glyph: LegendGlyph::Line { marker: true, dashed: false },
        })
        .collect();
    scene.legend = legend(&spec, frame, entries);

    debug!(points = n, series = dataset.series.len(), "laid out line panel");
    Ok(scene)
}

// ---- pie --------------------------------------------------------------------

pub fn layout_pie(dataset: &Dataset, spec: &ChartSpec, cell: RectF) -> Result<PanelScene> {
    let mut spec = spec.clone();
    spec.kind = ChartKind::Pie;
    validate(dataset, &spec)?;

    let series = &dataset.series[0];
    let total: f64 = series.values.iter().sum();

    let (title, top) = title_mark(&spec, cell);
    let area = cell.inset(OUTER_PAD, top, OUTER_PAD, OUTER_PAD);
    let max_explode = spec.explode.iter().copied().fold(0.0f64, f64::max) as f32;
    // Leave room around the disc for the category names.
    let radius = (area.width().min(area.height()) * 0.5 / (1.35 + max_explode)).max(1.0);
    let (cx, cy) = (area.center_x(), area.center_y());

    let name_size = pt(10.0);
    let pct_size = pt(10.0);

    let mut scene = PanelScene::new(ChartKind::Pie, cell);
    scene.title = title;
    scene.shadow = spec.shadow;

    let mut cumulative = 0.0f64;
    for (i, &v) in series.values.iter().enumerate() {
        let frac = v / total;
        // Counter-clockwise from 12 o'clock, in math convention.
        let start_math = 90.0 + cumulative * 360.0;
        let sweep_math = frac * 360.0;
        let mid = (start_math + sweep_math / 2.0).to_radians();
        let (dx, dy) = (mid.cos() as f32, -(mid.sin() as f32));
        let explode = spec.explode.get(i).copied().unwrap_or(0.0) as f32;
        let center = (cx + dx * radius * explode, cy + dy * radius * explode);

        let name_anchor = (center.0 + dx * radius * 1.1, center.1 + dy * radius * 1.1);
        let h = if dx >= 0.0 { HAlign::Left } else { HAlign::Right };
        let name = TextMark::new(&dataset.categories[i], name_anchor, name_size, TextRole::Tick).align(h, VAlign::Center);

        let percent = frac * 100.0;
        let pct_anchor = (center.0 + dx * radius * 0.6, center.1 + dy * radius * 0.6);
        let percent_label = TextMark::new(format!("{:.2}%", percent), pct_anchor, pct_size, TextRole::Value)
            .align(HAlign::Center, VAlign::Center);

        let color = series
            .point_colors
            .as_ref()
            .map(|c| c[i])
            .unwrap_or_else(|| palette::nth(i));

        scene.wedges.push(WedgeMark {
            category: i,
            value: v,
            percent,
            // Skia measures clockwise with y pointing down.
            start_deg: -(start_math as f32),
            sweep_deg: -(sweep_math as f32),
            center,
            radius,
            color,
            name,
            percent_label,
        });
        cumulative += frac;
    }

    debug!(wedges = scene.wedges.len(), total, "laid out pie panel");
    Ok(scene)
}

/// Lay out a panel according to `spec.kind`.
pub fn layout_panel(dataset: &Dataset, spec: &ChartSpec, cell: RectF) -> Result<PanelScene> {
    match spec.kind {
        ChartKind::GroupedBar => layout_grouped_bar(dataset, spec, cell),
        ChartKind::Line => layout_line(dataset, spec, cell),
        ChartKind::Pie => layout_pie(dataset, spec, cell),
    }
}
