// File: crates/perfplot-core/src/render.rs
// Summary: Public rendering operations: grouped bar, line, pie and multi-panel grid figures.

use tracing::debug;

use crate::chart::Figure;
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::layout::{layout_grouped_bar, layout_line, layout_panel, layout_pie, validate};
use crate::scene::{PanelScene, TextMark, TextRole};
use crate::spec::{ChartSpec, GridSpec};
use crate::text::{estimate_height, HAlign, VAlign};
use crate::types::{pt, FigureSize};

fn full_cell(size: FigureSize) -> RectF {
    let (w, h) = size.layout();
    RectF::from_ltrb(0.0, 0.0, w, h)
}

fn single(spec: &ChartSpec, panel: PanelScene) -> Figure {
    Figure { size: spec.size, title: None, panels: vec![panel], output: spec.output.clone() }
}

/// Grouped bars: one group per category, one bar per series, each bar
/// labelled with its value when `spec.value_labels` is set.
pub fn render_grouped_bar(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure> {
    let panel = layout_grouped_bar(dataset, spec, full_cell(spec.size))?;
    Ok(single(spec, panel))
}

/// Polylines with point markers over the dataset's x positions.
pub fn render_line(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure> {
    let panel = layout_line(dataset, spec, full_cell(spec.size))?;
    Ok(single(spec, panel))
}

/// Proportional wedges from the dataset's single series.
pub fn render_pie(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure> {
    let panel = layout_pie(dataset, spec, full_cell(spec.size))?;
    Ok(single(spec, panel))
}

/// Dispatch on `spec.kind`.
pub fn render(dataset: &Dataset, spec: &ChartSpec) -> Result<Figure> {
    let panel = layout_panel(dataset, spec, full_cell(spec.size))?;
    Ok(single(spec, panel))
}

/// Compose independent panels row-major into a `rows x cols` figure with one
/// overall title. Every panel is validated before any layout happens.
pub fn render_grid(grid: &GridSpec) -> Result<Figure> {
    if grid.rows == 0 || grid.cols == 0 {
        return Err(ChartError::InvalidGrid(format!("{}x{} has no cells", grid.rows, grid.cols)));
    }
    if grid.panels.is_empty() {
        return Err(ChartError::InvalidGrid("no panels".to_string()));
    }
    let cells = grid.rows * grid.cols;
    if grid.panels.len() > cells {
        return Err(ChartError::GridOverflow { rows: grid.rows, cols: grid.cols, panels: grid.panels.len() });
    }
    for p in &grid.panels {
        validate(&p.dataset, &p.spec)?;
    }

    let (w, h) = grid.size.layout();
    let (title, top) = if grid.title.is_empty() {
        (None, 0.0)
    } else {
        let size = pt(grid.title_size);
        let mark = TextMark::new(&grid.title, (w * 0.5, 10.0), size, TextRole::Title)
            .align(HAlign::Center, VAlign::Top)
            .bold(true);
        (Some(mark), 10.0 + estimate_height(&grid.title, size) + 4.0)
    };

    let cell_w = w / grid.cols as f32;
    let cell_h = (h - top) / grid.rows as f32;
    let mut panels = Vec::with_capacity(grid.panels.len());
    for (idx, p) in grid.panels.iter().enumerate() {
        let (row, col) = (idx / grid.cols, idx % grid.cols);
        let cell = RectF::from_ltwh(col as f32 * cell_w, top + row as f32 * cell_h, cell_w, cell_h);
        panels.push(layout_panel(&p.dataset, &p.spec, cell)?);
    }

    debug!(rows = grid.rows, cols = grid.cols, panels = panels.len(), "laid out grid figure");
    Ok(Figure { size: grid.size, title, panels, output: grid.output.clone() })
}
