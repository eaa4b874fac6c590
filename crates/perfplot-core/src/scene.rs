// File: crates/perfplot-core/src/scene.rs
// Summary: Laid-out marks of a figure, in layout units. Produced by `layout`, consumed by `paint`.

use skia_safe as skia;

use crate::geometry::RectF;
use crate::spec::{ChartKind, LegendPosition};
use crate::text::{HAlign, VAlign};

/// Which theme colour a text mark falls back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Title,
    AxisLabel,
    Tick,
    Value,
    Legend,
    Annotation,
}

#[derive(Clone, Debug)]
pub struct TextMark {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub role: TextRole,
    pub color: Option<skia::Color>,
    pub bold: bool,
    pub h: HAlign,
    pub v: VAlign,
    /// Clockwise, degrees.
    pub rotation: f32,
    pub boxed: bool,
}

impl TextMark {
    pub fn new(text: impl Into<String>, (x, y): (f32, f32), size: f32, role: TextRole) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            role,
            color: None,
            bold: false,
            h: HAlign::Center,
            v: VAlign::Center,
            rotation: 0.0,
            boxed: false,
        }
    }

    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h = h;
        self.v = v;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn boxed(mut self, boxed: bool) -> Self {
        self.boxed = boxed;
        self
    }

    pub fn color(mut self, color: Option<skia::Color>) -> Self {
        self.color = color;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Tick {
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct AxesMark {
    pub frame: RectF,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub tick_size: f32,
    /// Clockwise, degrees.
    pub x_tick_rotation: f32,
    pub x_grid: bool,
    pub y_grid: bool,
    pub x_label: Option<TextMark>,
    pub y_label: Option<TextMark>,
}

#[derive(Clone, Debug)]
pub struct BarMark {
    pub series: usize,
    pub category: usize,
    pub value: f64,
    pub rect: RectF,
    pub color: skia::Color,
    pub alpha: f32,
    pub label: Option<TextMark>,
}

#[derive(Clone, Debug)]
pub struct PointMark {
    pub x: f32,
    pub y: f32,
    pub value: f64,
    pub label: Option<TextMark>,
}

#[derive(Clone, Debug)]
pub struct LineMark {
    pub series: usize,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub marker_radius: f32,
    pub points: Vec<PointMark>,
}

#[derive(Clone, Debug)]
pub struct WedgeMark {
    pub category: usize,
    pub value: f64,
    /// Share of the total, `0..=100`.
    pub percent: f64,
    /// Skia convention: degrees clockwise from +x.
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub center: (f32, f32),
    pub radius: f32,
    pub color: skia::Color,
    pub name: TextMark,
    pub percent_label: TextMark,
}

#[derive(Clone, Debug)]
pub struct ReferenceLineMark {
    pub value: f64,
    pub y: f32,
    pub x0: f32,
    pub x1: f32,
    pub color: skia::Color,
    pub alpha: f32,
    pub dashed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendGlyph {
    Swatch,
    Line { marker: bool, dashed: bool },
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    pub alpha: f32,
    pub glyph: LegendGlyph,
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub position: LegendPosition,
    pub rect: RectF,
    pub font_size: f32,
    pub row_height: f32,
    pub entries: Vec<LegendEntry>,
}

/// Everything drawn inside one panel cell.
#[derive(Clone, Debug)]
pub struct PanelScene {
    pub kind: ChartKind,
    pub cell: RectF,
    pub title: Option<TextMark>,
    pub axes: Option<AxesMark>,
    pub bars: Vec<BarMark>,
    pub lines: Vec<LineMark>,
    pub wedges: Vec<WedgeMark>,
    pub shadow: bool,
    pub reference_lines: Vec<ReferenceLineMark>,
    pub annotations: Vec<TextMark>,
    pub legend: Option<Legend>,
}

impl PanelScene {
    pub fn new(kind: ChartKind, cell: RectF) -> Self {
        Self {
            kind,
            cell,
            title: None,
            axes: None,
            bars: Vec::new(),
            lines: Vec::new(),
            wedges: Vec::new(),
            shadow: false,
            reference_lines: Vec::new(),
            annotations: Vec::new(),
            legend: None,
        }
    }

    /// Label text of every bar, in series-major order.
    pub fn bar_labels(&self) -> Vec<&str> {
        self.bars.iter().filter_map(|b| b.label.as_ref().map(|t| t.text.as_str())).collect()
    }

    /// Label text of every line point, in series-major order.
    pub fn point_labels(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter())
            .filter_map(|p| p.label.as_ref().map(|t| t.text.as_str()))
            .collect()
    }
}
