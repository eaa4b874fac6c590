// File: crates/perfplot-core/src/spec.rs
// Summary: Declarative chart description (kind, labels, annotations, output path).

use std::path::PathBuf;

use skia_safe as skia;

use crate::dataset::Dataset;
use crate::types::FigureSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    GroupedBar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::GroupedBar => "grouped bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }
}

/// How numeric values turn into label text: fixed decimals plus a suffix.
/// With `trim` set, trailing zeros (and a bare point) are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueFormat {
    pub decimals: usize,
    pub suffix: String,
    pub trim: bool,
}

impl ValueFormat {
    pub fn new(decimals: usize, suffix: impl Into<String>) -> Self {
        Self { decimals, suffix: suffix.into(), trim: false }
    }

    /// Shortest decimal form up to six places: `99.9%`, `99.95%`, `100%`.
    pub fn shortest(suffix: impl Into<String>) -> Self {
        Self { decimals: 6, suffix: suffix.into(), trim: true }
    }

    pub fn format(&self, v: f64) -> String {
        let mut text = format!("{:.*}", self.decimals, v);
        if self.trim && text.contains('.') {
            text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
        }
        text.push_str(&self.suffix);
        text
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::new(0, "")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Just above the bar top / data point.
    Above,
    /// Just inside the bar top.
    Inside,
}

/// Value labels drawn on every bar or line point.
#[derive(Clone, Debug)]
pub struct ValueLabels {
    pub format: ValueFormat,
    pub placement: LabelPlacement,
    /// Vertical offset in data units (positive is up).
    pub offset: f64,
    pub font_size: f32,
    pub bold: bool,
    pub color: Option<skia::Color>,
    /// Draw a translucent rounded box behind each label.
    pub boxed: bool,
}

impl ValueLabels {
    pub fn new(format: ValueFormat) -> Self {
        Self {
            format,
            placement: LabelPlacement::Above,
            offset: 0.0,
            font_size: 9.0,
            bold: false,
            color: None,
            boxed: false,
        }
    }

    pub fn inside(mut self) -> Self {
        self.placement = LabelPlacement::Inside;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }
}

/// Horizontal threshold line with a legend entry.
#[derive(Clone, Debug)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: String,
    pub color: skia::Color,
    pub alpha: f32,
    pub dashed: bool,
}

impl ReferenceLine {
    pub fn new(value: f64, label: impl Into<String>, color: skia::Color) -> Self {
        Self { value, label: label.into(), color, alpha: 1.0, dashed: true }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

/// Free text placed at data coordinates. For category charts `x` is the
/// category index.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub boxed: bool,
    pub font_size: f32,
}

impl Annotation {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), boxed: false, font_size: 10.0 }
    }

    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Hidden,
}

#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_range: Option<(f64, f64)>,
    pub reference_lines: Vec<ReferenceLine>,
    pub value_labels: Option<ValueLabels>,
    pub annotations: Vec<Annotation>,
    /// Bar width as a fraction of the category band; `None` splits 0.8 of it
    /// evenly across the series.
    pub bar_width: Option<f64>,
    /// Counter-clockwise rotation of x tick labels, degrees.
    pub x_tick_rotation: f32,
    /// Pie only: radial offset per wedge as a fraction of the radius.
    pub explode: Vec<f64>,
    /// Pie only.
    pub shadow: bool,
    pub legend: LegendPosition,
    pub title_size: f32,
    pub size: FigureSize,
    pub output: PathBuf,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, output: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            y_range: None,
            reference_lines: Vec::new(),
            value_labels: None,
            annotations: Vec::new(),
            bar_width: None,
            x_tick_rotation: 0.0,
            explode: Vec::new(),
            shadow: false,
            legend: LegendPosition::default(),
            title_size: 14.0,
            size: FigureSize::default(),
            output: output.into(),
        }
    }

    pub fn grouped_bar(output: impl Into<PathBuf>) -> Self {
        Self::new(ChartKind::GroupedBar, output)
    }

    pub fn line(output: impl Into<PathBuf>) -> Self {
        Self::new(ChartKind::Line, output)
    }

    pub fn pie(output: impl Into<PathBuf>) -> Self {
        Self::new(ChartKind::Pie, output)
    }

    /// Spec for a grid panel; panels have no output of their own.
    pub fn panel(kind: ChartKind) -> Self {
        Self::new(kind, PathBuf::new())
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn reference_line(mut self, line: ReferenceLine) -> Self {
        self.reference_lines.push(line);
        self
    }

    pub fn value_labels(mut self, labels: ValueLabels) -> Self {
        self.value_labels = Some(labels);
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }

    pub fn x_tick_rotation(mut self, degrees: f32) -> Self {
        self.x_tick_rotation = degrees;
        self
    }

    pub fn explode(mut self, offsets: impl Into<Vec<f64>>) -> Self {
        self.explode = offsets.into();
        self
    }

    pub fn shadow(mut self, on: bool) -> Self {
        self.shadow = on;
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn size(mut self, width_in: f32, height_in: f32) -> Self {
        self.size = FigureSize::new(width_in, height_in);
        self
    }
}

/// One cell of a multi-panel figure.
#[derive(Clone, Debug)]
pub struct Panel {
    pub dataset: Dataset,
    pub spec: ChartSpec,
}

impl Panel {
    pub fn new(dataset: Dataset, spec: ChartSpec) -> Self {
        Self { dataset, spec }
    }
}

/// Several independent charts arranged row-major in a fixed layout.
#[derive(Clone, Debug)]
pub struct GridSpec {
    pub title: String,
    pub title_size: f32,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
    pub size: FigureSize,
    pub output: PathBuf,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize, output: impl Into<PathBuf>) -> Self {
        Self {
            title: String::new(),
            title_size: 16.0,
            rows,
            cols,
            panels: Vec::new(),
            size: FigureSize::new(7.0 * cols as f32, 5.0 * rows as f32),
            output: output.into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width_in: f32, height_in: f32) -> Self {
        self.size = FigureSize::new(width_in, height_in);
        self
    }

    pub fn panel(mut self, dataset: Dataset, spec: ChartSpec) -> Self {
        self.panels.push(Panel::new(dataset, spec));
        self
    }
}
