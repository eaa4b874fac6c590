// File: crates/perfplot-core/src/lib.rs
// Summary: Core library entry point; exports the dataset/spec model and the chart rendering operations.

pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
mod paint;
pub mod render;
pub mod scale;
pub mod scene;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{write_image, Figure, RenderOptions};
pub use dataset::{Dataset, Series};
pub use error::{ChartError, Result};
pub use render::{render, render_grid, render_grouped_bar, render_line, render_pie};
pub use spec::{
    Annotation, ChartKind, ChartSpec, GridSpec, LegendPosition, Panel, ReferenceLine, ValueFormat,
    ValueLabels,
};
pub use text::TextShaper;
pub use theme::{hex, palette, Theme};
