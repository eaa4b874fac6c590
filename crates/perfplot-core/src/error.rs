// File: crates/perfplot-core/src/error.rs
// Summary: Error type shared by validation, layout and PNG output.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series '{series}' has {got} values but the dataset has {expected} categories")]
    LengthMismatch { series: String, expected: usize, got: usize },

    #[error("{what} has {got} entries but the dataset has {expected} categories")]
    AuxLengthMismatch { what: &'static str, expected: usize, got: usize },

    #[error("dataset has no {0}")]
    EmptyDataset(&'static str),

    #[error("{got} series exceed the limit of {max} for a {chart} chart")]
    TooManySeries { chart: &'static str, max: usize, got: usize },

    #[error("{series} bars of width {width} overflow the category band")]
    BarsOverlap { series: usize, width: f64 },

    #[error("value {value} at '{category}' is not a finite non-negative number")]
    NegativeValue { category: String, value: f64 },

    #[error("value {value} at '{category}' in series '{series}' is not finite")]
    NonFinite { series: String, category: String, value: f64 },

    #[error("x position {value} of '{category}' is not finite")]
    NonFinitePosition { category: String, value: f64 },

    #[error("pie values sum to zero")]
    ZeroTotal,

    #[error("{got} reference lines given; a {chart} chart supports at most {max}")]
    TooManyReferenceLines { chart: &'static str, max: usize, got: usize },

    #[error("grid of {rows}x{cols} cannot hold {panels} panels")]
    GridOverflow { rows: usize, cols: usize, panels: usize },

    #[error("invalid grid layout: {0}")]
    InvalidGrid(String),

    #[error("invalid y range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
