// File: crates/perfplot-core/src/dataset.rs
// Summary: Dataset model (categories + series) and its shape validation.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// One labelled sequence of values. An empty label means "no legend entry".
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: Option<skia::Color>,
    /// Per-category colours; only meaningful for bar charts.
    pub point_colors: Option<Vec<skia::Color>>,
    /// Fill opacity in `0..=1`.
    pub alpha: f32,
}

impl Series {
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self { label: label.into(), values: values.into(), color: None, point_colors: None, alpha: 1.0 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_colors = Some(colors);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

/// The numeric table driving one chart.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub categories: Vec<String>,
    /// Numeric x positions; when absent, categories sit at `0..n`.
    pub positions: Option<Vec<f64>>,
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            positions: None,
            series: Vec::new(),
        }
    }

    /// Dataset over numeric x positions (e.g. concurrency levels); category
    /// labels are the positions printed without trailing zeros.
    pub fn numeric(xs: &[f64]) -> Self {
        Self {
            categories: xs.iter().map(|x| format_number(*x)).collect(),
            positions: Some(xs.to_vec()),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// X coordinate of category `i`.
    pub fn x_at(&self, i: usize) -> f64 {
        match &self.positions {
            Some(p) => p[i],
            None => i as f64,
        }
    }

    /// Min/max over every value of every series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.series {
            for &v in &s.values {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Every series (and the optional positions / per-point colours) must
    /// match the category count, and all values must be finite.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(ChartError::EmptyDataset("categories"));
        }
        if self.series.is_empty() {
            return Err(ChartError::EmptyDataset("series"));
        }
        let n = self.categories.len();
        if let Some(p) = &self.positions {
            if p.len() != n {
                return Err(ChartError::AuxLengthMismatch { what: "positions", expected: n, got: p.len() });
            }
            if let Some((i, &x)) = p.iter().enumerate().find(|(_, x)| !x.is_finite()) {
                return Err(ChartError::NonFinitePosition { category: self.categories[i].clone(), value: x });
            }
        }
        for s in &self.series {
            if s.values.len() != n {
                return Err(ChartError::LengthMismatch {
                    series: s.label.clone(),
                    expected: n,
                    got: s.values.len(),
                });
            }
            if let Some(colors) = &s.point_colors {
                if colors.len() != n {
                    return Err(ChartError::AuxLengthMismatch { what: "point colours", expected: n, got: colors.len() });
                }
            }
            if let Some((i, &v)) = s.values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(ChartError::NonFinite {
                    series: s.label.clone(),
                    category: self.categories[i].clone(),
                    value: v,
                });
            }
        }
        Ok(())
    }
}

/// Print a number without a trailing `.0` (e.g. `50`, `2.5`).
pub fn format_number(x: f64) -> String {
    if (x - x.round()).abs() < 1e-9 {
        format!("{}", x.round() as i64)
    } else {
        let s = format!("{:.6}", x);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
