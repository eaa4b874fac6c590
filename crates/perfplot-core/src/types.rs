// File: crates/perfplot-core/src/types.rs
// Summary: Shared types and constants (figure sizes, resolution).

/// Output resolution in dots per inch.
pub const DPI: f32 = 300.0;
/// Layout units per inch. All scene coordinates are expressed in these units
/// and scaled by `dpi / LAYOUT_DPI` when painting.
pub const LAYOUT_DPI: f32 = 100.0;

/// Convert a font size in points to layout units.
#[inline]
pub fn pt(size: f32) -> f32 {
    size * LAYOUT_DPI / 72.0
}

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Size in layout units.
    pub fn layout(&self) -> (f32, f32) {
        (self.width_in * LAYOUT_DPI, self.height_in * LAYOUT_DPI)
    }

    /// Size in device pixels at `dpi`.
    pub fn pixels(&self, dpi: f32) -> (i32, i32) {
        (
            (self.width_in * dpi).round().max(1.0) as i32,
            (self.height_in * dpi).round().max(1.0) as i32,
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(10.0, 6.0)
    }
}
