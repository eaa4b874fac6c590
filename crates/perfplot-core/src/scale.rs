// File: crates/perfplot-core/src/scale.rs
// Summary: Category (band) X scale, numeric X scale and value (Y) scale transforms.

/// Category index or numeric X coordinate.
pub type Logical = f64;
/// Value Y coordinate (e.g., latency).
pub type Value = f64;

/// Splits `[left_px, right_px]` into `count` equal bands, one per category.
/// Category `i` is centred at `to_px(i)`.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count: count.max(1) }
    }
    /// Width of one band in pixels.
    #[inline]
    pub fn band_px(&self) -> f32 {
        (self.right_px - self.left_px) / self.count as f32
    }
    /// Map a logical category coordinate (fractional offsets allowed) to pixels.
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        self.left_px + (x as f32 + 0.5) * self.band_px()
    }
}

/// Horizontal linear scale mapping `[xmin, xmax]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub xmin: Logical,
    pub xmax: Logical,
}

impl LinearScale {
    pub fn new(left_px: f32, right_px: f32, xmin: Logical, xmax: Logical) -> Self {
        let mut s = Self { left_px, right_px, xmin, xmax };
        if (s.xmax - s.xmin).abs() < 1e-12 { s.xmax = s.xmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = (self.xmax - self.xmin).max(1e-12);
        self.left_px + ((x - self.xmin) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
