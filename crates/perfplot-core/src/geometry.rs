// File: crates/perfplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout and pixel math.

/// Axis-aligned rectangle in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by the given margins; never inverts.
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let l = self.left + left;
        let t = self.top + top;
        let r = (self.right - right).max(l + 1.0);
        let b = (self.bottom - bottom).max(t + 1.0);
        Self::from_ltrb(l, t, r, b)
    }
}

/// Axis-aligned rectangle in device pixels, `right`/`bottom` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, clipped to `0..max_w` x `0..max_h`.
    pub fn outset_clipped(&self, pad: i32, max_w: i32, max_h: i32) -> Self {
        Self {
            left: clamp(self.left - pad, 0, max_w),
            top: clamp(self.top - pad, 0, max_h),
            right: clamp(self.right + pad, 0, max_w),
            bottom: clamp(self.bottom + pad, 0, max_h),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Bounding box of every pixel in a tightly packed RGBA8 buffer that differs
/// from `background`. Returns `None` when the buffer is uniform.
pub fn content_bounds(rgba: &[u8], width: usize, height: usize, background: [u8; 4]) -> Option<RectI32> {
    if width == 0 || height == 0 || rgba.len() < width * height * 4 {
        return None;
    }
    let mut left = usize::MAX;
    let mut top = usize::MAX;
    let mut right = 0usize;
    let mut bottom = 0usize;
    for (y, row) in rgba.chunks_exact(width * 4).take(height).enumerate() {
        let mut first = None;
        let mut last = 0usize;
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != &background[..] {
                if first.is_none() { first = Some(x); }
                last = x;
            }
        }
        if let Some(first) = first {
            left = left.min(first);
            right = right.max(last + 1);
            top = top.min(y);
            bottom = y + 1;
        }
    }
    if left == usize::MAX {
        return None;
    }
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32, bottom as i32))
}
