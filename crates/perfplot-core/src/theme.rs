// File: crates/perfplot-core/src/theme.rs
// Summary: Report theming (figure colours and the series palette).

use skia_safe as skia;

/// Build an opaque colour from a `0xRRGGBB` literal.
pub fn hex(rgb: u32) -> skia::Color {
    skia::Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Series palette used when a series carries no explicit colour.
pub mod palette {
    use super::hex;
    use skia_safe::Color;

    pub fn blue() -> Color { hex(0x5470c6) }
    pub fn green() -> Color { hex(0x91cc75) }
    pub fn yellow() -> Color { hex(0xfac858) }
    pub fn red() -> Color { hex(0xee6666) }
    pub fn crimson() -> Color { hex(0xd62728) }
    pub fn orange() -> Color { hex(0xffa500) }
    pub fn dark_green() -> Color { hex(0x006400) }
    pub fn pure_green() -> Color { hex(0x008000) }
    pub fn pure_red() -> Color { hex(0xff0000) }

    /// Colour for the `i`th series (cycles).
    pub fn nth(i: usize) -> Color {
        match i % 5 {
            0 => blue(),
            1 => green(),
            2 => yellow(),
            3 => red(),
            _ => crimson(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub value_label: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub annotation_box: skia::Color,
    pub shadow: skia::Color,
}

impl Theme {
    /// White print-friendly theme.
    pub fn report() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            title: skia::Color::from_argb(255, 0, 0, 0),
            value_label: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            annotation_box: skia::Color::from_argb(77, 255, 255, 0),
            shadow: skia::Color::from_argb(64, 0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::report()
    }
}
