// File: crates/perfplot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Rough advance width used by layout before any font is loaded.
/// Multi-line text is measured by its longest line.
pub fn estimate_width(text: &str, size: f32) -> f32 {
    text.lines()
        .map(|l| l.chars().map(|c| if c.is_ascii() { 0.58 } else { 1.0 }).sum::<f32>())
        .fold(0.0f32, f32::max)
        * size
}

/// Rough height of (possibly multi-line) text.
pub fn estimate_height(text: &str, size: f32) -> f32 {
    text.lines().count().max(1) as f32 * size * 1.2
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[
            "DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto",
            "Noto Sans CJK SC", "PingFang SC", "Microsoft YaHei", "sans-serif",
        ]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool, align: HAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            HAlign::Left => skia::textlayout::TextAlign::Left,
            HAlign::Center => skia::textlayout::TextAlign::Center,
            HAlign::Right => skia::textlayout::TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        // Re-layout at the measured width so Center/Right align within the text box.
        let w = paragraph.longest_line().ceil() + 1.0;
        paragraph.layout(w);
        paragraph
    }

    /// Draw `text` anchored at `(x, y)`, optionally rotated (degrees, clockwise)
    /// about the anchor. When `box_fill` is set a rounded box is drawn behind
    /// the text first.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        bold: bool,
        (h, v): (HAlign, VAlign),
        rotation_deg: f32,
        box_fill: Option<skia::Color>,
    ) {
        let p = self.layout(text, size, color, bold, h);
        let w = p.max_width();
        let ht = p.height();
        let dx = match h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match v {
            VAlign::Top => 0.0,
            VAlign::Center => -ht * 0.5,
            VAlign::Bottom => -ht,
        };

        canvas.save();
        canvas.translate((x, y));
        if rotation_deg.abs() > f32::EPSILON {
            canvas.rotate(rotation_deg, None);
        }
        if let Some(fill) = box_fill {
            let pad = size * 0.3;
            let text_w = p.longest_line();
            let left = dx + match h {
                HAlign::Left => 0.0,
                HAlign::Center => (w - text_w) * 0.5,
                HAlign::Right => w - text_w,
            };
            let rect = skia::Rect::from_ltrb(left - pad, dy - pad, left + text_w + pad, dy + ht + pad);
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(fill);
            canvas.draw_round_rect(rect, pad, pad, &paint);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
