// File: crates/perfplot-core/src/paint.rs
// Summary: Skia painting of laid-out panels (axes, bars, lines, wedges, legends, text).

use skia_safe as skia;

use crate::scene::{
    AxesMark, BarMark, Legend, LegendGlyph, LineMark, PanelScene, ReferenceLineMark, TextMark,
    TextRole, WedgeMark,
};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;

/// Shared painting state for one figure.
pub(crate) struct Painter<'a> {
    pub theme: &'a Theme,
    pub shaper: &'a TextShaper,
    pub draw_labels: bool,
}

impl Painter<'_> {
    pub fn panel(&self, canvas: &skia::Canvas, panel: &PanelScene) {
        if let Some(axes) = &panel.axes {
            self.grid(canvas, axes);
        }

        // Data marks are clipped to the plot frame like any fixed-range axes.
        canvas.save();
        if let Some(axes) = &panel.axes {
            let f = axes.frame;
            canvas.clip_rect(skia::Rect::from_ltrb(f.left, f.top, f.right, f.bottom), None, Some(true));
        }
        for bar in &panel.bars {
            self.bar(canvas, bar);
        }
        for line in &panel.lines {
            self.line(canvas, line);
        }
        for r in &panel.reference_lines {
            self.reference_line(canvas, r);
        }
        canvas.restore();

        if panel.shadow {
            for w in &panel.wedges {
                self.wedge_shadow(canvas, w);
            }
        }
        for w in &panel.wedges {
            self.wedge(canvas, w);
        }

        if let Some(axes) = &panel.axes {
            self.axes(canvas, axes);
        }

        for bar in &panel.bars {
            if let Some(label) = &bar.label {
                self.text(canvas, label);
            }
        }
        for line in &panel.lines {
            for p in &line.points {
                if let Some(label) = &p.label {
                    self.text(canvas, label);
                }
            }
        }
        for a in &panel.annotations {
            self.text(canvas, a);
        }
        if let Some(legend) = &panel.legend {
            self.legend(canvas, legend);
        }
        if let Some(title) = &panel.title {
            self.text(canvas, title);
        }
    }

    pub fn text(&self, canvas: &skia::Canvas, mark: &TextMark) {
        if !self.draw_labels {
            return;
        }
        let color = mark.color.unwrap_or(match mark.role {
            TextRole::Title => self.theme.title,
            TextRole::AxisLabel => self.theme.axis_label,
            TextRole::Tick | TextRole::Legend => self.theme.tick,
            TextRole::Value | TextRole::Annotation => self.theme.value_label,
        });
        let box_fill = mark.boxed.then_some(self.theme.annotation_box);
        self.shaper.draw(
            canvas,
            &mark.text,
            (mark.x, mark.y),
            mark.size,
            color,
            mark.bold,
            (mark.h, mark.v),
            mark.rotation,
            box_fill,
        );
    }

    fn grid(&self, canvas: &skia::Canvas, axes: &AxesMark) {
        let mut paint = skia::Paint::default();
        paint.set_color(self.theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(0.8);

        let f = axes.frame;
        if axes.x_grid {
            for t in &axes.x_ticks {
                if t.pos >= f.left - 0.5 && t.pos <= f.right + 0.5 {
                    canvas.draw_line((t.pos, f.top), (t.pos, f.bottom), &paint);
                }
            }
        }
        if axes.y_grid {
            for t in &axes.y_ticks {
                if t.pos >= f.top - 0.5 && t.pos <= f.bottom + 0.5 {
                    canvas.draw_line((f.left, t.pos), (f.right, t.pos), &paint);
                }
            }
        }
    }

    fn axes(&self, canvas: &skia::Canvas, axes: &AxesMark) {
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(self.theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_style(skia::paint::Style::Stroke);
        axis_paint.set_stroke_width(1.0);

        let f = axes.frame;
        canvas.draw_rect(skia::Rect::from_ltrb(f.left, f.top, f.right, f.bottom), &axis_paint);

        let mut tick_paint = axis_paint.clone();
        tick_paint.set_color(self.theme.tick);
        let tick_len = 4.0;
        for t in &axes.x_ticks {
            if t.pos < f.left - 0.5 || t.pos > f.right + 0.5 {
                continue;
            }
            canvas.draw_line((t.pos, f.bottom), (t.pos, f.bottom + tick_len), &tick_paint);
            let (h, v) = if axes.x_tick_rotation != 0.0 { (HAlign::Right, VAlign::Top) } else { (HAlign::Center, VAlign::Top) };
            let label = TextMark::new(&t.label, (t.pos, f.bottom + tick_len + 3.0), axes.tick_size, TextRole::Tick)
                .align(h, v)
                .rotated(axes.x_tick_rotation);
            self.text(canvas, &label);
        }
        for t in &axes.y_ticks {
            if t.pos < f.top - 0.5 || t.pos > f.bottom + 0.5 {
                continue;
            }
            canvas.draw_line((f.left - tick_len, t.pos), (f.left, t.pos), &tick_paint);
            let label = TextMark::new(&t.label, (f.left - tick_len - 4.0, t.pos), axes.tick_size, TextRole::Tick)
                .align(HAlign::Right, VAlign::Center);
            self.text(canvas, &label);
        }

        if let Some(l) = &axes.x_label {
            self.text(canvas, l);
        }
        if let Some(l) = &axes.y_label {
            self.text(canvas, l);
        }
    }

    fn bar(&self, canvas: &skia::Canvas, bar: &BarMark) {
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(bar.color);
        body.set_alpha_f(bar.alpha);
        let r = bar.rect;
        let rect = skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom.max(r.top + 0.5));
        canvas.draw_rect(rect, &body);
    }

    fn line(&self, canvas: &skia::Canvas, line: &LineMark) {
        if line.points.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((line.points[0].x, line.points[0].y));
        for p in line.points.iter().skip(1) {
            path.line_to((p.x, p.y));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(line.stroke_width);
        stroke.set_color(line.color);
        canvas.draw_path(&path, &stroke);

        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_style(skia::paint::Style::Fill);
        marker.set_color(line.color);
        for p in &line.points {
            canvas.draw_circle((p.x, p.y), line.marker_radius, &marker);
        }
    }

    fn reference_line(&self, canvas: &skia::Canvas, r: &ReferenceLineMark) {
        let mut paint = dashed_stroke(r.color, r.dashed, 1.5 * 100.0 / 72.0);
        paint.set_alpha_f(r.alpha);
        canvas.draw_line((r.x0, r.y), (r.x1, r.y), &paint);
    }

    fn wedge_oval(w: &WedgeMark, shift: f32) -> skia::Rect {
        let (cx, cy) = (w.center.0 + shift, w.center.1 + shift);
        skia::Rect::from_ltrb(cx - w.radius, cy - w.radius, cx + w.radius, cy + w.radius)
    }

    fn wedge_shadow(&self, canvas: &skia::Canvas, w: &WedgeMark) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.theme.shadow);
        canvas.draw_arc(Self::wedge_oval(w, w.radius * 0.02), w.start_deg, w.sweep_deg, true, &paint);
    }

    fn wedge(&self, canvas: &skia::Canvas, w: &WedgeMark) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(w.color);
        let oval = Self::wedge_oval(w, 0.0);
        canvas.draw_arc(oval, w.start_deg, w.sweep_deg, true, &fill);

        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(0.8);
        edge.set_color(self.theme.background);
        canvas.draw_arc(oval, w.start_deg, w.sweep_deg, true, &edge);

        self.text(canvas, &w.name);
        self.text(canvas, &w.percent_label);
    }

    fn legend(&self, canvas: &skia::Canvas, legend: &Legend) {
        let r = legend.rect;
        let rect = skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(self.theme.legend_fill);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(0.8);
        border.set_color(self.theme.legend_border);
        canvas.draw_round_rect(rect, 4.0, 4.0, &border);

        for (i, e) in legend.entries.iter().enumerate() {
            let cy = r.top + 8.0 + legend.row_height * (i as f32 + 0.5);
            let gx = r.left + 10.0;
            match e.glyph {
                LegendGlyph::Swatch => {
                    let mut p = skia::Paint::default();
                    p.set_anti_alias(true);
                    p.set_color(e.color);
                    p.set_alpha_f(e.alpha);
                    let h = legend.font_size * 0.7;
                    canvas.draw_rect(skia::Rect::from_ltrb(gx, cy - h * 0.5, gx + 28.0, cy + h * 0.5), &p);
                }
                LegendGlyph::Line { marker, dashed } => {
                    let mut p = dashed_stroke(e.color, dashed, 2.0);
                    p.set_alpha_f(e.alpha);
                    canvas.draw_line((gx, cy), (gx + 28.0, cy), &p);
                    if marker {
                        let mut m = skia::Paint::default();
                        m.set_anti_alias(true);
                        m.set_color(e.color);
                        canvas.draw_circle((gx + 14.0, cy), 4.0, &m);
                    }
                }
            }
            let label = TextMark::new(&e.label, (gx + 36.0, cy), legend.font_size, TextRole::Legend)
                .align(HAlign::Left, VAlign::Center);
            self.text(canvas, &label);
        }
    }
}

fn dashed_stroke(color: skia::Color, dashed: bool, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if dashed {
        paint.set_path_effect(skia::PathEffect::dash(&[6.0, 3.0], 0.0));
    }
    paint
}
