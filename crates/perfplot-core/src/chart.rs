// File: crates/perfplot-core/src/chart.rs
// Summary: Figure struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::{content_bounds, RectI32};
use crate::paint::Painter;
use crate::scene::{PanelScene, TextMark};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{FigureSize, DPI, LAYOUT_DPI};

pub struct RenderOptions {
    pub dpi: f32,
    pub theme: Theme,
    /// Skip all text; used by pixel snapshots to avoid font variance.
    pub draw_labels: bool,
    /// Crop the image to its painted content.
    pub trim: bool,
    /// Padding kept around the content when trimming, in inches.
    pub trim_padding_in: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DPI,
            theme: Theme::report(),
            draw_labels: true,
            trim: true,
            trim_padding_in: 0.1,
        }
    }
}

/// A laid-out image: one or more panels plus an optional overall title.
#[derive(Clone, Debug)]
pub struct Figure {
    pub size: FigureSize,
    pub title: Option<TextMark>,
    pub panels: Vec<PanelScene>,
    pub output: PathBuf,
}

impl Figure {
    /// Paint the figure and return the (optionally trimmed) raster image.
    pub fn render_image(&self, opts: &RenderOptions) -> Result<skia::Image> {
        let (width, height) = self.size.pixels(opts.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            canvas.save();
            let s = opts.dpi / LAYOUT_DPI;
            canvas.scale((s, s));

            let shaper = TextShaper::new();
            let painter = Painter { theme: &opts.theme, shaper: &shaper, draw_labels: opts.draw_labels };
            for panel in &self.panels {
                painter.panel(canvas, panel);
            }
            if let Some(title) = &self.title {
                painter.text(canvas, title);
            }
            canvas.restore();
        }

        if !opts.trim {
            return Ok(surface.image_snapshot());
        }
        let pad = (opts.trim_padding_in * opts.dpi).round() as i32;
        match trim_bounds(&mut surface, opts.theme.background, pad) {
            Some(b) if b.width() < width || b.height() < height => crop(&mut surface, b),
            _ => Ok(surface.image_snapshot()),
        }
    }

    /// Render the figure to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let image = self.render_image(opts)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to tightly packed RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let image = self.render_image(opts)?;
        let (w, h) = (image.width(), image.height());
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        surface.canvas().draw_image(&image, (0.0, 0.0), None);
        let pixels = read_rgba(&mut surface).ok_or(ChartError::Encode)?;
        Ok((pixels, w, h, w as usize * 4))
    }
}

/// Serialize `figure` as a PNG at its output path.
///
/// The bytes go to a hidden sibling file which is flushed and then renamed
/// over the target, so the target is either the previous file or the complete
/// new one. Any existing file is overwritten.
pub fn write_image(figure: &Figure, opts: &RenderOptions) -> Result<PathBuf> {
    let bytes = figure.render_to_png_bytes(opts)?;
    let path = figure.output.as_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
    }

    let tmp = temp_path(path);
    let written = fs::File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(&bytes)?;
            f.sync_all()
        })
        .and_then(|_| fs::rename(&tmp, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(ChartError::io(path, e));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(path.to_path_buf())
}

// ---- helpers ----------------------------------------------------------------

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "figure.png".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn read_rgba(surface: &mut skia::Surface) -> Option<Vec<u8>> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    surface
        .read_pixels(&info, &mut pixels, row_bytes, (0, 0))
        .then_some(pixels)
}

fn trim_bounds(surface: &mut skia::Surface, background: skia::Color, pad: i32) -> Option<RectI32> {
    let (w, h) = (surface.width(), surface.height());
    let pixels = read_rgba(surface)?;
    let bg = [background.r(), background.g(), background.b(), background.a()];
    content_bounds(&pixels, w as usize, h as usize, bg).map(|b| b.outset_clipped(pad, w, h))
}

fn crop(surface: &mut skia::Surface, b: RectI32) -> Result<skia::Image> {
    let image = surface.image_snapshot();
    let (width, height) = (b.width().max(1), b.height().max(1));
    let mut out = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;
    out.canvas().draw_image(&image, (-b.left as f32, -b.top as f32), None);
    Ok(out.image_snapshot())
}
