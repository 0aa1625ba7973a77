// File: crates/tipplot-core/src/render.rs
// Summary: Headless page rendering (surface, control panel, tooltip) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient, TICK_SIZE};
use crate::chart::ChartRenderer;
use crate::error::ChartError;
use crate::scene::{Checkbox, Rect, Status, Tooltip};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    /// Text is skipped when false (keeps snapshots independent of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

impl RenderOptions {
    pub fn for_theme(name: &str) -> Self {
        Self { theme: crate::theme::find(name), ..Self::default() }
    }
}

impl ChartRenderer {
    /// Render the whole page to an RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.page_size();
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| ChartError::Render(format!("no {w}x{h} raster surface")))?;

        let shaper = opts.draw_labels.then(TextShaper::new);
        self.paint_page(surface.canvas(), &opts.theme, shaper.as_ref());

        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Render("reading back raster pixels failed".into()).into());
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)?;
        Ok(out)
    }

    /// Render the page to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    fn paint_page(&self, canvas: &skia::Canvas, theme: &Theme, shaper: Option<&TextShaper>) {
        let surface = self.surface();
        canvas.clear(theme.background);

        if let Some(t) = shaper {
            let cx = surface.width.saturating_sub(surface.margins.hsum()) as f32 / 2.0 + surface.margins.left as f32;
            t.draw(canvas, &surface.title, cx, surface.margins.top as f32 / 2.0, 16.0, theme.title, Anchor::Middle, true);
        }

        canvas.save();
        canvas.translate((surface.margins.left as f32, surface.margins.top as f32));

        if let (Some(status), Some(t)) = (&surface.status, shaper) {
            let plot_w = self.config().plot_width() as f32;
            let plot_h = self.config().plot_height() as f32;
            let (text, color) = match status {
                Status::Loading => ("Loading data…".to_string(), theme.status_text),
                Status::Error(msg) => (format!("Could not load data: {msg}"), theme.error_text),
            };
            t.draw(canvas, &text, plot_w / 2.0, plot_h / 2.0, 14.0, color, Anchor::Middle, false);
        }

        for axis in surface.x_axis.iter().chain(surface.y_axis.iter()) {
            draw_axis(canvas, axis, theme, shaper);
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for m in surface.markers.iter().filter(|m| m.opacity > 0.0) {
            fill.set_color(m.fill);
            fill.set_alpha_f(m.opacity * m.fill.a() as f32 / 255.0);
            canvas.draw_circle((m.cx, m.cy), m.radius, &fill);
        }
        canvas.restore();

        for entry in &self.controls().entries {
            draw_checkbox(canvas, entry, theme, shaper);
        }

        let tooltip = self.tooltip();
        if tooltip.visible {
            draw_tooltip(canvas, tooltip, theme, shaper);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x, r.y, r.w, r.h)
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, shaper: Option<&TextShaper>) {
    let line = stroke_paint(theme.axis_line, 1.0);
    let tick = stroke_paint(theme.tick, 1.0);
    let o = axis.offset;
    match axis.orient {
        AxisOrient::Bottom => {
            canvas.draw_line((0.0, o), (axis.length, o), &line);
            for t in &axis.ticks {
                canvas.draw_line((t.pos, o), (t.pos, o + TICK_SIZE), &tick);
                if let Some(s) = shaper {
                    s.draw(canvas, &t.label, t.pos, o + TICK_SIZE + 12.0, 10.0, theme.tick, Anchor::Middle, false);
                }
            }
        }
        AxisOrient::Left => {
            canvas.draw_line((o, 0.0), (o, axis.length), &line);
            for t in &axis.ticks {
                canvas.draw_line((o - TICK_SIZE, t.pos), (o, t.pos), &tick);
                if let Some(s) = shaper {
                    s.draw(canvas, &t.label, o - TICK_SIZE - 3.0, t.pos + 3.5, 10.0, theme.tick, Anchor::End, false);
                }
            }
        }
    }

    if let Some(s) = shaper {
        let (lx, ly) = axis.label_anchor();
        canvas.save();
        canvas.translate((lx, ly));
        if axis.orient == AxisOrient::Left {
            canvas.rotate(-90.0, None);
        }
        s.draw(canvas, &axis.label, 0.0, 0.0, 12.0, theme.axis_label, Anchor::Middle, false);
        canvas.restore();
    }
}

fn draw_checkbox(canvas: &skia::Canvas, entry: &Checkbox, theme: &Theme, shaper: Option<&TextShaper>) {
    let b = entry.box_rect();
    if entry.checked {
        canvas.draw_rect(sk_rect(b), &fill_paint(theme.checkbox_fill));
        let mark = stroke_paint(skia::Color::WHITE, 2.0);
        let (x, y) = (b.x, b.y);
        canvas.draw_line((x + 3.0, y + 6.5), (x + 5.5, y + 9.5), &mark);
        canvas.draw_line((x + 5.5, y + 9.5), (x + 10.0, y + 3.5), &mark);
    } else {
        canvas.draw_rect(sk_rect(b), &stroke_paint(theme.checkbox_border, 1.0));
    }

    canvas.draw_rect(sk_rect(entry.swatch_rect()), &fill_paint(entry.color));

    if let Some(s) = shaper {
        let (tx, ty) = entry.text_origin();
        s.draw(canvas, &entry.borough, tx, ty, 12.0, theme.control_text, Anchor::Start, false);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, theme: &Theme, shaper: Option<&TextShaper>) {
    let (w, h) = tooltip.size();
    let rect = Rect { x: tooltip.left, y: tooltip.top, w, h };
    canvas.draw_rect(sk_rect(rect), &fill_paint(theme.tooltip_fill));
    canvas.draw_rect(sk_rect(rect), &stroke_paint(theme.tooltip_border, 1.0));
    if let Some(s) = shaper {
        for (i, line) in tooltip.lines.iter().enumerate() {
            let y = tooltip.top + 5.0 + 12.0 + i as f32 * 16.0;
            s.draw(canvas, line, tooltip.left + 5.0, y, 12.0, theme.tooltip_text, Anchor::Start, false);
        }
    }
}
