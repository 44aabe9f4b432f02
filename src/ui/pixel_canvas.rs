//! Half-block pixel canvas.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph: foreground = top pixel, background = bottom pixel. The
//! canvas maps the logical world onto its pixel grid with a per-axis scale
//! and samples shapes at pixel centers.

use super::surface::{Glow, Paint, Surface};
use crate::core::color::Rgb;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Opacity of the halo relative to the current global alpha.
const GLOW_STRENGTH: f64 = 0.35;

pub struct PixelCanvas {
    logical_w: f64,
    logical_h: f64,
    w: usize,
    h: usize,
    px: Vec<Rgb>,
    alpha: f64,
    glow: Option<Glow>,
}

impl PixelCanvas {
    /// `w` x `h` pixels showing a `logical_w` x `logical_h` world.
    pub fn new(logical_w: f64, logical_h: f64, w: usize, h: usize) -> Self {
        Self {
            logical_w,
            logical_h,
            w,
            h,
            px: vec![Rgb::BLACK; w * h],
            alpha: 1.0,
            glow: None,
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        if w == self.w && h == self.h {
            return;
        }
        self.w = w;
        self.h = h;
        self.px = vec![Rgb::BLACK; w * h];
    }

    /// Reset every pixel and the drawing state.
    pub fn clear(&mut self, color: Rgb) {
        self.px.fill(color);
        self.alpha = 1.0;
        self.glow = None;
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn scale_x(&self) -> f64 {
        if self.logical_w > 0.0 {
            self.w as f64 / self.logical_w
        } else {
            0.0
        }
    }

    fn scale_y(&self) -> f64 {
        if self.logical_h > 0.0 {
            self.h as f64 / self.logical_h
        } else {
            0.0
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f64) {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return;
        }
        let i = y as usize * self.w + x as usize;
        self.px[i] = color.over(self.px[i], alpha);
    }

    /// Paint every pixel whose center lies inside the shape. `bounds` is the
    /// logical bounding box `(x0, y0, x1, y1)`. Shapes too small to cover
    /// any pixel center still paint the pixel under `anchor`.
    fn fill_shape(
        &mut self,
        bounds: (f64, f64, f64, f64),
        anchor: (f64, f64),
        inside: impl Fn(f64, f64) -> bool,
        paint: &Paint,
        alpha: f64,
    ) {
        if alpha <= 0.0 {
            return;
        }
        let (sx, sy) = (self.scale_x(), self.scale_y());
        if sx <= 0.0 || sy <= 0.0 {
            return;
        }

        let px0 = ((bounds.0 * sx).floor() as i64).max(0);
        let py0 = ((bounds.1 * sy).floor() as i64).max(0);
        let px1 = ((bounds.2 * sx).ceil() as i64).min(self.w as i64);
        let py1 = ((bounds.3 * sy).ceil() as i64).min(self.h as i64);

        let mut painted = false;
        for py in py0..py1 {
            let ly = (py as f64 + 0.5) / sy;
            for px in px0..px1 {
                let lx = (px as f64 + 0.5) / sx;
                if inside(lx, ly) {
                    self.blend(px, py, paint.color_at(lx, ly), alpha);
                    painted = true;
                }
            }
        }

        if !painted {
            let (ax, ay) = anchor;
            let (px, py) = ((ax * sx).floor() as i64, (ay * sy).floor() as i64);
            self.blend(px, py, paint.color_at(ax, ay), alpha);
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint, alpha: f64) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.fill_shape(
            (x, y, x + w, y + h),
            (x + w / 2.0, y + h / 2.0),
            |lx, ly| lx >= x && lx < x + w && ly >= y && ly < y + h,
            paint,
            alpha,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        paint: &Paint,
        alpha: f64,
    ) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (sin, cos) = rotation.sin_cos();
        let ex = ((rx * cos).powi(2) + (ry * sin).powi(2)).sqrt();
        let ey = ((rx * sin).powi(2) + (ry * cos).powi(2)).sqrt();
        self.fill_shape(
            (cx - ex, cy - ey, cx + ex, cy + ey),
            (cx, cy),
            |lx, ly| {
                let (dx, dy) = (lx - cx, ly - cy);
                let u = dx * cos + dy * sin;
                let v = -dx * sin + dy * cos;
                (u / rx).powi(2) + (v / ry).powi(2) <= 1.0
            },
            paint,
            alpha,
        );
    }
}

impl Surface for PixelCanvas {
    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
        if let Some(glow) = self.glow {
            let b = glow.blur / 2.0;
            let halo = Paint::Solid(glow.color);
            self.rect(x - b, y - b, w + 2.0 * b, h + 2.0 * b, &halo, self.alpha * GLOW_STRENGTH);
        }
        self.rect(x, y, w, h, paint, self.alpha);
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, paint: &Paint) {
        if let Some(glow) = self.glow {
            let b = glow.blur / 2.0;
            let halo = Paint::Solid(glow.color);
            self.ellipse(cx, cy, rx + b, ry + b, rotation, &halo, self.alpha * GLOW_STRENGTH);
        }
        self.ellipse(cx, cy, rx, ry, rotation, paint, self.alpha);
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let (dx, dy) = ((x1 - x0) * sx, (y1 - y0) * sy);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
        let mut last = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = ((x0 + (x1 - x0) * t) * sx).floor() as i64;
            let py = ((y0 + (y1 - y0) * t) * sy).floor() as i64;
            // Each pixel once, so translucent lines blend evenly.
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend(px, py, color, self.alpha);
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = (area.width as usize).min(self.w);
        let rows = (area.height as usize).min(self.h / 2);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);
                buf.get_mut(area.x + col as u16, area.y + row as u16)
                    .set_symbol("\u{2580}") // ▀
                    .set_fg(Color::Rgb(top.0, top.1, top.2))
                    .set_bg(Color::Rgb(bot.0, bot.1, bot.2));
            }
        }
    }
}
