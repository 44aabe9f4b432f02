//! Abstract 2D drawing target in logical world units.
//!
//! The scene renderer only needs these primitives: filled rectangles,
//! filled (rotated) ellipses, thin lines, linear gradients, a global alpha
//! and a glow effect.

use crate::core::color::Rgb;

/// Linear gradient between two points with any number of color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// `(offset, color)` pairs, offsets in `0.0..=1.0`, ascending.
    pub stops: Vec<(f64, Rgb)>,
}

impl Gradient {
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Rgb) -> Self {
        self.stops.push((offset.clamp(0.0, 1.0), color));
        self
    }

    /// Color at a point, projecting it onto the gradient axis.
    pub fn color_at(&self, x: f64, y: f64) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Rgb::BLACK,
        };

        let (dx, dy) = (self.x1 - self.x0, self.y1 - self.y0);
        let len2 = dx * dx + dy * dy;
        let t = if len2 > 0.0 {
            (((x - self.x0) * dx + (y - self.y0) * dy) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };

        if t <= first.0 {
            return first.1;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.0 {
                let span = b.0 - a.0;
                let local = if span > 0.0 { (t - a.0) / span } else { 1.0 };
                return Rgb::lerp(a.1, b.1, local);
            }
        }
        last.1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    Linear(Gradient),
}

impl Paint {
    pub fn color_at(&self, x: f64, y: f64) -> Rgb {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.color_at(x, y),
        }
    }
}

impl From<Rgb> for Paint {
    fn from(color: Rgb) -> Self {
        Paint::Solid(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Paint::Linear(gradient)
    }
}

/// Soft halo drawn around filled shapes while set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    /// Halo radius in logical units.
    pub blur: f64,
}

pub trait Surface {
    /// Opacity applied to every following draw, `0.0..=1.0`.
    fn set_alpha(&mut self, alpha: f64);

    fn set_glow(&mut self, glow: Option<Glow>);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint);

    /// Ellipse centered on `(cx, cy)`, rotated by `rotation` radians.
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rotation: f64, paint: &Paint);

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, paint: &Paint) {
        self.fill_ellipse(cx, cy, r, r, 0.0, paint);
    }

    /// Hairline segment.
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb);
}
