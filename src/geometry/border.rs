use std::f64::consts::PI;

use crate::foundation::core::Canvas;
use crate::geometry::rounded_rect::RoundedRect;

/// Border outline fitted inside a canvas, recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderGeometry {
    /// Left edge, in pixels.
    pub left: f64,
    /// Top edge, in pixels.
    pub top: f64,
    /// Outline width, in pixels.
    pub width: f64,
    /// Outline height, in pixels.
    pub height: f64,
    /// Corner radius after clamping to `min(width, height) / 2`.
    pub radius: f64,
}

impl BorderGeometry {
    /// Inset the canvas by `offset` on every side and clamp `radius` to fit.
    pub fn fit(canvas: Canvas, offset: f64, radius: f64) -> Self {
        let width = f64::from(canvas.width) - 2.0 * offset;
        let height = f64::from(canvas.height) - 2.0 * offset;
        let max_radius = width.min(height) / 2.0;
        Self {
            left: offset,
            top: offset,
            width,
            height,
            radius: radius.min(max_radius),
        }
    }

    /// Perimeter estimate `2(w + h) + 2πr` used to pick the sampling density.
    ///
    /// Overestimates the true outline; only the sample count depends on it.
    pub fn approximate_perimeter(&self) -> f64 {
        2.0 * (self.width + self.height) + 2.0 * PI * self.radius
    }

    /// Roughly one sample per two pixels of outline. Zero when the outline is degenerate.
    pub fn sample_count(&self) -> usize {
        let n = (self.approximate_perimeter() / 2.0).floor();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Arc-length parameterized outline.
    pub fn outline(&self) -> RoundedRect {
        RoundedRect::new(self.left, self.top, self.width, self.height, self.radius)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/border.rs"]
mod tests;
