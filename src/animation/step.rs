use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::BorderResult;
use crate::geometry::border::BorderGeometry;
use crate::noise::fractal::NoiseConfig;
use crate::render::surface::{DrawSurface, RenderStyle};

/// Perimeter parameter `t ∈ [0, 1]` is stretched to `[0, NOISE_SPAN]` before sampling noise.
pub const NOISE_SPAN: f64 = 8.0;

/// Simulation clock owned by the animator.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// Simulation time in seconds; advances by wall-clock delta × speed.
    pub elapsed: f64,
    /// Timestamp (ms) of the previous frame callback. Starts at zero, so the first delta spans
    /// everything before the first callback.
    pub last_timestamp_ms: f64,
}

impl AnimationState {
    /// Advance the clock to `timestamp_ms` and return the wall-clock delta in seconds.
    pub fn advance(&mut self, timestamp_ms: f64, speed: f64) -> f64 {
        let delta = (timestamp_ms - self.last_timestamp_ms) / 1000.0;
        self.elapsed += delta * speed;
        self.last_timestamp_ms = timestamp_ms;
        delta
    }
}

/// Noise-displaced outline samples for one frame.
///
/// Returns `sample_count + 1` points; the first and last coincide before displacement and the
/// path is closed by the caller. Empty when the geometry has no samples.
pub fn displaced_points(
    geometry: &BorderGeometry,
    noise: &NoiseConfig,
    displacement: f64,
    time: f64,
) -> Vec<Point> {
    let count = geometry.sample_count();
    if count == 0 {
        return Vec::new();
    }
    let outline = geometry.outline();

    (0..=count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let base = outline.point_at(t);
            let x_noise = noise.sample(t * NOISE_SPAN, time, 0.0);
            let y_noise = noise.sample(t * NOISE_SPAN, time, 1.0);
            base + Vec2::new(x_noise, y_noise) * displacement
        })
        .collect()
}

/// Clear the surface and stroke `points` as one closed polyline.
///
/// Returns the number of points drawn.
pub fn draw_border<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    style: &RenderStyle,
) -> BorderResult<usize> {
    surface.clear_rect(surface.size().rect());

    let Some((first, rest)) = points.split_first() else {
        return Ok(0);
    };

    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.close_path();
    surface.stroke(style)?;
    Ok(points.len())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/step.rs"]
mod tests;
