use std::io::Read;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{BorderError, BorderResult};
use crate::noise::fractal::NoiseConfig;
use crate::render::surface::RenderStyle;

/// Construction options for [`crate::BorderAnimator`].
///
/// Every field is optional in JSON (camelCase keys). A missing field, or one set to zero, takes
/// the default below. Values are not otherwise range-checked: degenerate settings produce
/// whatever the arithmetic yields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", from = "OptionsDoc")]
pub struct BorderOptions {
    /// Surface width in pixels. Default 354.
    pub width: u32,
    /// Surface height in pixels. Default 504.
    pub height: u32,
    /// Fractal octave count. Default 10.
    pub octaves: u32,
    /// Per-octave frequency multiplier. Default 1.6.
    pub lacunarity: f64,
    /// Per-octave amplitude multiplier. Default 0.6.
    pub gain: f64,
    /// Base octave amplitude. Default 0.2.
    pub amplitude: f64,
    /// Base octave frequency. Default 5.
    pub frequency: f64,
    /// Multiplier on the base octave only. Default 0.2.
    pub base_flatness: f64,
    /// Noise-to-pixels displacement scale. Default 60.
    pub displacement: f64,
    /// Simulation seconds per wall-clock second. Default 1.
    pub speed: f64,
    /// Inset of the outline from every surface edge, in pixels. Default 60.
    pub border_offset: f64,
    /// Requested corner radius, clamped per frame. Default 40.
    pub border_radius: f64,
    /// Stroke width in pixels. Default 1.
    pub line_width: f64,
    /// Stroke color. Default `#DD8448`.
    pub color: Rgba8,
}

impl Default for BorderOptions {
    fn default() -> Self {
        let noise = NoiseConfig::default();
        Self {
            width: 354,
            height: 504,
            octaves: noise.octaves,
            lacunarity: noise.lacunarity,
            gain: noise.gain,
            amplitude: noise.base_amplitude,
            frequency: noise.base_frequency,
            base_flatness: noise.base_flatness,
            displacement: 60.0,
            speed: 1.0,
            border_offset: 60.0,
            border_radius: 40.0,
            line_width: 1.0,
            color: Rgba8::new(0xdd, 0x84, 0x48, 255),
        }
    }
}

impl BorderOptions {
    /// Green, tighter-cornered card preset with a calmer, faster field.
    pub fn showcase() -> Self {
        Self {
            width: 475,
            height: 625,
            octaves: 10,
            lacunarity: 1.6,
            gain: 0.7,
            amplitude: 0.075,
            frequency: 10.0,
            base_flatness: 0.2,
            displacement: 60.0,
            speed: 1.5,
            border_offset: 60.0,
            border_radius: 24.0,
            line_width: 1.0,
            color: Rgba8::new(0x00, 0xff, 0x88, 255),
        }
    }

    /// Parse options from JSON text.
    pub fn from_json_str(s: &str) -> BorderResult<Self> {
        serde_json::from_str(s).map_err(|e| BorderError::serde(e.to_string()))
    }

    /// Parse options from a JSON reader.
    pub fn from_json_reader(r: impl Read) -> BorderResult<Self> {
        serde_json::from_reader(r).map_err(|e| BorderError::serde(e.to_string()))
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Fractal noise parameters shared by both displacement axes.
    pub fn noise(&self) -> NoiseConfig {
        NoiseConfig {
            octaves: self.octaves,
            lacunarity: self.lacunarity,
            gain: self.gain,
            base_amplitude: self.amplitude,
            base_frequency: self.frequency,
            base_flatness: self.base_flatness,
        }
    }

    /// Stroke style.
    pub fn style(&self) -> RenderStyle {
        RenderStyle {
            color: self.color,
            line_width: self.line_width,
        }
    }
}

/// Options as written in JSON: every key optional.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OptionsDoc {
    width: Option<u32>,
    height: Option<u32>,
    octaves: Option<u32>,
    lacunarity: Option<f64>,
    gain: Option<f64>,
    amplitude: Option<f64>,
    frequency: Option<f64>,
    base_flatness: Option<f64>,
    displacement: Option<f64>,
    speed: Option<f64>,
    border_offset: Option<f64>,
    border_radius: Option<f64>,
    line_width: Option<f64>,
    color: Option<Rgba8>,
}

impl From<OptionsDoc> for BorderOptions {
    fn from(doc: OptionsDoc) -> Self {
        let d = Self::default();
        Self {
            width: set_or(doc.width, d.width),
            height: set_or(doc.height, d.height),
            octaves: set_or(doc.octaves, d.octaves),
            lacunarity: set_or(doc.lacunarity, d.lacunarity),
            gain: set_or(doc.gain, d.gain),
            amplitude: set_or(doc.amplitude, d.amplitude),
            frequency: set_or(doc.frequency, d.frequency),
            base_flatness: set_or(doc.base_flatness, d.base_flatness),
            displacement: set_or(doc.displacement, d.displacement),
            speed: set_or(doc.speed, d.speed),
            border_offset: set_or(doc.border_offset, d.border_offset),
            border_radius: set_or(doc.border_radius, d.border_radius),
            line_width: set_or(doc.line_width, d.line_width),
            color: doc.color.unwrap_or(d.color),
        }
    }
}

/// Numeric option values that count as "not set".
trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for u32 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl Unset for f64 {
    fn is_unset(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

fn set_or<T: Unset>(value: Option<T>, default: T) -> T {
    value.filter(|v| !v.is_unset()).unwrap_or(default)
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
