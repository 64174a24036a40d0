use crate::noise::lattice::noise2d;

/// Offset between independent noise axes, in lattice units along `x`.
pub const AXIS_SEED_SPACING: f64 = 100.0;
/// Rate at which the field evolves along its time axis, relative to `time * frequency`.
pub const TIME_SCALE: f64 = 0.3;

/// Octave-summed (fractal) noise parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseConfig {
    /// Number of octaves summed. Zero yields a flat field.
    pub octaves: u32,
    /// Frequency multiplier applied per octave.
    pub lacunarity: f64,
    /// Amplitude multiplier applied per octave.
    pub gain: f64,
    /// Amplitude of the first octave before flattening.
    pub base_amplitude: f64,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Extra multiplier on octave 0 only; damps low-frequency drift.
    pub base_flatness: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            octaves: 10,
            lacunarity: 1.6,
            gain: 0.6,
            base_amplitude: 0.2,
            base_frequency: 5.0,
            base_flatness: 0.2,
        }
    }
}

impl NoiseConfig {
    /// Sample the fractal field at position `x` and `time` on the axis identified by `axis_seed`.
    ///
    /// Octave `k` contributes `amp_k * noise2d(freq_k * x + axis_seed * 100, time * freq_k * 0.3)`
    /// with `freq_k = base_frequency * lacunarity^k`, `amp_k = base_amplitude * gain^k`, and
    /// `amp_0` additionally scaled by `base_flatness`.
    pub fn sample(&self, x: f64, time: f64, axis_seed: f64) -> f64 {
        let mut y = 0.0;
        let mut amplitude = self.base_amplitude;
        let mut frequency = self.base_frequency;

        for octave in 0..self.octaves {
            let octave_amplitude = if octave == 0 {
                amplitude * self.base_flatness
            } else {
                amplitude
            };

            y += octave_amplitude
                * noise2d(
                    frequency * x + axis_seed * AXIS_SEED_SPACING,
                    time * frequency * TIME_SCALE,
                );
            frequency *= self.lacunarity;
            amplitude *= self.gain;
        }

        y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/fractal.rs"]
mod tests;
