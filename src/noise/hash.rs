/// Deterministic scalar hash used as lattice values for [`crate::noise2d`].
///
/// `sin(x * 12.9898) * 43758.5453` reduced by a truncating remainder of 1, so the result lies in
/// `(-1, 1)`: negative sines yield negative fractions. Interpolation only relies on the values
/// being roughly uniform, not on their sign.
#[inline]
pub fn hash(x: f64) -> f64 {
    ((x * 12.9898).sin() * 43758.5453) % 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/noise/hash.rs"]
mod tests;
