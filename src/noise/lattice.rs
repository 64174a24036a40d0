use crate::foundation::math::smoothstep;
use crate::noise::hash::hash;

/// Row stride that decorrelates lattice rows from columns.
pub const ROW_STRIDE: f64 = 57.0;

/// Smoothstep-faded bilinear value noise over the integer lattice.
///
/// At integer coordinates `(i, j)` this is exactly `hash(i + j * 57)`.
pub fn noise2d(x: f64, y: f64) -> f64 {
    let i = x.floor();
    let j = y.floor();
    let fx = x - i;
    let fy = y - j;

    let a = hash(i + j * ROW_STRIDE);
    let b = hash(i + 1.0 + j * ROW_STRIDE);
    let c = hash(i + (j + 1.0) * ROW_STRIDE);
    let d = hash(i + 1.0 + (j + 1.0) * ROW_STRIDE);

    let ux = smoothstep(fx);
    let uy = smoothstep(fy);

    a * (1.0 - ux) * (1.0 - uy) + b * ux * (1.0 - uy) + c * (1.0 - ux) * uy + d * ux * uy
}

#[cfg(test)]
#[path = "../../tests/unit/noise/lattice.rs"]
mod tests;
