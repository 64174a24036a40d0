pub(crate) mod fractal;
pub(crate) mod hash;
pub(crate) mod lattice;
