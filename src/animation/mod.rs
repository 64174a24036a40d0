pub(crate) mod animator;
pub(crate) mod schedule;
pub(crate) mod step;
