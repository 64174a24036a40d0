pub(crate) mod border;
pub(crate) mod rounded_rect;
