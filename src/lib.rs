//! Electric border: a continuously animated, organic-looking stroked outline around a
//! rectangular panel.
//!
//! Every frame, a rounded rectangle is sampled at uniform arc length, each sample is pushed
//! off the outline by two independent fractal noise fields (one per axis) that drift over
//! time, and the result is stroked as one closed polyline.
//!
//! # Pipeline overview
//!
//! 1. **Noise**: [`hash`] → [`noise2d`] (smoothstep lattice noise) → [`NoiseConfig::sample`]
//!    (octave sum with a flattened base octave)
//! 2. **Geometry**: [`BorderGeometry::fit`] insets the canvas; [`RoundedRect::point_at`] maps
//!    `t ∈ [0, 1]` to the outline by arc length
//! 3. **Step**: [`AnimationState::advance`] + [`displaced_points`] + [`draw_border`]
//! 4. **Drive**: [`BorderAnimator`] reschedules itself through a [`FrameScheduler`] and draws
//!    into any [`DrawSurface`] ([`CpuSurface`] rasterizes with `vello_cpu`)
//!
//! The core is deterministic: identical options and frame timestamps produce identical
//! drawing commands and pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod geometry;
mod noise;
mod render;

pub use animation::animator::{AnimatorState, BorderAnimator, FrameOutcome};
pub use animation::schedule::{FrameHandle, FrameScheduler, IntervalScheduler, ManualScheduler};
pub use animation::step::{AnimationState, NOISE_SPAN, displaced_points, draw_border};
pub use config::options::BorderOptions;
pub use foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{BorderError, BorderResult};
pub use foundation::math::{smoothstep, unpremultiply_in_place};
pub use geometry::border::BorderGeometry;
pub use geometry::rounded_rect::RoundedRect;
pub use noise::fractal::{AXIS_SEED_SPACING, NoiseConfig, TIME_SCALE};
pub use noise::hash::hash;
pub use noise::lattice::{ROW_STRIDE, noise2d};
pub use render::cpu::CpuSurface;
pub use render::frame::FrameRGBA;
pub use render::pipeline::{render_at_fps, render_frame, render_frames, trace_frame};
pub use render::surface::{DrawCommand, DrawSurface, RecordingSurface, RenderStyle};
