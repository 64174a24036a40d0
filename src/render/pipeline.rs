use crate::animation::animator::{BorderAnimator, FrameOutcome};
use crate::animation::schedule::{FrameScheduler, IntervalScheduler, ManualScheduler};
use crate::config::options::BorderOptions;
use crate::foundation::error::{BorderError, BorderResult};
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawCommand, RecordingSurface};

/// Render one frame per timestamp (milliseconds, monotonic) on a fresh CPU surface.
///
/// This is the primary "one-shot" API for producing pixels from [`BorderOptions`]: it builds an
/// animator, delivers each requested frame at the next timestamp, and reads the surface back.
/// Returns **premultiplied** RGBA8 frames.
pub fn render_frames(
    options: &BorderOptions,
    timestamps: &[f64],
) -> BorderResult<Vec<FrameRGBA>> {
    let surface = CpuSurface::new(options.canvas())?;
    let mut animator =
        BorderAnimator::new(options.clone(), Some(surface), ManualScheduler::new())?;

    let mut frames = Vec::with_capacity(timestamps.len());
    for &ts in timestamps {
        let handle = animator
            .scheduler_mut()
            .fire()
            .ok_or_else(|| BorderError::render("animator stopped requesting frames"))?;
        animator.on_frame(handle, ts)?;
        frames.push(read_back(&animator)?);
    }
    Ok(frames)
}

/// Render the single frame drawn at `timestamp_ms`.
pub fn render_frame(options: &BorderOptions, timestamp_ms: f64) -> BorderResult<FrameRGBA> {
    render_frames(options, &[timestamp_ms])?
        .pop()
        .ok_or_else(|| BorderError::render("no frame rendered"))
}

/// Render `count` frames on a synthetic display refreshing at `fps`, the first callback
/// arriving one interval after `origin_ms`.
///
/// `on_frame` receives each frame index, its timestamp, and pixels as they are produced.
pub fn render_at_fps(
    options: &BorderOptions,
    fps: f64,
    origin_ms: f64,
    count: usize,
    mut on_frame: impl FnMut(usize, f64, &FrameRGBA) -> BorderResult<()>,
) -> BorderResult<()> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(BorderError::validation(format!(
            "fps must be positive and finite, got {fps}"
        )));
    }

    let surface = CpuSurface::new(options.canvas())?;
    let scheduler = IntervalScheduler::with_origin(fps, origin_ms);
    let mut animator = BorderAnimator::new(options.clone(), Some(surface), scheduler)?;

    for index in 0..count {
        let Some((handle, ts)) = animator.scheduler_mut().fire() else {
            break;
        };
        animator.on_frame(handle, ts)?;
        let frame = read_back(&animator)?;
        on_frame(index, ts, &frame)?;
    }
    Ok(())
}

/// Draw calls issued for the frame at `timestamp_ms`, without rasterizing.
pub fn trace_frame(options: &BorderOptions, timestamp_ms: f64) -> BorderResult<Vec<DrawCommand>> {
    let surface = RecordingSurface::new(options.canvas());
    let mut animator =
        BorderAnimator::new(options.clone(), Some(surface), ManualScheduler::new())?;
    if let Some(s) = animator.surface_mut() {
        s.take_commands();
    }

    match animator.tick(timestamp_ms)? {
        FrameOutcome::Drawn { .. } => {}
        other => {
            return Err(BorderError::render(format!(
                "frame was not drawn: {other:?}"
            )));
        }
    }

    Ok(animator
        .surface_mut()
        .map(RecordingSurface::take_commands)
        .unwrap_or_default())
}

fn read_back<F: FrameScheduler>(
    animator: &BorderAnimator<CpuSurface, F>,
) -> BorderResult<FrameRGBA> {
    animator
        .surface()
        .map(CpuSurface::frame)
        .ok_or_else(|| BorderError::render("surface detached during rendering"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
