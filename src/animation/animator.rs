use crate::animation::schedule::{FrameHandle, FrameScheduler};
use crate::animation::step::{AnimationState, displaced_points, draw_border};
use crate::config::options::BorderOptions;
use crate::foundation::error::BorderResult;
use crate::geometry::border::BorderGeometry;
use crate::noise::fractal::NoiseConfig;
use crate::render::surface::{DrawSurface, RenderStyle};

/// Whether a frame callback is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimatorState {
    /// A frame has been requested from the scheduler.
    Running,
    /// No frame is requested.
    Stopped,
}

/// What a delivered frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FrameOutcome {
    /// The border was redrawn with this many points and the next frame was requested.
    Drawn {
        /// Points in the stroked polyline.
        points: usize,
    },
    /// No surface was attached; nothing was updated, drawn, or rescheduled.
    Skipped,
    /// The handle was not the outstanding request (stale, cancelled, or the animator is
    /// stopped); nothing happened.
    Ignored,
}

/// Per-frame driver: advances the simulation clock, samples the displaced outline, and
/// strokes it onto the surface, rescheduling itself until stopped.
pub struct BorderAnimator<S, F> {
    options: BorderOptions,
    noise: NoiseConfig,
    style: RenderStyle,
    surface: Option<S>,
    scheduler: F,
    state: AnimationState,
    pending: Option<FrameHandle>,
}

impl<S, F> BorderAnimator<S, F>
where
    S: DrawSurface,
    F: FrameScheduler,
{
    /// Bind to `surface`, size it from the options, and request the first frame.
    pub fn new(
        options: BorderOptions,
        mut surface: Option<S>,
        scheduler: F,
    ) -> BorderResult<Self> {
        if let Some(surface) = surface.as_mut() {
            surface.set_size(options.canvas())?;
        }

        let mut animator = Self {
            noise: options.noise(),
            style: options.style(),
            options,
            surface,
            scheduler,
            state: AnimationState::default(),
            pending: None,
        };
        animator.start();
        Ok(animator)
    }

    /// Request frames again. No-op while running.
    pub fn start(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let handle = self.scheduler.schedule();
        tracing::debug!(handle = handle.0, "border animation started");
        self.pending = Some(handle);
    }

    /// Cancel the outstanding frame. No-op while stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            tracing::debug!(handle = handle.0, "border animation stopped");
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AnimatorState {
        if self.pending.is_some() {
            AnimatorState::Running
        } else {
            AnimatorState::Stopped
        }
    }

    /// `true` while a frame is requested.
    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    /// Frame callback: the host delivers `handle` at monotonic `timestamp_ms`.
    ///
    /// A surface error is returned with the animator stopped; [`Self::start`] resumes it.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp_ms: f64,
    ) -> BorderResult<FrameOutcome> {
        if self.pending != Some(handle) {
            return Ok(FrameOutcome::Ignored);
        }
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!("no surface attached, frame skipped");
            return Ok(FrameOutcome::Skipped);
        };

        // The delivered handle is consumed; a failed draw leaves the animator stopped.
        self.pending = None;
        self.state.advance(timestamp_ms, self.options.speed);

        let geometry = BorderGeometry::fit(
            surface.size(),
            self.options.border_offset,
            self.options.border_radius,
        );
        let points = displaced_points(
            &geometry,
            &self.noise,
            self.options.displacement,
            self.state.elapsed,
        );
        let drawn = draw_border(surface, &points, &self.style)?;

        let next = self.scheduler.schedule();
        self.pending = Some(next);
        tracing::trace!(
            elapsed = self.state.elapsed,
            points = drawn,
            next = next.0,
            "frame drawn"
        );
        Ok(FrameOutcome::Drawn { points: drawn })
    }

    /// Deliver the outstanding frame at `timestamp_ms`, as the host would.
    pub fn tick(&mut self, timestamp_ms: f64) -> BorderResult<FrameOutcome> {
        match self.pending {
            Some(handle) => self.on_frame(handle, timestamp_ms),
            None => Ok(FrameOutcome::Ignored),
        }
    }

    /// Simulation clock.
    pub fn animation_state(&self) -> AnimationState {
        self.state
    }

    /// Options the animator was built with.
    pub fn options(&self) -> &BorderOptions {
        &self.options
    }

    /// The bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the bound surface, if any.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Bind a surface, sizing it from the options. Returns the previous one.
    pub fn attach_surface(&mut self, mut surface: S) -> BorderResult<Option<S>> {
        surface.set_size(self.options.canvas())?;
        Ok(self.surface.replace(surface))
    }

    /// Unbind the surface; later frames are skipped until one is attached.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that dispatch frames from it.
    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
