use std::collections::VecDeque;

/// Opaque token for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameHandle(pub u64);

/// Host frame-scheduling primitive (one callback per display refresh).
///
/// The host later delivers a requested frame by calling
/// [`crate::BorderAnimator::on_frame`] with the handle and a monotonic timestamp in milliseconds.
pub trait FrameScheduler {
    /// Request a single future frame callback.
    fn schedule(&mut self) -> FrameHandle;

    /// Cancel a requested frame. Unknown or already-delivered handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Scheduler driven entirely by the caller: frames fire only when [`ManualScheduler::fire`]
/// is called. Keeps request/cancel counts for assertions.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    /// Build an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch the oldest pending frame, removing it from the queue.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Frames requested and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total `schedule` calls received.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total `cancel` calls that removed a pending frame.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        self.requested += 1;
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Some(pos) = self.pending.iter().position(|h| *h == handle) {
            self.pending.remove(pos);
            self.cancelled += 1;
        }
    }
}

/// Synthetic display that refreshes at a fixed rate.
///
/// Each fired frame is stamped one interval after the previous one, starting from `origin_ms`.
#[derive(Clone, Debug)]
pub struct IntervalScheduler {
    interval_ms: f64,
    now_ms: f64,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl IntervalScheduler {
    /// Refresh at `fps` frames per second with the clock starting at zero.
    pub fn new(fps: f64) -> Self {
        Self::with_origin(fps, 0.0)
    }

    /// Refresh at `fps` with the clock starting at `origin_ms` (time already elapsed before
    /// the first callback, e.g. page load).
    pub fn with_origin(fps: f64, origin_ms: f64) -> Self {
        Self {
            interval_ms: 1000.0 / fps,
            now_ms: origin_ms,
            next_id: 0,
            pending: None,
        }
    }

    /// Milliseconds between refreshes.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Advance the display by one refresh and dispatch the pending frame, if any.
    ///
    /// Returns the handle and its timestamp. The clock does not advance while nothing is pending.
    pub fn fire(&mut self) -> Option<(FrameHandle, f64)> {
        let handle = self.pending.take()?;
        self.now_ms += self.interval_ms;
        Some((handle, self.now_ms))
    }
}

impl FrameScheduler for IntervalScheduler {
    fn schedule(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
