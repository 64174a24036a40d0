use super::*;
use crate::animation::schedule::{IntervalScheduler, ManualScheduler};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::BorderError;
use crate::render::surface::{DrawCommand, RecordingSurface};

type Recorder = BorderAnimator<RecordingSurface, ManualScheduler>;

fn recorder(options: BorderOptions) -> Recorder {
    BorderAnimator::new(
        options,
        Some(RecordingSurface::new(Canvas::new(1, 1))),
        ManualScheduler::new(),
    )
    .unwrap()
}

/// Fire pending frames from the scheduler at the given timestamps, like a display would.
fn pump(animator: &mut Recorder, timestamps: &[f64]) -> Vec<FrameOutcome> {
    let mut out = Vec::new();
    for &ts in timestamps {
        let Some(handle) = animator.scheduler_mut().fire() else {
            continue;
        };
        out.push(animator.on_frame(handle, ts).unwrap());
    }
    out
}

#[test]
fn construction_sizes_surface_and_starts_running() {
    let a = recorder(BorderOptions::default());
    assert!(a.is_running());
    assert_eq!(a.scheduler().requested(), 1);
    let surface = a.surface().unwrap();
    assert_eq!(surface.size(), Canvas::new(354, 504));
    assert_eq!(
        surface.commands(),
        &[DrawCommand::SetSize {
            canvas: Canvas::new(354, 504)
        }]
    );
}

#[test]
fn each_frame_draws_and_reschedules() {
    let mut a = recorder(BorderOptions::showcase());
    let outcomes = pump(&mut a, &[16.0, 32.0, 48.0]);
    assert_eq!(outcomes, vec![FrameOutcome::Drawn { points: 936 }; 3]);
    assert_eq!(a.scheduler().requested(), 4);
    assert_eq!(a.scheduler().pending(), 1);
    assert_eq!(a.surface().unwrap().stroke_count(), 3);
}

#[test]
fn clock_follows_timestamps_times_speed() {
    let mut a = recorder(BorderOptions::showcase());
    pump(&mut a, &[1000.0, 1500.0]);
    let s = a.animation_state();
    assert_eq!(s.last_timestamp_ms, 1500.0);
    assert!((s.elapsed - 1.5 * 1.5).abs() < 1e-12);
}

#[test]
fn stop_prevents_further_draws() {
    let mut a = recorder(BorderOptions::default());
    pump(&mut a, &[16.0]);
    a.stop();
    assert!(!a.is_running());
    assert_eq!(a.scheduler().cancelled(), 1);

    let strokes = a.surface().unwrap().stroke_count();
    let outcomes = pump(&mut a, &[32.0, 48.0, 64.0]);
    assert!(outcomes.is_empty());
    assert_eq!(a.tick(80.0).unwrap(), FrameOutcome::Ignored);
    assert_eq!(a.surface().unwrap().stroke_count(), strokes);
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut a = recorder(BorderOptions::default());
    a.start();
    a.start();
    assert_eq!(a.scheduler().requested(), 1);

    a.stop();
    a.stop();
    assert_eq!(a.scheduler().cancelled(), 1);
    assert_eq!(a.state(), AnimatorState::Stopped);
}

#[test]
fn start_after_stop_resumes_with_kept_clock() {
    let mut a = recorder(BorderOptions::default());
    pump(&mut a, &[100.0]);
    a.stop();
    a.start();
    assert!(a.is_running());
    pump(&mut a, &[300.0]);
    let s = a.animation_state();
    assert!((s.elapsed - 0.3).abs() < 1e-12);
}

#[test]
fn stale_handles_are_ignored() {
    let mut a = recorder(BorderOptions::default());
    let first = a.scheduler_mut().fire().unwrap();
    a.on_frame(first, 16.0).unwrap();
    assert_eq!(a.on_frame(first, 32.0).unwrap(), FrameOutcome::Ignored);
    assert_eq!(a.surface().unwrap().stroke_count(), 1);
}

#[test]
fn missing_surface_skips_frame_without_side_effects() {
    let mut a: Recorder =
        BorderAnimator::new(BorderOptions::default(), None, ManualScheduler::new()).unwrap();
    assert!(a.is_running());

    let outcomes = pump(&mut a, &[16.0]);
    assert_eq!(outcomes, vec![FrameOutcome::Skipped]);
    assert_eq!(a.animation_state(), AnimationState::default());
    assert!(a.is_running());
    assert_eq!(a.scheduler().requested(), 1);
}

#[test]
fn reattached_surface_draws_on_next_delivery() {
    let mut a = recorder(BorderOptions::default());
    let detached = a.detach_surface().unwrap();
    assert_eq!(a.tick(16.0).unwrap(), FrameOutcome::Skipped);

    assert!(a.attach_surface(detached).unwrap().is_none());
    assert!(matches!(a.tick(32.0).unwrap(), FrameOutcome::Drawn { .. }));
    assert!((a.animation_state().elapsed - 0.032).abs() < 1e-12);
}

#[test]
fn identical_inputs_draw_identical_points() {
    let timestamps = [16.7, 33.4, 50.1, 66.8, 1000.0];
    let mut a = recorder(BorderOptions::showcase());
    let mut b = recorder(BorderOptions::showcase());
    pump(&mut a, &timestamps);
    pump(&mut b, &timestamps);

    let pa = a.surface().unwrap().path_points();
    let pb = b.surface().unwrap().path_points();
    assert_eq!(pa.len(), pb.len());
    for (p, q) in pa.iter().zip(&pb) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
    }
}

#[test]
fn frames_change_as_time_advances() {
    let mut a = recorder(BorderOptions::default());
    a.surface_mut().unwrap().take_commands();
    pump(&mut a, &[16.0]);
    let first = a.surface_mut().unwrap().take_commands();
    pump(&mut a, &[500.0]);
    let second = a.surface_mut().unwrap().take_commands();
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn interval_scheduler_drives_the_loop() {
    let mut a = BorderAnimator::new(
        BorderOptions::default(),
        Some(RecordingSurface::new(Canvas::new(1, 1))),
        IntervalScheduler::new(60.0),
    )
    .unwrap();
    for _ in 0..3 {
        let (handle, ts) = a.scheduler_mut().fire().unwrap();
        assert!(matches!(a.on_frame(handle, ts).unwrap(), FrameOutcome::Drawn { .. }));
    }
    assert!((a.animation_state().last_timestamp_ms - 50.0).abs() < 1e-9);

    a.stop();
    assert!(a.scheduler_mut().fire().is_none());
}

/// Surface whose strokes always fail.
struct BrokenSurface(Canvas);

impl DrawSurface for BrokenSurface {
    fn set_size(&mut self, canvas: Canvas) -> BorderResult<()> {
        self.0 = canvas;
        Ok(())
    }
    fn size(&self) -> Canvas {
        self.0
    }
    fn clear_rect(&mut self, _rect: Rect) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _p: Point) {}
    fn line_to(&mut self, _p: Point) {}
    fn close_path(&mut self) {}
    fn stroke(&mut self, _style: &RenderStyle) -> BorderResult<()> {
        Err(BorderError::render("device lost"))
    }
}

#[test]
fn failed_draw_leaves_the_animator_stopped_and_restartable() {
    let mut a = BorderAnimator::new(
        BorderOptions::default(),
        Some(BrokenSurface(Canvas::new(1, 1))),
        ManualScheduler::new(),
    )
    .unwrap();

    let handle = a.scheduler_mut().fire().unwrap();
    assert!(a.on_frame(handle, 16.0).is_err());
    assert!(!a.is_running());
    assert_eq!(a.state(), AnimatorState::Stopped);
    assert_eq!(a.scheduler().pending(), 0);

    a.start();
    assert!(a.is_running());
    assert_eq!(a.scheduler().pending(), 1);
}

#[test]
fn zero_width_stroke_keeps_the_loop_running() {
    let options = BorderOptions {
        line_width: 0.0,
        ..BorderOptions::default()
    };
    let mut a = recorder(options);
    let outcomes = pump(&mut a, &[16.0, 32.0]);
    assert!(outcomes
        .iter()
        .all(|o| matches!(o, FrameOutcome::Drawn { .. })));
    assert!(a.is_running());
    assert_eq!(a.scheduler().pending(), 1);
}
