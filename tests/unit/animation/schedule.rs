use super::*;

#[test]
fn manual_fires_in_request_order() {
    let mut s = ManualScheduler::new();
    let a = s.schedule();
    let b = s.schedule();
    assert_ne!(a, b);
    assert_eq!(s.pending(), 2);
    assert_eq!(s.fire(), Some(a));
    assert_eq!(s.fire(), Some(b));
    assert_eq!(s.fire(), None);
    assert_eq!(s.requested(), 2);
}

#[test]
fn manual_cancel_removes_only_pending_handles() {
    let mut s = ManualScheduler::new();
    let a = s.schedule();
    s.cancel(a);
    s.cancel(a);
    s.cancel(FrameHandle(99));
    assert_eq!(s.cancelled(), 1);
    assert_eq!(s.fire(), None);
}

#[test]
fn interval_stamps_each_refresh() {
    let mut s = IntervalScheduler::new(50.0);
    assert_eq!(s.interval_ms(), 20.0);
    assert_eq!(s.fire(), None);

    let h = s.schedule();
    assert_eq!(s.fire(), Some((h, 20.0)));
    assert_eq!(s.fire(), None);

    let h = s.schedule();
    assert_eq!(s.fire(), Some((h, 40.0)));
}

#[test]
fn interval_origin_offsets_first_frame() {
    let mut s = IntervalScheduler::with_origin(50.0, 1500.0);
    let h = s.schedule();
    assert_eq!(s.fire(), Some((h, 1520.0)));
}

#[test]
fn interval_cancel_drops_pending_frame() {
    let mut s = IntervalScheduler::new(60.0);
    let h = s.schedule();
    s.cancel(FrameHandle(h.0 + 1));
    s.cancel(h);
    assert_eq!(s.fire(), None);
}
