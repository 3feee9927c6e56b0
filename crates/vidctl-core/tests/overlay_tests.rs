// Host-side tests for the overlay fade debounce bookkeeping.

use vidctl_core::*;

#[test]
fn refresh_schedules_one_fade_delay_out() {
    let mut schedule = FadeSchedule::new();
    let deadline = schedule.refresh(1000.0);
    assert!((deadline - (1000.0 + FADE_DELAY_MS)).abs() < 1e-9);
    assert!(schedule.is_current(deadline));
}

#[test]
fn later_refresh_makes_earlier_timer_stale() {
    // Two refreshes within the fade delay: only the most recent timer
    // survives, and the fade lands FADE_DELAY_MS after the last one.
    let mut schedule = FadeSchedule::new();
    let first = schedule.refresh(0.0);
    let second = schedule.refresh(1500.0);

    assert!(!schedule.is_current(first), "first timer must not fire");
    assert!(schedule.is_current(second));
    assert!((second - (1500.0 + FADE_DELAY_MS)).abs() < 1e-9);
}

#[test]
fn deadline_tracks_the_latest_refresh_only() {
    let mut schedule = FadeSchedule::new();
    let mut last = 0.0;
    for i in 0..10 {
        last = schedule.refresh(i as f64 * 100.0);
    }
    assert!((schedule.visible_until() - last).abs() < 1e-9);
    assert!((last - (900.0 + FADE_DELAY_MS)).abs() < 1e-9);
}
