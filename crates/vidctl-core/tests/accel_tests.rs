// Host-side tests for the acceleration easing curve.

use vidctl_core::*;

fn armed(starting_speed: f64, start_time: f64) -> AccelerationConfig {
    let mut accel = AccelerationConfig::new();
    accel.arm(starting_speed, start_time);
    accel
}

#[test]
fn ramps_linearly_across_the_window() {
    // duration 100s, window fraction 0.6 -> 60s window, 1.0 -> 3.0
    let accel = armed(1.0, 0.0);
    let rate = eased_rate(&accel, 30.0, 100.0).unwrap();
    assert!((rate - 2.0).abs() < 1e-9, "midpoint rate was {}", rate);

    let rate = eased_rate(&accel, 15.0, 100.0).unwrap();
    assert!((rate - 1.5).abs() < 1e-9);

    let rate = eased_rate(&accel, 60.0, 100.0).unwrap();
    assert!((rate - 3.0).abs() < 1e-9, "end-of-window rate was {}", rate);
}

#[test]
fn starts_at_the_starting_speed() {
    let accel = armed(1.4, 0.0);
    let rate = eased_rate(&accel, 0.0, 100.0).unwrap();
    assert!((rate - 1.4).abs() < 1e-9);
}

#[test]
fn inactive_past_the_window() {
    // Elapsed beyond the window: the curve stops contributing and the
    // rate keeps whatever the last tick wrote (the final speed).
    let accel = armed(1.0, 0.0);
    assert_eq!(eased_rate(&accel, 90.0, 100.0), None);
    assert!(accel.enabled, "the flag is not auto-disabled");
}

#[test]
fn disabled_curve_contributes_nothing() {
    let accel = AccelerationConfig::new();
    assert_eq!(eased_rate(&accel, 30.0, 100.0), None);
}

#[test]
fn unusable_duration_is_not_an_error() {
    // Live or unloaded media: zero or NaN duration means the window
    // counts as already elapsed.
    let accel = armed(1.0, 0.0);
    assert_eq!(eased_rate(&accel, 5.0, 0.0), None);
    assert_eq!(eased_rate(&accel, 5.0, f64::NAN), None);
    assert_eq!(eased_rate(&accel, 5.0, f64::INFINITY), None);
    assert_eq!(eased_rate(&accel, 5.0, -10.0), None);
}

#[test]
fn window_start_follows_the_arm_time() {
    // Armed at t=40 on a 100s video: window spans 40..100
    let accel = armed(1.0, 40.0);
    let rate = eased_rate(&accel, 70.0, 100.0).unwrap();
    assert!((rate - 2.0).abs() < 1e-9);
    assert_eq!(eased_rate(&accel, 100.5, 100.0), None);
}

#[test]
fn never_exceeds_the_final_speed() {
    let accel = armed(1.0, 0.0);
    for t in 0..=60 {
        if let Some(rate) = eased_rate(&accel, t as f64, 100.0) {
            assert!(rate <= accel.final_speed + 1e-9);
            assert!(rate >= accel.starting_speed - 1e-9);
        }
    }
}

#[test]
fn full_window_fraction_covers_the_whole_duration() {
    let mut accel = armed(1.0, 0.0);
    accel.window_fraction = 1.0;
    let rate = eased_rate(&accel, 50.0, 100.0).unwrap();
    assert!((rate - 2.0).abs() < 1e-9);
}
