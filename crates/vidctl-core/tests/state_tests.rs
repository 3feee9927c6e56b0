// Host-side tests for the control state containers.

use vidctl_core::*;

#[test]
fn defaults_are_normal_playback() {
    let state = ControlState::new();
    assert!((state.speed - 1.0).abs() < 1e-9);
    assert!((state.saturation - 1.0).abs() < 1e-9);
}

#[test]
fn setters_clamp_to_the_control_bounds() {
    let mut state = ControlState::new();
    state.set_speed(9.0);
    assert!((state.speed - MAX_SPEED).abs() < 1e-9);
    state.set_speed(-1.0);
    assert!(state.speed.abs() < 1e-9);

    state.set_saturation(7.5);
    assert!((state.saturation - MAX_SATURATION).abs() < 1e-9);
    state.set_saturation(-0.5);
    assert!(state.saturation.abs() < 1e-9);
}

#[test]
fn reset_restores_defaults() {
    let mut state = ControlState::new();
    state.set_speed(3.3);
    state.set_saturation(0.2);
    state.reset();
    assert_eq!(state, ControlState::default());
}

#[test]
fn acceleration_defaults() {
    let accel = AccelerationConfig::new();
    assert!(!accel.enabled);
    assert!((accel.final_speed - ACCEL_FINAL_SPEED).abs() < 1e-9);
    assert!((accel.window_fraction - ACCEL_WINDOW_FRACTION).abs() < 1e-9);
}

#[test]
fn arm_and_disarm() {
    let mut accel = AccelerationConfig::new();
    accel.arm(2.0, 33.5);
    assert!(accel.enabled);
    assert!((accel.starting_speed - 2.0).abs() < 1e-9);
    assert!((accel.start_time - 33.5).abs() < 1e-9);
    accel.disarm();
    assert!(!accel.enabled);
    // Disarm keeps the captured window parameters; re-arming overwrites
    assert!((accel.starting_speed - 2.0).abs() < 1e-9);
}

#[test]
fn snapshot_reflects_state_and_accel() {
    let mut state = ControlState::new();
    let mut accel = AccelerationConfig::new();
    state.set_speed(2.5);
    accel.arm(2.5, 0.0);
    let snapshot = StatusSnapshot::capture(&state, &accel);
    assert!((snapshot.speed - 2.5).abs() < 1e-9);
    assert!((snapshot.saturation - 1.0).abs() < 1e-9);
    assert!(snapshot.accelerating);
}
