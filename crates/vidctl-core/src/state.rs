//! Control-side state types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs
//! and carry no DOM coupling. The web frontend owns one instance of
//! each inside its context object and threads them through the
//! keyboard interpreter, the acceleration engine, and the overlay.

use crate::constants::*;

/// Current playback speed and saturation. Every mutation path clamps
/// to the closed control bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    pub speed: f64,
    pub saturation: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            speed: 1.0,
            saturation: 1.0,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn set_saturation(&mut self, saturation: f64) {
        self.saturation = saturation.clamp(MIN_SATURATION, MAX_SATURATION);
    }

    /// Back to normal playback: speed 1, saturation 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Configuration and status of the time-based acceleration curve.
///
/// While `enabled`, `start_time` is the video-clock second at which the
/// curve was armed for the currently accelerating video.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationConfig {
    pub enabled: bool,
    pub starting_speed: f64,
    pub final_speed: f64,
    pub window_fraction: f64,
    pub start_time: f64,
}

impl Default for AccelerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            starting_speed: 1.0,
            final_speed: ACCEL_FINAL_SPEED,
            window_fraction: ACCEL_WINDOW_FRACTION,
            start_time: 0.0,
        }
    }
}

impl AccelerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the curve: ramp from the video's current rate, starting now
    /// on the video clock.
    pub fn arm(&mut self, rate: f64, clock: f64) {
        self.enabled = true;
        self.starting_speed = rate;
        self.start_time = clock;
    }

    pub fn disarm(&mut self) {
        self.enabled = false;
    }
}

/// Read-only view of the control state rendered by the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusSnapshot {
    pub speed: f64,
    pub saturation: f64,
    pub accelerating: bool,
}

impl StatusSnapshot {
    pub fn capture(state: &ControlState, accel: &AccelerationConfig) -> Self {
        Self {
            speed: state.speed,
            saturation: state.saturation,
            accelerating: accel.enabled,
        }
    }
}
