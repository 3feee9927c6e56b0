/// Control bounds, step sizes, and timing defaults.
///
/// These constants express intended behavior (clamp limits, step
/// granularity) and keep magic numbers out of the code.
// Playback-rate bounds and keyboard step
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.05;

// Saturation-filter bounds and keyboard step
pub const MIN_SATURATION: f64 = 0.0;
pub const MAX_SATURATION: f64 = 3.0;
pub const SATURATION_STEP: f64 = 0.1;

// Dynamic acceleration defaults: ramp toward this rate over the
// leading fraction of the video's duration
pub const ACCEL_FINAL_SPEED: f64 = 3.0;
pub const ACCEL_WINDOW_FRACTION: f64 = 0.6;

// Overlay auto-fade delay after the most recent refresh
pub const FADE_DELAY_MS: f64 = 3000.0;
