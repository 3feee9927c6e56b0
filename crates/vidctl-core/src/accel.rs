use crate::state::AccelerationConfig;

/// Eased playback rate for the current tick, or `None` when the curve
/// has nothing to contribute.
///
/// `None` covers three cases: the curve is disarmed; the video has no
/// usable duration (live or unloaded media, where the window counts as
/// already elapsed); or the elapsed playing time has run past the
/// acceleration window. In the last case the curve silently stops
/// affecting the rate — `enabled` stays true with no further effect,
/// since the last computed value already sits at `final_speed`.
pub fn eased_rate(accel: &AccelerationConfig, current_time: f64, duration: f64) -> Option<f64> {
    if !accel.enabled {
        return None;
    }
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let window = duration * accel.window_fraction;
    let elapsed = current_time - accel.start_time;
    if window <= 0.0 || elapsed > window {
        return None;
    }
    let ramp = (accel.final_speed - accel.starting_speed) * (elapsed / window);
    Some((accel.starting_speed + ramp).min(accel.final_speed))
}
