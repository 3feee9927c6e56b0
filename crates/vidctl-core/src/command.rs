use crate::constants::*;
use crate::state::{AccelerationConfig, ControlState};

/// A recognized keyboard command. Unrecognized keys map to nothing and
/// must not trigger a re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SpeedDown,
    SpeedUp,
    SaturationDown,
    SaturationUp,
    ToggleAcceleration,
    Reset,
}

/// Playback sample taken from the acting video at the moment a key is
/// handled: its current rate and its video-clock position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackProbe {
    pub rate: f64,
    pub clock: f64,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "[" => Some(Command::SpeedDown),
        "]" => Some(Command::SpeedUp),
        "{" => Some(Command::SaturationDown),
        "}" => Some(Command::SaturationUp),
        ":" => Some(Command::ToggleAcceleration),
        "`" => Some(Command::Reset),
        _ => None,
    }
}

/// Apply a command to the control state.
///
/// Speed steps are relative to the probed rate, not the stored speed:
/// the acceleration engine may have written a newer rate to the
/// element since the last keypress, and the element is authoritative.
pub fn apply(
    cmd: Command,
    state: &mut ControlState,
    accel: &mut AccelerationConfig,
    probe: PlaybackProbe,
) {
    match cmd {
        Command::SpeedDown => state.set_speed(probe.rate - SPEED_STEP),
        Command::SpeedUp => state.set_speed(probe.rate + SPEED_STEP),
        Command::SaturationDown => state.set_saturation(state.saturation - SATURATION_STEP),
        Command::SaturationUp => state.set_saturation(state.saturation + SATURATION_STEP),
        Command::ToggleAcceleration => {
            if accel.enabled {
                accel.disarm();
            } else {
                accel.arm(probe.rate, probe.clock);
            }
        }
        Command::Reset => {
            state.reset();
            accel.disarm();
        }
    }
}
