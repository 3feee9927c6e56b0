use crate::constants::FADE_DELAY_MS;

/// Debounce bookkeeping for the overlay's auto-fade.
///
/// Every refresh pushes `visible_until` out to `now + FADE_DELAY_MS`.
/// A fade timer armed for an earlier deadline is stale once a later
/// refresh lands; stale timers must not hide the overlay. The web
/// presenter cancels the pending host timer on each refresh and uses
/// [`FadeSchedule::is_current`] as a second guard in the fade callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FadeSchedule {
    visible_until: f64,
}

impl FadeSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a refresh at `now_ms` and return the new fade deadline.
    pub fn refresh(&mut self, now_ms: f64) -> f64 {
        self.visible_until = now_ms + FADE_DELAY_MS;
        self.visible_until
    }

    /// True when a fade timer armed for `deadline` is still the latest
    /// one scheduled.
    pub fn is_current(&self, deadline: f64) -> bool {
        deadline >= self.visible_until
    }

    pub fn visible_until(&self) -> f64 {
        self.visible_until
    }
}
