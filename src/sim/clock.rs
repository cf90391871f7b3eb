//! Match clock, scoring, and HUD time formatting
//!
//! The clock is fed wall-clock timestamps by the host and never reads time
//! itself, so tests drive it with synthetic values.

use crate::consts;

/// Countdown clock accumulating host-supplied timestamps
#[derive(Debug, Clone)]
pub struct MatchClock {
    total: f64,
    elapsed: f64,
    last_tick: Option<f64>,
}

impl MatchClock {
    pub fn new(total: f64) -> Self {
        Self {
            total,
            elapsed: 0.0,
            last_tick: None,
        }
    }

    /// Fold one timestamp into the clock and return the delta applied.
    ///
    /// The first observation contributes `dt = 0` (there is no prior tick to
    /// measure against); a timestamp earlier than the previous one also
    /// contributes 0.
    pub fn advance(&mut self, now: f64) -> f64 {
        let dt = match self.last_tick {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.elapsed += dt;
        dt
    }

    /// Time survived so far, in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time left on the countdown, floored at zero
    pub fn remaining(&self) -> f64 {
        (self.total - self.elapsed).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.remaining() <= 0.0
    }
}

/// Points for time survived: ten per second, accruing every tick
#[inline]
pub fn score_for(elapsed: f64) -> u32 {
    (elapsed * consts::POINTS_PER_SECOND).floor() as u32
}

/// Format seconds as `MM:SS.T` (tenths truncated, never rounded)
pub fn format_clock(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let whole = seconds as u64;
    let tenths = ((seconds - whole as f64) * 10.0) as u64;
    format!("{:02}:{:02}.{}", whole / 60, whole % 60, tenths)
}
