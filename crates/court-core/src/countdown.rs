//! Time remaining until the next season opener.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Remaining time broken into display units.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Whether the target moment has been reached.
    #[must_use]
    pub const fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// Time from `now` until `target`. All units are zero once `target` has passed.
#[must_use]
pub fn until(now: NaiveDateTime, target: NaiveDateTime) -> Countdown {
    let remaining = target - now;
    if remaining <= chrono::TimeDelta::zero() {
        return Countdown::default();
    }

    let total = remaining.num_seconds();
    Countdown {
        days: total / 86_400,
        hours: (total / 3_600) % 24,
        minutes: (total / 60) % 60,
        seconds: total % 60,
    }
}
