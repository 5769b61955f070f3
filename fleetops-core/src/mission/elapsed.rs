//! Elapsed-time display for active missions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole hours and minutes, floor-truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub hours: i64,
    pub minutes: i64,
}

impl ElapsedTime {
    /// Time from `start` to `now`. A `now` before `start` (clock skew between
    /// the store and the caller) counts as zero.
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total_minutes = (now - start).num_minutes().max(0);
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}m", self.minutes)
        }
    }
}

/// `"{h}h {m}m"` from one hour on, `"{m}m"` below that.
pub fn elapsed_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    ElapsedTime::between(created_at, now).to_string()
}
