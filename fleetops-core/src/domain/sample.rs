//! Efficiency samples and the raw fuel-log rows they are derived from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One distance-per-fuel-unit reading.
///
/// A series of samples is consumed oldest-first; nothing in the engine
/// re-sorts it. `value` is expected to be finite and positive (see
/// [`crate::ingest`] for the boundary that enforces this).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencySample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl EfficiencySample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// True if the value can take part in averaging and ratio math.
    pub fn is_usable(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

/// A fuel-log row as the store returns it. `mpg` is null when the fill-up
/// could not be paired with a previous odometer reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLogRecord {
    pub created_at: DateTime<Utc>,
    pub mpg: Option<f64>,
}

impl FuelLogRecord {
    /// Convert to a sample, or `None` if the row has no usable figure.
    pub fn to_sample(&self) -> Option<EfficiencySample> {
        let sample = EfficiencySample::new(self.created_at, self.mpg?);
        sample.is_usable().then_some(sample)
    }
}
