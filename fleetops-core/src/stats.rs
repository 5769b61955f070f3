//! Aggregate statistics: mean, max and min over a numeric series.
//!
//! Pure functions: slice in, numbers out. An empty slice has no statistics,
//! so every entry point returns `Option` and callers branch on emptiness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean, maximum and minimum of a non-empty series, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl SummaryStats {
    /// Compute statistics over `values`. `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let average = mean(values)?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(Self { average, max, min })
    }

    /// Single-decimal rendering for the average/best/worst tiles.
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            average: format!("{:.1}", self.average),
            best: format!("{:.1}", self.max),
            worst: format!("{:.1}", self.min),
        }
    }
}

/// Display strings for a [`SummaryStats`]. Higher is better for efficiency
/// figures, so `best` is the maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDisplay {
    pub average: String,
    pub best: String,
    pub worst: String,
}

impl fmt::Display for SummaryDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "avg {} | best {} | worst {}", self.average, self.best, self.worst)
    }
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum of a series. Zero for an empty slice.
pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
