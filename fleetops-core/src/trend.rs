//! Fuel-efficiency trend classification.
//!
//! The most recent `window` samples are averaged and compared against the
//! average of the `window` samples immediately before them. A percent change
//! beyond the noise band in either direction moves the signal off `stable`;
//! a single unusual fill-up should not.
//!
//! Input is an oldest-first series for one vehicle. It is never re-sorted.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::TrendConfig;
use crate::domain::EfficiencySample;
use crate::error::ConfigError;
use crate::stats::{mean, SummaryStats};

/// Three-way efficiency signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Outcome of comparing the recent window against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    pub trend: Trend,
    /// Mean of the recent window; `None` when the series is shorter than one window.
    pub recent_average: Option<f64>,
    /// Mean of the baseline window; `None` when there is no baseline.
    pub prior_average: Option<f64>,
    /// `(recent - prior) / prior * 100`; `None` when not computable.
    pub percent_delta: Option<f64>,
}

impl TrendComparison {
    fn stable() -> Self {
        Self {
            trend: Trend::Stable,
            recent_average: None,
            prior_average: None,
            percent_delta: None,
        }
    }
}

/// Full result for a non-empty series: the signal plus summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub sample_count: usize,
    #[serde(flatten)]
    pub comparison: TrendComparison,
    pub stats: SummaryStats,
}

impl TrendReport {
    pub fn trend(&self) -> Trend {
        self.comparison.trend
    }

    /// Operator-facing alert for a moving trend, `None` while stable.
    pub fn advisory(&self) -> Option<TrendAdvisory> {
        match self.comparison.trend {
            Trend::Declining => Some(TrendAdvisory {
                trend: Trend::Declining,
                headline: "EFFICIENCY DROPPING",
                message: "Check Maintenance - Your MPG trend is declining. Consider inspecting \
                          tire pressure, air filter, and engine performance.",
            }),
            Trend::Improving => Some(TrendAdvisory {
                trend: Trend::Improving,
                headline: "EFFICIENCY IMPROVING",
                message: "Your MPG trend is improving. Great work maintaining your vehicle!",
            }),
            Trend::Stable => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendAdvisory {
    pub trend: Trend,
    pub headline: &'static str,
    pub message: &'static str,
}

impl fmt::Display for TrendAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.headline, self.message)
    }
}

/// Stateless classifier; one instance can serve every vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrendClassifier {
    config: TrendConfig,
}

impl TrendClassifier {
    pub fn new(config: TrendConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    /// Classify a series and summarise it. `None` for an empty series; the
    /// caller renders "no data" separately from a stable trend.
    pub fn analyze(&self, samples: &[EfficiencySample]) -> Option<TrendReport> {
        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        let stats = SummaryStats::compute(&values)?;
        let comparison = self.compare(&values);
        debug!(
            samples = values.len(),
            trend = %comparison.trend,
            percent_delta = ?comparison.percent_delta,
            "classified efficiency trend"
        );
        Some(TrendReport {
            sample_count: values.len(),
            comparison,
            stats,
        })
    }

    /// Classification only.
    pub fn classify(&self, values: &[f64]) -> Trend {
        self.compare(values).trend
    }

    /// Compare the last window against the baseline before it.
    pub fn compare(&self, values: &[f64]) -> TrendComparison {
        let window = self.config.window;
        let n = values.len();
        if n < window {
            return TrendComparison::stable();
        }

        let recent_start = n - window;
        let recent_average = mean(&values[recent_start..]);

        let prior_start = recent_start.saturating_sub(window);
        let prior = &values[prior_start..recent_start];
        let baseline_ready = if self.config.partial_prior_window {
            !prior.is_empty()
        } else {
            prior.len() == window
        };
        if !baseline_ready {
            return TrendComparison {
                recent_average,
                ..TrendComparison::stable()
            };
        }

        let prior_average = mean(prior);
        let (Some(recent), Some(baseline)) = (recent_average, prior_average) else {
            return TrendComparison::stable();
        };

        if !(baseline.is_finite() && baseline > 0.0) {
            warn!(baseline, "non-positive efficiency baseline, trend held stable");
            return TrendComparison {
                trend: Trend::Stable,
                recent_average,
                prior_average,
                percent_delta: None,
            };
        }

        let delta = (recent - baseline) / baseline * 100.0;
        let threshold = self.config.threshold_pct;
        let trend = if delta < -threshold {
            Trend::Declining
        } else if delta > threshold {
            Trend::Improving
        } else {
            Trend::Stable
        };

        TrendComparison {
            trend,
            recent_average,
            prior_average,
            percent_delta: Some(delta),
        }
    }
}
