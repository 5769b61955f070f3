//! Mission profit projection: offer minus distance times cost per mile.
//!
//! Completing a mission never recomputes its profit. Callers with a
//! cost-per-mile figure can project a final number from actual miles here.

use serde::{Deserialize, Serialize};

use crate::config::ProfitConfig;
use crate::domain::Mission;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitProjection {
    pub offer_amount: f64,
    pub miles: f64,
    pub cost_per_mile: f64,
    pub cost: f64,
    pub profit: f64,
}

impl ProfitProjection {
    pub fn estimate(offer_amount: f64, miles: f64, cost_per_mile: f64) -> Self {
        let cost = miles * cost_per_mile;
        Self {
            offer_amount,
            miles,
            cost_per_mile,
            cost,
            profit: offer_amount - cost,
        }
    }

    /// Projection over the mission's estimated distance.
    pub fn for_estimate(mission: &Mission, config: &ProfitConfig) -> Self {
        Self::estimate(mission.offer_amount, mission.estimated_miles, config.cost_per_mile)
    }

    /// Projection over actual distance; `None` until the mission has it.
    pub fn for_actual(mission: &Mission, config: &ProfitConfig) -> Option<Self> {
        let miles = mission.actual_miles?;
        Some(Self::estimate(mission.offer_amount, miles, config.cost_per_mile))
    }

    /// Profit per mile driven; zero for zero miles.
    pub fn profit_per_mile(&self) -> f64 {
        if self.miles <= 0.0 {
            return 0.0;
        }
        self.profit / self.miles
    }

    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }
}
