//! Mission board: per-mission cards and an aggregate summary of the active set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::elapsed::ElapsedTime;
use crate::domain::{Mission, MissionId};
use crate::stats::{total, SummaryStats};

/// What the board shows for one active mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionCard {
    pub id: MissionId,
    pub destination: String,
    pub offer_amount: f64,
    pub estimated_miles: f64,
    pub estimated_profit: f64,
    pub profitable: bool,
    pub elapsed: String,
}

impl MissionCard {
    pub fn new(mission: &Mission, now: DateTime<Utc>) -> Self {
        Self {
            id: mission.id.clone(),
            destination: mission.destination.clone(),
            offer_amount: mission.offer_amount,
            estimated_miles: mission.estimated_miles,
            estimated_profit: mission.estimated_profit,
            profitable: mission.is_profitable(),
            elapsed: ElapsedTime::between(mission.created_at, now).to_string(),
        }
    }
}

/// Totals across a set of missions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionBoard {
    pub mission_count: usize,
    pub profitable_count: usize,
    pub total_offer: f64,
    pub total_estimated_profit: f64,
    /// Spread of estimated profit; `None` for an empty board.
    pub profit_stats: Option<SummaryStats>,
}

impl MissionBoard {
    pub fn summarize(missions: &[Mission]) -> Self {
        let offers: Vec<f64> = missions.iter().map(|m| m.offer_amount).collect();
        let profits: Vec<f64> = missions.iter().map(|m| m.estimated_profit).collect();
        Self {
            mission_count: missions.len(),
            profitable_count: missions.iter().filter(|m| m.is_profitable()).count(),
            total_offer: total(&offers),
            total_estimated_profit: total(&profits),
            profit_stats: SummaryStats::compute(&profits),
        }
    }
}

pub fn mission_cards(missions: &[Mission], now: DateTime<Utc>) -> Vec<MissionCard> {
    missions.iter().map(|m| MissionCard::new(m, now)).collect()
}
