//! Mission records, lifecycle status, and the completion transition request.

use super::ids::{MissionId, VehicleId};
use crate::error::MissionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission lifecycle. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionStatus::Active => write!(f, "active"),
            MissionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A delivery job, as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    pub destination: String,
    pub offer_amount: f64,
    pub estimated_miles: f64,
    /// Offer minus projected cost, fixed at acceptance time. May be negative.
    pub estimated_profit: f64,
    pub created_at: DateTime<Utc>,
    pub status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Mission {
    pub fn is_active(&self) -> bool {
        self.status == MissionStatus::Active
    }

    /// Profit above zero. Break-even counts as unprofitable.
    pub fn is_profitable(&self) -> bool {
        self.estimated_profit > 0.0
    }

    /// Mirror a persisted completion onto this record.
    pub fn apply(&mut self, request: &TransitionRequest) -> Result<(), MissionError> {
        if request.mission_id != self.id {
            return Err(MissionError::IdMismatch {
                expected: self.id.clone(),
                found: request.mission_id.clone(),
            });
        }
        if self.status == MissionStatus::Completed {
            return Err(MissionError::AlreadyCompleted(self.id.clone()));
        }
        self.status = request.status;
        self.actual_miles = Some(request.actual_miles);
        self.completed_at = Some(request.completed_at);
        Ok(())
    }
}

/// Distance actually driven, entered at debrief. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ActualMiles(f64);

impl ActualMiles {
    /// Accept a finite value above zero.
    pub fn new(miles: f64) -> Option<Self> {
        (miles.is_finite() && miles > 0.0).then_some(Self(miles))
    }

    /// Parse operator input from the debrief form.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<f64>().ok().and_then(Self::new)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ActualMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completion the engine proposes; the caller persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub mission_id: MissionId,
    pub actual_miles: f64,
    pub completed_at: DateTime<Utc>,
    pub status: MissionStatus,
}

impl TransitionRequest {
    pub fn completed(mission_id: MissionId, miles: ActualMiles, completed_at: DateTime<Utc>) -> Self {
        Self {
            mission_id,
            actual_miles: miles.value(),
            completed_at,
            status: MissionStatus::Completed,
        }
    }
}
