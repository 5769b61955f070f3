//! The active-mission working set and the completion transition.
//!
//! Completion is two-phase. `complete` removes the mission from memory and
//! hands back a [`TransitionRequest`]; the caller persists it and, if the
//! write fails, puts the mission back with [`ActiveMissions::restore`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{ActualMiles, Mission, MissionId, TransitionRequest};

/// Active missions for one vehicle, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveMissions {
    missions: Vec<Mission>,
}

impl ActiveMissions {
    /// Build the working set from a store snapshot. The snapshot order is kept
    /// (the store lists newest first); records that are not `active` are
    /// dropped.
    pub fn new(snapshot: Vec<Mission>) -> Self {
        let total = snapshot.len();
        let missions: Vec<Mission> = snapshot.into_iter().filter(Mission::is_active).collect();
        if missions.len() != total {
            warn!(
                dropped = total - missions.len(),
                "non-active missions in active snapshot"
            );
        }
        Self { missions }
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.missions.iter()
    }

    pub fn as_slice(&self) -> &[Mission] {
        &self.missions
    }

    pub fn get(&self, id: &MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &MissionId) -> bool {
        self.get(id).is_some()
    }

    /// Complete a mission with the operator's raw mileage figure.
    ///
    /// Returns `None` and leaves the set untouched when `actual_miles` is not
    /// a finite number above zero, or when `id` is not in the set. The
    /// caller keeps the mission on screen and re-prompts.
    pub fn complete(
        &mut self,
        id: &MissionId,
        actual_miles: f64,
        now: DateTime<Utc>,
    ) -> Option<TransitionRequest> {
        let Some(miles) = ActualMiles::new(actual_miles) else {
            warn!(mission_id = %id, actual_miles, "rejected completion: invalid mileage");
            return None;
        };
        self.complete_with(id, miles, now)
    }

    /// Complete a mission with already-validated mileage.
    pub fn complete_with(
        &mut self,
        id: &MissionId,
        miles: ActualMiles,
        now: DateTime<Utc>,
    ) -> Option<TransitionRequest> {
        let Some(pos) = self.missions.iter().position(|m| &m.id == id) else {
            warn!(mission_id = %id, "rejected completion: mission not active");
            return None;
        };
        let mission = self.missions.remove(pos);
        debug!(
            mission_id = %mission.id,
            actual_miles = miles.value(),
            remaining = self.missions.len(),
            "mission completed"
        );
        Some(TransitionRequest::completed(mission.id, miles, now))
    }

    /// Put back a mission whose completion failed to persist.
    ///
    /// Keeps newest-first order by `created_at`. Returns false (and changes
    /// nothing) if the mission is already present or not active.
    pub fn restore(&mut self, mission: Mission) -> bool {
        if !mission.is_active() || self.contains(&mission.id) {
            return false;
        }
        let pos = self
            .missions
            .iter()
            .position(|m| m.created_at < mission.created_at)
            .unwrap_or(self.missions.len());
        debug!(mission_id = %mission.id, "restored mission after failed write");
        self.missions.insert(pos, mission);
        true
    }

    pub fn into_vec(self) -> Vec<Mission> {
        self.missions
    }
}
