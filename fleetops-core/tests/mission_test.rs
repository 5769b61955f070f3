//! Integration tests for the mission lifecycle.
//!
//! Covers the two-phase completion contract: the engine proposes, the caller
//! persists, and the caller restores on a failed write.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fleetops_core::mission::mission_cards;
use fleetops_core::{
    elapsed_since, ActiveMissions, ActualMiles, Mission, MissionBoard, MissionId, MissionStatus,
    ProfitConfig, ProfitProjection,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 6, 0, 0).unwrap()
}

fn store_snapshot() -> Vec<Mission> {
    let json = r#"[
        {"id": "m-3", "vehicle_id": "v-1", "destination": "Harbor Yard", "offer_amount": 220.0,
         "estimated_miles": 90.0, "estimated_profit": 166.0,
         "created_at": "2024-07-01T05:00:00Z", "status": "active"},
        {"id": "m-2", "vehicle_id": "v-1", "destination": "Airport Cargo", "offer_amount": 45.0,
         "estimated_miles": 80.0, "estimated_profit": -3.0,
         "created_at": "2024-07-01T04:30:00Z", "status": "active"},
        {"id": "m-1", "vehicle_id": "v-1", "destination": "Depot North", "offer_amount": 130.0,
         "estimated_miles": 50.0, "estimated_profit": 100.0,
         "created_at": "2024-06-30T22:00:00Z", "status": "active"}
    ]"#;
    serde_json::from_str(json).unwrap()
}

/// Stand-in for the store's write path.
struct FakeStore {
    fail_next: bool,
    written: Vec<fleetops_core::TransitionRequest>,
}

impl FakeStore {
    fn write(&mut self, req: &fleetops_core::TransitionRequest) -> Result<(), String> {
        if self.fail_next {
            self.fail_next = false;
            return Err("network unreachable".into());
        }
        self.written.push(req.clone());
        Ok(())
    }
}

#[test]
fn complete_then_persist() {
    let mut active = ActiveMissions::new(store_snapshot());
    let mut store = FakeStore { fail_next: false, written: vec![] };

    let now = t0() + Duration::minutes(15);
    let req = active.complete(&MissionId::new("m-2"), 42.5, now).unwrap();
    store.write(&req).unwrap();

    assert_eq!(active.len(), 2);
    assert!(!active.contains(&MissionId::new("m-2")));
    assert_eq!(store.written.len(), 1);
    let json = serde_json::to_value(&store.written[0]).unwrap();
    assert_eq!(json["actual_miles"], 42.5);
    assert_eq!(json["status"], "completed");
}

#[test]
fn failed_write_is_reverted_by_caller() {
    let mut active = ActiveMissions::new(store_snapshot());
    let before = active.clone();
    let mut store = FakeStore { fail_next: true, written: vec![] };

    let id = MissionId::new("m-3");
    let original = active.get(&id).cloned().unwrap();
    let req = active.complete(&id, 91.0, t0()).unwrap();
    assert!(store.write(&req).is_err());
    assert!(active.restore(original));
    assert_eq!(active, before);
}

#[test]
fn invalid_input_keeps_mission_active() {
    let mut active = ActiveMissions::new(store_snapshot());
    let before = active.clone();
    let id = MissionId::new("m-1");
    assert!(active.complete(&id, -5.0, t0()).is_none());
    assert!(active.complete(&id, f64::NAN, t0()).is_none());
    assert!(ActualMiles::parse("twelve").is_none());
    assert_eq!(active, before);
}

#[test]
fn parsed_form_input_completes() {
    let mut active = ActiveMissions::new(store_snapshot());
    let miles = ActualMiles::parse("52.3").unwrap();
    let req = active.complete_with(&MissionId::new("m-1"), miles, t0()).unwrap();
    assert_eq!(req.actual_miles, 52.3);

    let mut record = store_snapshot().pop().unwrap();
    record.apply(&req).unwrap();
    assert_eq!(record.status, MissionStatus::Completed);

    // Completion does not touch estimated profit; a final figure is opt-in.
    assert_eq!(record.estimated_profit, 100.0);
    let final_profit = ProfitProjection::for_actual(&record, &ProfitConfig { cost_per_mile: 0.5 })
        .unwrap()
        .profit;
    assert!((final_profit - 103.85).abs() < 1e-9);
}

#[test]
fn board_and_cards() {
    let active = ActiveMissions::new(store_snapshot());
    let now = t0();

    let cards = mission_cards(active.as_slice(), now);
    let elapsed: Vec<&str> = cards.iter().map(|c| c.elapsed.as_str()).collect();
    assert_eq!(elapsed, vec!["1h 0m", "1h 30m", "8h 0m"]);
    assert!(!cards[1].profitable);

    let board = MissionBoard::summarize(active.as_slice());
    assert_eq!(board.mission_count, 3);
    assert_eq!(board.profitable_count, 2);
    assert_eq!(board.total_offer, 395.0);
    assert_eq!(board.total_estimated_profit, 263.0);
}

#[test]
fn elapsed_examples() {
    assert_eq!(elapsed_since(t0(), t0() + Duration::minutes(90)), "1h 30m");
    assert_eq!(elapsed_since(t0(), t0() + Duration::minutes(45)), "45m");
}
