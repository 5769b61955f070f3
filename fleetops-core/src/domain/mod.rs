//! Domain types for the fleet analytics engine.

pub mod ids;
pub mod mission;
pub mod sample;

pub use ids::{MissionId, VehicleId};
pub use mission::{ActualMiles, Mission, MissionStatus, TransitionRequest};
pub use sample::{EfficiencySample, FuelLogRecord};
