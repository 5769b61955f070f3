//! FleetOps Core — efficiency trends, mission lifecycle, aggregate statistics.
//!
//! Pure, synchronous computations over snapshots the caller fetched from the
//! store:
//! - Trend classifier (recent window vs. baseline window, ±5% noise band)
//! - Mission lifecycle tracker (active → completed, elapsed time, board totals)
//! - Aggregate statistics (mean / max / min)
//! - Profit projection and the fuel-log ingest boundary
//!
//! Nothing here performs I/O or reads the clock; `now` is always a parameter.

pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod mission;
pub mod profit;
pub mod stats;
pub mod trend;

pub use config::{AnalyticsConfig, ProfitConfig, TrendConfig};
pub use domain::{
    ActualMiles, EfficiencySample, FuelLogRecord, Mission, MissionId, MissionStatus,
    TransitionRequest, VehicleId,
};
pub use error::{ConfigError, IngestError, MissionError};
pub use mission::{elapsed_since, ActiveMissions, ElapsedTime, MissionBoard, MissionCard};
pub use profit::ProfitProjection;
pub use stats::SummaryStats;
pub use trend::{Trend, TrendAdvisory, TrendClassifier, TrendComparison, TrendReport};
