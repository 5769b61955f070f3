//! Mission lifecycle: the active working set, elapsed time, board summaries.

pub mod board;
pub mod elapsed;
pub mod tracker;

pub use board::{mission_cards, MissionBoard, MissionCard};
pub use elapsed::{elapsed_since, ElapsedTime};
pub use tracker::ActiveMissions;
