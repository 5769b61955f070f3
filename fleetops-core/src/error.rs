//! Error types. Insufficient data and rejected operator input are not
//! errors; they surface as `None` from the relevant operations.

use crate::domain::MissionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("transition for mission {found} applied to mission {expected}")]
    IdMismatch { expected: MissionId, found: MissionId },

    #[error("mission {0} is already completed")]
    AlreadyCompleted(MissionId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("parse fuel log JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sample {index} is older than the sample before it")]
    OutOfOrder { index: usize },
}
