//! Boundary between store rows and the analytics engine.
//!
//! Fuel-log rows arrive loosely typed; rows without a usable efficiency
//! figure are dropped here so the classifier only ever sees positive values.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{EfficiencySample, FuelLogRecord};
use crate::error::IngestError;

/// Samples kept from a batch of rows, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestedSeries {
    pub samples: Vec<EfficiencySample>,
    /// Rows with a null, non-finite or non-positive figure.
    pub dropped: usize,
}

/// Convert rows to samples, dropping the unusable ones.
pub fn efficiency_series(rows: &[FuelLogRecord]) -> IngestedSeries {
    let samples: Vec<EfficiencySample> = rows.iter().filter_map(FuelLogRecord::to_sample).collect();
    let dropped = rows.len() - samples.len();
    if dropped > 0 {
        warn!(dropped, kept = samples.len(), "dropped fuel log rows without usable mpg");
    } else {
        debug!(kept = samples.len(), "ingested fuel log rows");
    }
    IngestedSeries { samples, dropped }
}

/// Parse a JSON array of fuel-log rows.
pub fn parse_fuel_logs(json: &str) -> Result<Vec<FuelLogRecord>, IngestError> {
    Ok(serde_json::from_str(json)?)
}

/// Check that timestamps never go backwards.
pub fn ensure_chronological(samples: &[EfficiencySample]) -> Result<(), IngestError> {
    match samples
        .windows(2)
        .position(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        Some(i) => Err(IngestError::OutOfOrder { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap() + Duration::days(n)
    }

    fn row(n: i64, mpg: Option<f64>) -> FuelLogRecord {
        FuelLogRecord { created_at: day(n), mpg }
    }

    #[test]
    fn drops_unusable_rows_and_keeps_order() {
        let rows = vec![
            row(0, Some(24.0)),
            row(1, None),
            row(2, Some(0.0)),
            row(3, Some(26.5)),
            row(4, Some(f64::NAN)),
            row(5, Some(-2.0)),
            row(6, Some(25.0)),
        ];
        let series = efficiency_series(&rows);
        assert_eq!(series.dropped, 4);
        let values: Vec<f64> = series.samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![24.0, 26.5, 25.0]);
        assert_eq!(series.samples[1].timestamp, day(3));
    }

    #[test]
    fn parses_store_json() {
        let json = r#"[
            {"created_at": "2024-02-01T12:00:00Z", "mpg": 23.4},
            {"created_at": "2024-02-05T12:00:00Z", "mpg": null}
        ]"#;
        let rows = parse_fuel_logs(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].mpg, Some(23.4));
        assert_eq!(efficiency_series(&rows).samples.len(), 1);
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(parse_fuel_logs("{not json"), Err(IngestError::Parse(_))));
    }

    #[test]
    fn chronological_accepts_ties() {
        let samples = vec![
            EfficiencySample::new(day(0), 20.0),
            EfficiencySample::new(day(0), 21.0),
            EfficiencySample::new(day(2), 22.0),
        ];
        assert!(ensure_chronological(&samples).is_ok());
        assert!(ensure_chronological(&[]).is_ok());
    }

    #[test]
    fn chronological_reports_first_regression() {
        let samples = vec![
            EfficiencySample::new(day(0), 20.0),
            EfficiencySample::new(day(3), 21.0),
            EfficiencySample::new(day(1), 22.0),
            EfficiencySample::new(day(0), 22.0),
        ];
        assert!(matches!(
            ensure_chronological(&samples),
            Err(IngestError::OutOfOrder { index: 2 })
        ));
    }
}
