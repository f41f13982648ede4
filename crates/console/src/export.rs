// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of mission history.

use chrono_tz::Tz;
use patrol_log_domain::{MissionLog, format_date_time};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// One exported history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryCsvRow {
    pub kind: String,
    pub mission_id: u64,
    pub mission_type: String,
    pub details: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub patrol_stops: usize,
    pub incidents: usize,
    pub checks: usize,
    pub checkpoints: usize,
    pub summary: String,
}

impl HistoryCsvRow {
    #[must_use]
    pub fn from_log(log: &MissionLog, tz: Tz) -> Self {
        Self {
            kind: log.kind().to_string(),
            mission_id: log.mission_id().value(),
            mission_type: log.mission_type().to_string(),
            details: log.details().to_string(),
            start: format_date_time(log.start_time(), tz),
            end: format_date_time(log.end_time(), tz),
            duration: log.duration().to_string(),
            patrol_stops: log.patrol_stops().len(),
            incidents: log.incidents().len(),
            checks: log.checks().len(),
            checkpoints: log.checkpoints().len(),
            summary: log.summary().unwrap_or_default().to_string(),
        }
    }
}

/// Writes one CSV row per history entry, in history order. A header row
/// precedes the first entry.
///
/// Returns the number of entries written.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_history_csv<W: std::io::Write>(
    history: &[MissionLog],
    tz: Tz,
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer: csv::Writer<W> = csv::Writer::from_writer(writer);
    for log in history {
        csv_writer.serialize(HistoryCsvRow::from_log(log, tz))?;
    }
    csv_writer.flush()?;
    Ok(history.len())
}
