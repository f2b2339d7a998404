//! Import of the legacy client-side attendance export.
//!
//! The legacy export is a JSON array of camelCase objects with clock times as
//! "h:mm AM|PM" strings and shift types by display name. Derived fields are
//! recomputed on import; the recorded `totalHours` is only compared against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, ClockTime};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRow {
    date: NaiveDate,
    agent_name: String,
    time_in: String,
    time_out: String,
    #[serde(default)]
    total_hours: Option<Decimal>,
    hourly_rate: Decimal,
    shift_type: String,
}

/// A legacy row that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Zero-based position of the row in the export.
    pub index: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// The outcome of a legacy import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Entries that were imported, in export order.
    pub entries: Vec<AttendanceEntry>,
    /// Rows that could not be imported.
    pub skipped: Vec<SkippedRow>,
    /// Imported rows whose recorded total hours disagreed with their times.
    pub corrected_hours: usize,
}

/// Reads a legacy export into typed attendance entries.
///
/// Only a document that is not a JSON array fails the whole import; bad rows
/// are collected in [`ImportReport::skipped`].
pub fn import_legacy_json(json: &str, config: &PayrollConfig) -> EngineResult<ImportReport> {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| EngineError::LegacyImport {
            message: e.to_string(),
        })?;

    let mut report = ImportReport::default();
    for (index, value) in rows.into_iter().enumerate() {
        match import_row(value, config) {
            Ok((entry, corrected)) => {
                if corrected {
                    report.corrected_hours += 1;
                }
                report.entries.push(entry);
            }
            Err(reason) => {
                warn!(index, reason = %reason, "Skipping legacy attendance row");
                report.skipped.push(SkippedRow { index, reason });
            }
        }
    }

    info!(
        imported = report.entries.len(),
        skipped = report.skipped.len(),
        corrected_hours = report.corrected_hours,
        "Legacy import finished"
    );
    Ok(report)
}

fn import_row(value: serde_json::Value, config: &PayrollConfig) -> Result<(AttendanceEntry, bool), String> {
    let row: LegacyRow = serde_json::from_value(value).map_err(|e| e.to_string())?;

    if row.agent_name.trim().is_empty() {
        return Err("agent name is empty".to_string());
    }
    if row.hourly_rate.is_sign_negative() {
        return Err(format!("hourly rate is negative: {}", row.hourly_rate));
    }

    let time_in: ClockTime = row.time_in.parse().map_err(|e: EngineError| e.to_string())?;
    let time_out: ClockTime = row.time_out.parse().map_err(|e: EngineError| e.to_string())?;
    let shift_type = config
        .resolve_shift_type(&row.shift_type)
        .map_err(|e| e.to_string())?;

    let entry = AttendanceEntry::with_rate(
        row.date,
        row.agent_name,
        time_in,
        time_out,
        row.hourly_rate,
        shift_type,
        config,
    );
    let corrected = row
        .total_hours
        .is_some_and(|recorded| recorded.round_dp(2) != entry.total_hours.round_dp(2));

    Ok((entry, corrected))
}
