//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/share-links` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, AttendanceEntry, ClockTime, EntryFilter};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The attendance entries to calculate over.
    pub entries: Vec<EntryRequest>,
    /// Deductions and reimbursements to apply to net pay.
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    /// Which entries take part; defaults to all of them.
    #[serde(default)]
    pub filter: EntryFilter,
}

/// Attendance entry in a calculation request.
///
/// Only the recorded fields are accepted; derived pay fields are always
/// recomputed from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Optional identifier; a fresh one is assigned when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The day worked.
    pub date: NaiveDate,
    /// The agent's name.
    pub agent_name: String,
    /// Clock-in time, "h:mm AM|PM".
    pub time_in: String,
    /// Clock-out time, "h:mm AM|PM".
    pub time_out: String,
    /// Hourly rate snapshotted on the entry.
    pub hourly_rate: Decimal,
    /// Shift type display name (e.g. "Regular OT").
    pub shift_type: String,
}

impl EntryRequest {
    /// Converts the request into an entry, resolving the shift type through
    /// the configured unknown-shift-type policy.
    pub fn into_entry(self, config: &PayrollConfig) -> EngineResult<AttendanceEntry> {
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::NegativeAmount {
                field: "hourly rate",
                value: self.hourly_rate,
            });
        }
        let time_in: ClockTime = self.time_in.parse()?;
        let time_out: ClockTime = self.time_out.parse()?;
        let shift_type = config.resolve_shift_type(&self.shift_type)?;

        let mut entry = AttendanceEntry::with_rate(
            self.date,
            self.agent_name,
            time_in,
            time_out,
            self.hourly_rate,
            shift_type,
            config,
        );
        if let Some(id) = self.id {
            entry.id = id;
        }
        Ok(entry)
    }
}

/// Request body for the `/share-links` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkRequest {
    /// The agent whose payroll is shared.
    pub agent_name: String,
    /// First day of the shared range.
    pub start_date: NaiveDate,
    /// Last day of the shared range.
    pub end_date: NaiveDate,
}

/// Response body for the `/share-links` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkResponse {
    /// The link token, usable as `/share/{token}`.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownShiftTypePolicy;
    use crate::models::ShiftType;

    fn entry_request(shift_type: &str, time_in: &str) -> EntryRequest {
        EntryRequest {
            id: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            agent_name: "Ana Cruz".to_string(),
            time_in: time_in.to_string(),
            time_out: "5:00 PM".to_string(),
            hourly_rate: Decimal::new(100, 0),
            shift_type: shift_type.to_string(),
        }
    }

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "entries": [
                {
                    "date": "2025-03-03",
                    "agent_name": "Ana Cruz",
                    "time_in": "9:00 AM",
                    "time_out": "5:00 PM",
                    "hourly_rate": "114.94",
                    "shift_type": "Regular Shift"
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 1);
        assert!(request.adjustments.is_empty());
        assert_eq!(request.filter, EntryFilter::all());
    }

    #[test]
    fn test_into_entry_recomputes_derived_fields() {
        let entry = entry_request("Regular Holidays", "9:00 AM")
            .into_entry(&PayrollConfig::default())
            .unwrap();

        assert_eq!(entry.shift_type, ShiftType::RegularHoliday);
        assert_eq!(entry.total_hours, Decimal::new(8, 0));
        assert_eq!(entry.daily_earnings, Decimal::new(1600, 0));
    }

    #[test]
    fn test_into_entry_keeps_given_id() {
        let id = Uuid::new_v4();
        let mut request = entry_request("Regular Shift", "9:00 AM");
        request.id = Some(id);
        assert_eq!(request.into_entry(&PayrollConfig::default()).unwrap().id, id);
    }

    #[test]
    fn test_into_entry_bad_time() {
        let result = entry_request("Regular Shift", "9 AM").into_entry(&PayrollConfig::default());
        assert!(matches!(result, Err(EngineError::InvalidTime { .. })));
    }

    #[test]
    fn test_into_entry_negative_rate() {
        let mut request = entry_request("Regular Shift", "9:00 AM");
        request.hourly_rate = Decimal::new(-100, 0);
        assert!(matches!(
            request.into_entry(&PayrollConfig::default()),
            Err(EngineError::NegativeAmount { field: "hourly rate", .. })
        ));
    }

    #[test]
    fn test_into_entry_unknown_shift_type_rejected_when_configured() {
        let config = PayrollConfig::default().with_unknown_shift_type(UnknownShiftTypePolicy::Reject);
        let result = entry_request("Graveyard", "9:00 AM").into_entry(&config);
        assert!(matches!(result, Err(EngineError::UnknownShiftType { .. })));
    }
}
