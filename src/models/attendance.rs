//! Attendance entry model.
//!
//! An [`AttendanceEntry`] is one day's record for one agent. The hourly rate
//! is snapshotted when the entry is recorded, so later rate changes on the
//! team member do not alter historical pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClockTime, HourCategory, ShiftType, TeamMember};
use crate::calculation::{
    AMOUNT_DP, calculate_overtime_rate, entry_earnings, get_hourly_rate, hours_between,
};
use crate::config::PayrollConfig;
use crate::error::EngineResult;

/// A single attendance record with its derived pay fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day worked (or taken as leave).
    pub date: NaiveDate,
    /// Name of the team member this entry belongs to.
    pub agent_name: String,
    /// Clock-in time.
    pub time_in: ClockTime,
    /// Clock-out time; earlier than `time_in` means the shift ran past midnight.
    pub time_out: ClockTime,
    /// Hours between `time_in` and `time_out`.
    pub total_hours: Decimal,
    /// Hourly rate at the time the entry was recorded.
    pub hourly_rate: Decimal,
    /// The shift type tag.
    pub shift_type: ShiftType,
    /// Hourly rate with the shift type multiplier applied.
    pub overtime_rate: Decimal,
    /// Pay for overtime-category entries; zero otherwise.
    pub overtime_pay: Decimal,
    /// Earnings credited for this entry.
    pub daily_earnings: Decimal,
}

impl AttendanceEntry {
    /// Records a new entry for a team member, snapshotting the member's
    /// current effective hourly rate.
    ///
    /// Fails when the member has no usable rate.
    pub fn record(
        date: NaiveDate,
        member: &TeamMember,
        time_in: ClockTime,
        time_out: ClockTime,
        shift_type: ShiftType,
        config: &PayrollConfig,
    ) -> EngineResult<Self> {
        let lookup = get_hourly_rate(member, config, 1)?;
        Ok(Self::with_rate(
            date,
            member.name.clone(),
            time_in,
            time_out,
            lookup.rate,
            shift_type,
            config,
        ))
    }

    /// Builds an entry from an already-known hourly rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::PayrollConfig;
    /// use payroll_engine::models::{AttendanceEntry, ShiftType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = AttendanceEntry::with_rate(
    ///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    ///     "Ana Cruz".to_string(),
    ///     "11:00 PM".parse().unwrap(),
    ///     "7:00 AM".parse().unwrap(),
    ///     Decimal::new(100, 0),
    ///     ShiftType::RegularOvertime,
    ///     &PayrollConfig::default(),
    /// );
    /// assert_eq!(entry.total_hours, Decimal::new(8, 0));
    /// assert_eq!(entry.overtime_rate, Decimal::new(125, 0));
    /// assert_eq!(entry.overtime_pay, Decimal::new(1000, 0));
    /// ```
    pub fn with_rate(
        date: NaiveDate,
        agent_name: String,
        time_in: ClockTime,
        time_out: ClockTime,
        hourly_rate: Decimal,
        shift_type: ShiftType,
        config: &PayrollConfig,
    ) -> Self {
        let mut entry = Self {
            id: Uuid::new_v4(),
            date,
            agent_name,
            time_in,
            time_out,
            total_hours: Decimal::ZERO,
            hourly_rate,
            shift_type,
            overtime_rate: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            daily_earnings: Decimal::ZERO,
        };
        entry.recompute(config);
        entry
    }

    /// Refreshes every derived field after an edit. The snapshotted hourly
    /// rate is kept as-is.
    pub fn recompute(&mut self, config: &PayrollConfig) {
        let table = config.rate_table();
        self.total_hours = hours_between(self.time_in, self.time_out);
        self.overtime_rate = calculate_overtime_rate(self.hourly_rate, self.shift_type, table);
        self.overtime_pay = if self.shift_type.category() == HourCategory::Overtime {
            (self.total_hours * self.overtime_rate).round_dp(AMOUNT_DP)
        } else {
            Decimal::ZERO
        };
        self.daily_earnings = entry_earnings(self, config.leave_hours_policy(), table);
    }
}
