//! Shift type model.
//!
//! Each attendance entry carries a [`ShiftType`] tag. The tag decides the pay
//! multiplier applied to the entry and which hour bucket (overtime, holiday,
//! leave) the entry's hours are reported under.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The hour bucket a shift type reports under in payroll summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCategory {
    /// Ordinary scheduled work.
    Regular,
    /// Overtime on a workday or a rest day.
    Overtime,
    /// Work on a special or regular holiday.
    Holiday,
    /// Vacation-style leave, paid or unpaid.
    Leave,
    /// Sick leave, paid or unpaid.
    SickLeave,
}

/// The closed set of shift types an attendance entry can carry.
///
/// The serialized form is the display name used throughout the
/// application (e.g. `"Rest Day OT"`).
///
/// # Example
///
/// ```
/// use payroll_engine::models::{HourCategory, ShiftType};
///
/// let shift: ShiftType = "Rest Day OT".parse().unwrap();
/// assert_eq!(shift, ShiftType::RestDayOvertime);
/// assert_eq!(shift.category(), HourCategory::Overtime);
/// assert_eq!(shift.to_string(), "Rest Day OT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftType {
    /// An ordinary scheduled shift.
    #[serde(rename = "Regular Shift")]
    RegularShift,
    /// Overtime on a scheduled workday.
    #[serde(rename = "Regular OT")]
    RegularOvertime,
    /// Overtime on a rest day.
    #[serde(rename = "Rest Day OT")]
    RestDayOvertime,
    /// Work on a special (non-working) holiday.
    #[serde(rename = "Special Holidays")]
    SpecialHoliday,
    /// Work on a regular holiday.
    #[serde(rename = "Regular Holidays")]
    RegularHoliday,
    /// Paid vacation leave.
    #[serde(rename = "Paid Leave")]
    PaidLeave,
    /// Paid sick leave.
    #[serde(rename = "Paid SL")]
    PaidSickLeave,
    /// Unpaid vacation leave.
    #[serde(rename = "UnPaid Leave")]
    UnpaidLeave,
    /// Unpaid sick leave.
    #[serde(rename = "UnPaid SL")]
    UnpaidSickLeave,
}

impl ShiftType {
    /// Every shift type, in rate-table order.
    pub const ALL: [ShiftType; 9] = [
        ShiftType::RegularShift,
        ShiftType::RegularOvertime,
        ShiftType::RestDayOvertime,
        ShiftType::SpecialHoliday,
        ShiftType::RegularHoliday,
        ShiftType::PaidLeave,
        ShiftType::PaidSickLeave,
        ShiftType::UnpaidLeave,
        ShiftType::UnpaidSickLeave,
    ];

    /// Returns the display name of the shift type.
    pub fn name(self) -> &'static str {
        match self {
            ShiftType::RegularShift => "Regular Shift",
            ShiftType::RegularOvertime => "Regular OT",
            ShiftType::RestDayOvertime => "Rest Day OT",
            ShiftType::SpecialHoliday => "Special Holidays",
            ShiftType::RegularHoliday => "Regular Holidays",
            ShiftType::PaidLeave => "Paid Leave",
            ShiftType::PaidSickLeave => "Paid SL",
            ShiftType::UnpaidLeave => "UnPaid Leave",
            ShiftType::UnpaidSickLeave => "UnPaid SL",
        }
    }

    /// Returns the hour bucket this shift type reports under.
    pub fn category(self) -> HourCategory {
        match self {
            ShiftType::RegularShift => HourCategory::Regular,
            ShiftType::RegularOvertime | ShiftType::RestDayOvertime => HourCategory::Overtime,
            ShiftType::SpecialHoliday | ShiftType::RegularHoliday => HourCategory::Holiday,
            ShiftType::PaidLeave | ShiftType::UnpaidLeave => HourCategory::Leave,
            ShiftType::PaidSickLeave | ShiftType::UnpaidSickLeave => HourCategory::SickLeave,
        }
    }

    /// Returns the standard pay multiplier for this shift type.
    ///
    /// This is the built-in rate table; a loaded configuration may override it.
    pub fn default_multiplier(self) -> Decimal {
        match self {
            ShiftType::RegularShift => Decimal::ONE,
            ShiftType::RegularOvertime => Decimal::new(125, 2),
            ShiftType::RestDayOvertime => Decimal::new(130, 2),
            ShiftType::SpecialHoliday => Decimal::new(130, 2),
            ShiftType::RegularHoliday => Decimal::TWO,
            ShiftType::PaidLeave | ShiftType::PaidSickLeave => Decimal::ONE,
            ShiftType::UnpaidLeave | ShiftType::UnpaidSickLeave => Decimal::ZERO,
        }
    }

    /// Returns true for paid leave types, which credit a flat day of hours
    /// instead of the recorded time.
    pub fn is_paid_leave(self) -> bool {
        matches!(self, ShiftType::PaidLeave | ShiftType::PaidSickLeave)
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShiftType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShiftType::ALL
            .into_iter()
            .find(|shift| shift.name() == trimmed)
            .ok_or_else(|| EngineError::UnknownShiftType {
                name: trimmed.to_string(),
            })
    }
}
