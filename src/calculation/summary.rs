//! Aggregate summaries over attendance entries.
//!
//! Every aggregation here is a sum or a count, so the result never depends
//! on the order of the input entries.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::entry_earnings;
use crate::config::{LeaveHoursPolicy, RateTable};
use crate::models::{AttendanceEntry, EntryFilter, HourCategory, PayrollTotals};

/// Adds one entry to a running total.
pub(crate) fn accumulate(
    totals: &mut PayrollTotals,
    entry: &AttendanceEntry,
    earnings: Decimal,
) {
    totals.entry_count += 1;
    totals.total_hours += entry.total_hours;
    totals.total_earnings += earnings;

    match entry.shift_type.category() {
        HourCategory::Overtime => totals.overtime_hours += entry.total_hours,
        HourCategory::Holiday => totals.holiday_hours += entry.total_hours,
        HourCategory::Leave => totals.leave_days += 1,
        HourCategory::SickLeave => totals.sick_leave_days += 1,
        HourCategory::Regular => {}
    }
}

/// Summarizes the entries that pass `filter`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use payroll_engine::config::{LeaveHoursPolicy, PayrollConfig};
/// use payroll_engine::models::{AttendanceEntry, EntryFilter, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// let entries = vec![AttendanceEntry::with_rate(
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     "Ana Cruz".to_string(),
///     "9:00 AM".parse().unwrap(),
///     "5:00 PM".parse().unwrap(),
///     Decimal::new(100, 0),
///     ShiftType::RegularShift,
///     &config,
/// )];
///
/// let totals = summarize(&entries, &EntryFilter::all(), LeaveHoursPolicy::FlatCredit, config.rate_table());
/// assert_eq!(totals.total_hours, Decimal::new(8, 0));
/// assert_eq!(totals.total_earnings, Decimal::new(800, 0));
/// ```
pub fn summarize(
    entries: &[AttendanceEntry],
    filter: &EntryFilter,
    policy: LeaveHoursPolicy,
    table: &RateTable,
) -> PayrollTotals {
    let mut totals = PayrollTotals::default();
    for entry in entries.iter().filter(|e| filter.matches(e)) {
        accumulate(&mut totals, entry, entry_earnings(entry, policy, table));
    }
    totals
}

/// Summarizes the entries that pass `filter`, grouped by agent name.
pub fn summarize_by_agent(
    entries: &[AttendanceEntry],
    filter: &EntryFilter,
    policy: LeaveHoursPolicy,
    table: &RateTable,
) -> BTreeMap<String, PayrollTotals> {
    let mut by_agent: BTreeMap<String, PayrollTotals> = BTreeMap::new();
    for entry in entries.iter().filter(|e| filter.matches(e)) {
        let totals = by_agent.entry(entry.agent_name.clone()).or_default();
        accumulate(totals, entry, entry_earnings(entry, policy, table));
    }
    by_agent
}
