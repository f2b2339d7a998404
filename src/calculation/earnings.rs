//! Earnings and overtime rate calculation.
//!
//! This module applies the shift type rate table to hours and hourly rates.
//! [`calculate_earnings`] is the plain `rate x hours x multiplier` rule;
//! [`entry_earnings`] and [`evaluate_entry`] additionally apply the paid
//! leave crediting policy to a recorded entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{LeaveHoursPolicy, RateTable};
use crate::models::{AttendanceEntry, AuditStep, ShiftType};

/// Decimal places kept on a single entry's earnings, below the cent so that
/// display rounding happens once, on totals.
pub const AMOUNT_DP: u32 = 4;

/// Earnings for `hours` worked at `hourly_rate` on a shift type, rounded to
/// [`AMOUNT_DP`] places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_earnings;
/// use payroll_engine::config::RateTable;
/// use payroll_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// let pay = calculate_earnings(Decimal::new(10, 0), Decimal::new(8, 0), ShiftType::RegularHoliday, &table);
/// assert_eq!(pay, Decimal::new(160, 0));
/// ```
pub fn calculate_earnings(
    hourly_rate: Decimal,
    total_hours: Decimal,
    shift_type: ShiftType,
    table: &RateTable,
) -> Decimal {
    (hourly_rate * total_hours * table.multiplier(shift_type)).round_dp(AMOUNT_DP)
}

/// The per-hour rate for a shift type: `hourly_rate x multiplier`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_rate;
/// use payroll_engine::config::RateTable;
/// use payroll_engine::models::ShiftType;
/// use rust_decimal::Decimal;
///
/// let rate = calculate_overtime_rate(Decimal::new(100, 0), ShiftType::RegularOvertime, &RateTable::default());
/// assert_eq!(rate, Decimal::new(125, 0));
/// ```
pub fn calculate_overtime_rate(hourly_rate: Decimal, shift_type: ShiftType, table: &RateTable) -> Decimal {
    hourly_rate * table.multiplier(shift_type)
}

/// Hours an entry is paid for under the given policy.
///
/// Paid leave types credit the table's flat day under
/// [`LeaveHoursPolicy::FlatCredit`]; every other case uses the recorded hours.
pub fn credited_hours(entry: &AttendanceEntry, policy: LeaveHoursPolicy, table: &RateTable) -> Decimal {
    match policy {
        LeaveHoursPolicy::FlatCredit if entry.shift_type.is_paid_leave() => {
            table.paid_leave_credit_hours()
        }
        _ => entry.total_hours,
    }
}

/// Earnings for a recorded entry, using its snapshotted hourly rate.
pub fn entry_earnings(entry: &AttendanceEntry, policy: LeaveHoursPolicy, table: &RateTable) -> Decimal {
    calculate_earnings(
        entry.hourly_rate,
        credited_hours(entry, policy, table),
        entry.shift_type,
        table,
    )
}

/// The evaluation of a single entry, with the audit step documenting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEvaluation {
    /// Hours the entry is paid for.
    pub credited_hours: Decimal,
    /// The shift type multiplier applied.
    pub multiplier: Decimal,
    /// The resulting amount.
    pub amount: Decimal,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Evaluates an entry's earnings and records how they were reached.
pub fn evaluate_entry(
    entry: &AttendanceEntry,
    policy: LeaveHoursPolicy,
    table: &RateTable,
    step_number: u32,
) -> EntryEvaluation {
    let hours = credited_hours(entry, policy, table);
    let multiplier = table.multiplier(entry.shift_type);
    let amount = calculate_earnings(entry.hourly_rate, hours, entry.shift_type, table);

    let reasoning = if hours != entry.total_hours {
        format!(
            "{} credits a flat {} hours (recorded {}) at {} x {} = {}",
            entry.shift_type,
            hours.normalize(),
            entry.total_hours.normalize(),
            entry.hourly_rate.normalize(),
            multiplier.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "{} hours of {} at {} x {} = {}",
            hours.normalize(),
            entry.shift_type,
            entry.hourly_rate.normalize(),
            multiplier.normalize(),
            amount.normalize()
        )
    };

    debug!(
        entry_id = %entry.id,
        agent = %entry.agent_name,
        shift_type = %entry.shift_type,
        amount = %amount,
        "Evaluated attendance entry"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "entry_earnings".to_string(),
        rule_name: "Entry Earnings".to_string(),
        input: serde_json::json!({
            "entry_id": entry.id.to_string(),
            "agent_name": entry.agent_name,
            "date": entry.date.to_string(),
            "shift_type": entry.shift_type.name(),
            "recorded_hours": entry.total_hours.normalize().to_string(),
            "hourly_rate": entry.hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "credited_hours": hours.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    EntryEvaluation {
        credited_hours: hours,
        multiplier,
        amount,
        audit_step,
    }
}
