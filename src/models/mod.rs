//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod adjustment;
mod attendance;
mod clock_time;
mod pay_period;
mod payroll_report;
mod shift_type;
mod team_member;

pub use adjustment::{Adjustment, AdjustmentKind};
pub use attendance::AttendanceEntry;
pub use clock_time::ClockTime;
pub use pay_period::{DateRange, PayPeriod, PayrollRecord, PayrollStatus};
pub use payroll_report::{
    AgentPayroll, AuditStep, AuditTrace, AuditWarning, EntryFilter, Invoice, InvoiceLine, NetPay,
    PayrollReport, PayrollTotals,
};
pub use shift_type::{HourCategory, ShiftType};
pub use team_member::TeamMember;
