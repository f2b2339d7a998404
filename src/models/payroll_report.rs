//! Payroll result models.
//!
//! This module contains the [`PayrollReport`] type and its associated
//! structures that capture all outputs of a payroll run: per-agent totals,
//! net pay breakdowns, invoice lines and audit traces.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceEntry, ClockTime, DateRange, ShiftType};
use crate::config::LeaveHoursPolicy;

/// Selects which attendance entries take part in a calculation.
///
/// Both criteria are optional; an empty filter matches every entry.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DateRange, EntryFilter};
/// use chrono::NaiveDate;
///
/// let filter = EntryFilter::for_agent("Ana Cruz").with_range(
///     DateRange::new(
///         NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
///     )
///     .unwrap(),
/// );
/// assert_eq!(filter.agent_name.as_deref(), Some("Ana Cruz"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Inclusive date range entries must fall in.
    #[serde(default)]
    pub range: Option<DateRange>,
    /// Agent entries must belong to.
    #[serde(default)]
    pub agent_name: Option<String>,
}

impl EntryFilter {
    /// A filter matching every entry.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching a single agent's entries.
    pub fn for_agent(agent_name: impl Into<String>) -> Self {
        Self {
            range: None,
            agent_name: Some(agent_name.into()),
        }
    }

    /// Restricts the filter to a date range.
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Returns true if the entry passes every criterion of the filter.
    pub fn matches(&self, entry: &AttendanceEntry) -> bool {
        let in_range = self.range.is_none_or(|r| r.contains(entry.date));
        let for_agent = self
            .agent_name
            .as_deref()
            .is_none_or(|name| name == entry.agent_name);
        in_range && for_agent
    }
}

/// Aggregated hours and earnings over a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of entries aggregated.
    pub entry_count: u32,
    /// Sum of recorded hours across all entries.
    pub total_hours: Decimal,
    /// Recorded hours on overtime shift types.
    pub overtime_hours: Decimal,
    /// Recorded hours on holiday shift types.
    pub holiday_hours: Decimal,
    /// Number of vacation-leave entries (paid and unpaid, sick leave excluded).
    pub leave_days: u32,
    /// Number of sick-leave entries (paid and unpaid).
    pub sick_leave_days: u32,
    /// Sum of per-entry earnings.
    pub total_earnings: Decimal,
}

/// Breakdown of an agent's net pay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPay {
    /// Earnings from attendance.
    pub earnings: Decimal,
    /// Sum of deductions on file for the agent.
    pub deductions: Decimal,
    /// Sum of reimbursements on file for the agent.
    pub reimbursements: Decimal,
    /// `earnings - deductions + reimbursements`.
    pub net_pay: Decimal,
}

/// Payroll outcome for a single agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPayroll {
    /// The agent's name.
    pub agent_name: String,
    /// Hour and earnings totals for the agent's entries.
    pub totals: PayrollTotals,
    /// Net pay after adjustments.
    pub net_pay: NetPay,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The filter the entries were selected with.
    pub filter: EntryFilter,
    /// How paid leave hours were credited.
    pub leave_hours_policy: LeaveHoursPolicy,
    /// One entry per agent, ordered by name.
    pub agents: Vec<AgentPayroll>,
    /// Totals across all agents.
    pub totals: PayrollTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// One line of an agent invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// The day the line covers.
    pub date: NaiveDate,
    /// The shift type of the entry.
    pub shift_type: ShiftType,
    /// Clock-in time.
    pub time_in: ClockTime,
    /// Clock-out time.
    pub time_out: ClockTime,
    /// Hours credited for pay.
    pub hours: Decimal,
    /// Hourly rate snapshotted on the entry.
    pub rate: Decimal,
    /// Shift type multiplier applied.
    pub multiplier: Decimal,
    /// Line amount.
    pub amount: Decimal,
    /// Line amount formatted for display.
    pub amount_display: String,
}

/// Invoice data for an agent over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// The agent being invoiced for.
    pub agent_name: String,
    /// The invoiced date range.
    pub range: DateRange,
    /// Lines in date order.
    pub lines: Vec<InvoiceLine>,
    /// Totals over the lines.
    pub totals: PayrollTotals,
    /// Total earnings formatted for display.
    pub total_display: String,
}
