//! Invoice data for a single agent over a date range.

use super::{credited_hours, entry_earnings};
use super::summary::accumulate;
use crate::config::PayrollConfig;
use crate::format::format_currency;
use crate::models::{AttendanceEntry, DateRange, EntryFilter, Invoice, InvoiceLine, PayrollTotals};

/// Builds invoice lines for `agent_name`'s entries within `range`.
///
/// Lines are ordered by date, then by clock-in time. Amounts use the same
/// crediting policy as payroll reports so both views agree.
pub fn build_invoice(
    agent_name: &str,
    range: DateRange,
    entries: &[AttendanceEntry],
    config: &PayrollConfig,
) -> Invoice {
    let policy = config.leave_hours_policy();
    let table = config.rate_table();
    let filter = EntryFilter::for_agent(agent_name).with_range(range);

    let mut selected: Vec<&AttendanceEntry> = entries.iter().filter(|e| filter.matches(e)).collect();
    selected.sort_by_key(|e| (e.date, e.time_in, e.id));

    let mut totals = PayrollTotals::default();
    let lines = selected
        .into_iter()
        .map(|entry| {
            let hours = credited_hours(entry, policy, table);
            let multiplier = table.multiplier(entry.shift_type);
            let amount = entry_earnings(entry, policy, table);
            accumulate(&mut totals, entry, amount);

            InvoiceLine {
                date: entry.date,
                shift_type: entry.shift_type,
                time_in: entry.time_in,
                time_out: entry.time_out,
                hours,
                rate: entry.hourly_rate,
                multiplier,
                amount,
                amount_display: format_currency(amount),
            }
        })
        .collect();

    let total_display = format_currency(totals.total_earnings);
    Invoice {
        agent_name: agent_name.to_string(),
        range,
        lines,
        totals,
        total_display,
    }
}
