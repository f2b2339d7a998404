//! Payroll report generation.
//!
//! Ties the per-entry evaluation, the per-agent aggregation and the net pay
//! calculation together into a single [`PayrollReport`] with an audit trace.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use super::{calculate_net_pay, evaluate_entry};
use super::summary::accumulate;
use crate::config::PayrollConfig;
use crate::models::{
    Adjustment, AgentPayroll, AttendanceEntry, AuditTrace, AuditWarning, EntryFilter,
    PayrollReport, PayrollTotals,
};

/// Calculates payroll for every agent with entries passing `filter`.
///
/// Entries are evaluated in (agent, date) order so the audit trace reads the
/// same for any input ordering. When the filter names an agent, that agent is
/// reported even without matching entries, so their adjustments still show.
pub fn calculate_payroll(
    entries: &[AttendanceEntry],
    adjustments: &[Adjustment],
    filter: &EntryFilter,
    config: &PayrollConfig,
) -> PayrollReport {
    let start_time = Instant::now();
    let policy = config.leave_hours_policy();
    let table = config.rate_table();

    let mut selected: Vec<&AttendanceEntry> = entries.iter().filter(|e| filter.matches(e)).collect();
    selected.sort_by(|a, b| {
        (&a.agent_name, a.date, a.time_in, a.id).cmp(&(&b.agent_name, b.date, b.time_in, b.id))
    });

    let mut steps = Vec::with_capacity(selected.len());
    let mut warnings = Vec::new();
    let mut by_agent: BTreeMap<String, PayrollTotals> = BTreeMap::new();
    let mut totals = PayrollTotals::default();

    if let Some(agent) = &filter.agent_name {
        by_agent.entry(agent.clone()).or_default();
    }

    for (index, entry) in selected.iter().enumerate() {
        let evaluation = evaluate_entry(entry, policy, table, index as u32 + 1);

        if entry.total_hours == Decimal::ZERO && evaluation.credited_hours == Decimal::ZERO {
            warnings.push(AuditWarning {
                code: "ZERO_HOURS_ENTRY".to_string(),
                message: format!(
                    "{} on {} has identical time in and time out ({})",
                    entry.agent_name, entry.date, entry.time_in
                ),
                severity: "low".to_string(),
            });
        }

        let agent_totals = by_agent.entry(entry.agent_name.clone()).or_default();
        accumulate(agent_totals, entry, evaluation.amount);
        accumulate(&mut totals, entry, evaluation.amount);
        steps.push(evaluation.audit_step);
    }

    let agents: Vec<AgentPayroll> = by_agent
        .into_iter()
        .map(|(agent_name, agent_totals)| {
            let net_pay = calculate_net_pay(agent_totals.total_earnings, adjustments, &agent_name);
            if net_pay.net_pay < Decimal::ZERO {
                warnings.push(AuditWarning {
                    code: "NEGATIVE_NET_PAY".to_string(),
                    message: format!(
                        "Deductions for {} exceed earnings and reimbursements ({})",
                        agent_name, net_pay.net_pay
                    ),
                    severity: "medium".to_string(),
                });
            }
            AgentPayroll {
                agent_name,
                totals: agent_totals,
                net_pay,
            }
        })
        .collect();

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        agents = agents.len(),
        entries = totals.entry_count,
        total_earnings = %totals.total_earnings,
        duration_us,
        "Payroll calculated"
    );

    PayrollReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        filter: filter.clone(),
        leave_hours_policy: policy,
        agents,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
