//! Net pay calculation.
//!
//! Net pay is earnings plus reimbursements minus deductions. Adjustments are
//! not tied to pay periods, so every adjustment on file for an agent counts.

use rust_decimal::Decimal;

use crate::models::{Adjustment, AdjustmentKind, NetPay};

/// `earnings - deductions + reimbursements`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::net_pay;
/// use rust_decimal::Decimal;
///
/// let net = net_pay(Decimal::new(10000, 0), Decimal::new(1500, 0), Decimal::new(500, 0));
/// assert_eq!(net, Decimal::new(9000, 0));
/// ```
pub fn net_pay(earnings: Decimal, deductions: Decimal, reimbursements: Decimal) -> Decimal {
    earnings - deductions + reimbursements
}

/// Sums an agent's adjustments into `(deductions, reimbursements)`.
pub fn adjustment_totals(adjustments: &[Adjustment], agent_name: &str) -> (Decimal, Decimal) {
    adjustments
        .iter()
        .filter(|a| a.agent_name == agent_name)
        .fold((Decimal::ZERO, Decimal::ZERO), |(deductions, reimbursements), a| {
            match a.kind {
                AdjustmentKind::Deduction => (deductions + a.amount, reimbursements),
                AdjustmentKind::Reimbursement => (deductions, reimbursements + a.amount),
            }
        })
}

/// Builds the net pay breakdown for an agent.
pub fn calculate_net_pay(earnings: Decimal, adjustments: &[Adjustment], agent_name: &str) -> NetPay {
    let (deductions, reimbursements) = adjustment_totals(adjustments, agent_name);
    NetPay {
        earnings,
        deductions,
        reimbursements,
        net_pay: net_pay(earnings, deductions, reimbursements),
    }
}
