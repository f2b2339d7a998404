//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions that turn attendance entries into
//! pay: shift durations, hourly rate derivation, per-shift-type earnings and
//! overtime rates, aggregate summaries, net pay, full payroll reports and
//! invoice data.

mod duration;
mod earnings;
mod hourly_rate;
mod invoice;
mod net_pay;
mod payroll;
mod summary;

pub use duration::{HOURS_DP, calculate_duration, hours_between};
pub use earnings::{
    AMOUNT_DP, EntryEvaluation, calculate_earnings, calculate_overtime_rate, credited_hours, entry_earnings,
    evaluate_entry,
};
pub use hourly_rate::{HourlyRateLookup, derive_hourly_rate, get_hourly_rate};
pub use invoice::build_invoice;
pub use net_pay::{adjustment_totals, calculate_net_pay, net_pay};
pub use payroll::calculate_payroll;
pub use summary::{summarize, summarize_by_agent};
