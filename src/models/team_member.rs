//! Team member model.
//!
//! This module defines the [`TeamMember`] struct maintained by schedule
//! management. Attendance entries refer to members by name only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClockTime;
use crate::calculation::{get_hourly_rate, hours_between};
use crate::config::PayrollConfig;
use crate::error::EngineResult;

/// A scheduled team member (agent) and their pay rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique display name, used as the key by attendance entries.
    pub name: String,
    /// Scheduled start of the working day.
    pub time_in: ClockTime,
    /// Scheduled end of the working day.
    pub time_out: ClockTime,
    /// Free-text description of the working days (e.g. "Mon-Fri").
    #[serde(default)]
    pub workdays: String,
    /// Free-text description of the rest days (e.g. "Sat-Sun").
    #[serde(default)]
    pub rest_days: String,
    /// Monthly salary.
    pub monthly_rate: Decimal,
    /// Hourly rate set independently of the monthly rate.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

impl TeamMember {
    /// Length of the scheduled shift in hours, wrapping past midnight for
    /// night schedules.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TeamMember;
    /// use rust_decimal::Decimal;
    ///
    /// let member = TeamMember {
    ///     name: "Ana Cruz".to_string(),
    ///     time_in: "10:00 PM".parse().unwrap(),
    ///     time_out: "7:00 AM".parse().unwrap(),
    ///     workdays: "Mon-Fri".to_string(),
    ///     rest_days: "Sat-Sun".to_string(),
    ///     monthly_rate: Decimal::new(20000, 0),
    ///     hourly_rate: None,
    /// };
    /// assert_eq!(member.scheduled_hours(), Decimal::new(9, 0));
    /// ```
    pub fn scheduled_hours(&self) -> Decimal {
        hours_between(self.time_in, self.time_out)
    }

    /// The hourly rate new attendance entries snapshot: the member's own
    /// hourly rate when set, otherwise one derived from the monthly rate.
    pub fn effective_hourly_rate(&self, config: &PayrollConfig) -> EngineResult<Decimal> {
        Ok(get_hourly_rate(self, config, 1)?.rate)
    }
}
