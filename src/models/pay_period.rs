//! Date ranges, pay periods and payroll records.
//!
//! This module contains the [`DateRange`] filter type, the [`PayPeriod`]
//! preset that names a range, and the [`PayrollRecord`] that tracks whether
//! an agent has been paid for a period.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::share_link::encode_share_link;

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // start date
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())); // end date
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a date falls within the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A named, saved date-range preset.
///
/// Pay periods do not own attendance entries; they only filter them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Unique identifier for the pay period.
    pub id: Uuid,
    /// Display name (e.g. "March 1-15").
    pub name: String,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a new pay period with a fresh id.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        DateRange::new(start_date, end_date)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        DateRange {
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .contains(date)
    }

    /// Returns the period as a validated [`DateRange`].
    pub fn date_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Payment status of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Generated but not yet paid.
    Pending,
    /// Paid out. Final.
    Paid,
}

/// A generated payroll for one agent over one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The pay period this payroll covers.
    pub pay_period_id: Uuid,
    /// The agent being paid.
    pub agent_name: String,
    /// Share link token for the agent's read-only view of the period.
    pub share_link: String,
    /// Current payment status.
    pub status: PayrollStatus,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
    /// When the record was generated.
    pub created_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// Generates a pending payroll record for an agent and pay period,
    /// including a share link covering the period's dates.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PayPeriod, PayrollRecord, PayrollStatus};
    /// use payroll_engine::share_link::decode_share_link;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(
    ///     "March 1-15",
    ///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let record = PayrollRecord::generate("Ana Cruz", &period);
    /// assert_eq!(record.status, PayrollStatus::Pending);
    /// assert_eq!(decode_share_link(&record.share_link).unwrap().agent_name, "Ana Cruz");
    /// ```
    pub fn generate(agent_name: impl Into<String>, period: &PayPeriod) -> Self {
        let agent_name = agent_name.into();
        let share_link = encode_share_link(&agent_name, period.start_date, period.end_date);
        Self {
            id: Uuid::new_v4(),
            pay_period_id: period.id,
            agent_name,
            share_link,
            status: PayrollStatus::Pending,
            comment: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Marks the record as paid. A record can be paid only once.
    pub fn mark_paid(&mut self) -> EngineResult<()> {
        match self.status {
            PayrollStatus::Pending => {
                self.status = PayrollStatus::Paid;
                Ok(())
            }
            PayrollStatus::Paid => Err(EngineError::InvalidStatusTransition {
                id: self.id.to_string(),
                message: "record is already paid".to_string(),
            }),
        }
    }

    /// Returns true once the record has been paid.
    pub fn is_paid(&self) -> bool {
        self.status == PayrollStatus::Paid
    }
}
