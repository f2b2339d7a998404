//! Shift duration calculation.
//!
//! This module turns a pair of clock times into worked hours, treating a
//! clock-out earlier than the clock-in as a shift that ran past midnight.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::ClockTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Decimal places kept on worked hours. Fixed so that sums of hours are exact.
pub const HOURS_DP: u32 = 6;

/// Hours elapsed from `start` to `end`.
///
/// If `end` is earlier than `start` the shift is taken to cross midnight and a
/// day is added to `end`. Equal times yield zero hours. Minutes that do not
/// divide an hour evenly are rounded to [`HOURS_DP`] places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hours_between;
/// use rust_decimal::Decimal;
///
/// let start = "11:00 PM".parse().unwrap();
/// let end = "7:00 AM".parse().unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(8, 0));
/// ```
pub fn hours_between(start: ClockTime, end: ClockTime) -> Decimal {
    let start_minutes = i64::from(start.minutes_from_midnight());
    let mut end_minutes = i64::from(end.minutes_from_midnight());

    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    (Decimal::from(end_minutes - start_minutes) / Decimal::from(60)).round_dp(HOURS_DP)
}

/// Parses two `h:mm AM|PM` strings and returns the hours between them.
///
/// Malformed input is an `InvalidTime` error; no partial result is produced.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_duration("9:00 AM", "5:00 PM").unwrap(), Decimal::new(8, 0));
/// assert!(calculate_duration("9:00", "5:00 PM").is_err());
/// ```
pub fn calculate_duration(time_in: &str, time_out: &str) -> EngineResult<Decimal> {
    let start: ClockTime = time_in.parse()?;
    let end: ClockTime = time_out.parse()?;
    Ok(hours_between(start, end))
}
