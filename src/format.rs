//! Display formatting for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a US-locale currency string.
///
/// Amounts are rounded half away from zero to cents and grouped by
/// thousands. Negative amounts carry the sign before the dollar symbol.
///
/// # Examples
///
/// ```
/// use payroll_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123450, 2)), "$1,234.50");
/// assert_eq!(format_currency(Decimal::new(-12, 0)), "-$12.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}
