//! Currency rounding for payroll amounts.
//!
//! All payslip money amounts are rounded to whole cents with the
//! half-up convention used on Brazilian payslips (midpoint away from
//! zero), not banker's rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("204.545454").unwrap();
/// assert_eq!(round_to_cents(value), Decimal::from_str("204.55").unwrap());
///
/// let midpoint = Decimal::from_str("5.025").unwrap();
/// assert_eq!(round_to_cents(midpoint), Decimal::from_str("5.03").unwrap());
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
