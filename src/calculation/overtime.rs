//! Overtime pay calculation functionality.
//!
//! This module provides the overtime pay calculation for the Brazilian
//! monthly payroll as per CLT article 7, XVI.
//!
//! ## Rate Structure
//!
//! **Overtime is paid on the contractual hourly rate:**
//! - Hourly rate: monthly base salary divided by 220 hours
//! - CLT workers: 150% of the hourly rate per overtime hour
//! - PJ contractors: 100% of the hourly rate, informational only

use rust_decimal::Decimal;

use crate::models::ContractType;

use super::rounding::round_to_cents;

/// Monthly divisor that converts a base salary into an hourly rate.
/// Fixed at 220 hours by the standard 44-hour CLT week.
pub const MONTHLY_HOURS_DIVISOR: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Overtime multiplier for CLT workers (the constitutional 50% uplift).
pub const CLT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates overtime pay for a month.
///
/// The hourly rate is the base salary divided by 220. CLT workers are
/// paid 150% of that rate for each overtime hour; PJ contractors get
/// the plain rate, since the uplift is a CLT entitlement. The result
/// is rounded to cents.
///
/// # Arguments
///
/// * `base_salary` - The contractual monthly base salary
/// * `overtime_hours` - The overtime hours worked in the month
/// * `contract_type` - The worker's contract regime
///
/// # Returns
///
/// The overtime pay, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime;
/// use payroll_engine::models::ContractType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay = calculate_overtime(
///     Decimal::from_str("3000.00").unwrap(),
///     Decimal::from_str("10").unwrap(),
///     ContractType::Clt,
/// );
/// assert_eq!(pay, Decimal::from_str("204.55").unwrap());
/// ```
pub fn calculate_overtime(
    base_salary: Decimal,
    overtime_hours: Decimal,
    contract_type: ContractType,
) -> Decimal {
    let hourly_rate = base_salary / MONTHLY_HOURS_DIVISOR;

    let multiplier = match contract_type {
        ContractType::Clt => CLT_OVERTIME_MULTIPLIER,
        ContractType::Pj => Decimal::ONE,
    };

    round_to_cents(hourly_rate * overtime_hours * multiplier)
}
