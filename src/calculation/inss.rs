//! INSS contribution calculation functionality.
//!
//! This module provides the progressive INSS social security
//! contribution calculation used for CLT payslips.
//!
//! ## Bracket Structure
//!
//! **The contribution is progressive across salary slices:**
//! - Each bracket taxes only the slice between the previous ceiling
//!   and its own ceiling
//! - Salary above the last ceiling contributes nothing, which caps
//!   the contribution at the top-bracket total

use rust_decimal::Decimal;

use crate::config::TaxTable;

use super::rounding::round_to_cents;

/// Calculates the monthly INSS contribution on a gross salary.
///
/// The gross salary is cut into slices along the bracket ceilings and
/// each slice contributes at its bracket's rate. Earnings above the
/// final ceiling are outside the contribution base entirely, so every
/// salary at or past it pays the same capped amount.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary for the month (base plus overtime)
/// * `table` - The tax table whose INSS brackets apply
///
/// # Returns
///
/// The INSS contribution, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_inss;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::brazil_2024();
/// let inss = calculate_inss(Decimal::from_str("3204.55").unwrap(), &table);
/// assert_eq!(inss, Decimal::from_str("283.37").unwrap());
/// ```
pub fn calculate_inss(gross_salary: Decimal, table: &TaxTable) -> Decimal {
    let mut remaining = gross_salary;
    let mut previous_ceiling = Decimal::ZERO;
    let mut contribution = Decimal::ZERO;

    for bracket in &table.inss {
        if remaining <= Decimal::ZERO {
            break;
        }
        let slice_width = bracket.ceiling - previous_ceiling;
        let taxable = remaining.min(slice_width);
        contribution += taxable * bracket.rate;
        remaining -= taxable;
        previous_ceiling = bracket.ceiling;
    }

    round_to_cents(contribution)
}
