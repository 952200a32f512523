//! IRRF withholding calculation functionality.
//!
//! This module provides the IRRF income tax withholding calculation
//! used for CLT payslips.
//!
//! ## Band Structure
//!
//! **IRRF is a single-band tax, not a progressive one:**
//! - The taxable base is the gross salary minus the INSS contribution
//! - One band is selected by the base and taxes the whole base at its
//!   rate, minus the band's standard deduction
//! - Bases at or below the exempt limit are not taxed at all

use rust_decimal::Decimal;

use crate::config::TaxTable;

use super::rounding::round_to_cents;

/// Calculates the monthly IRRF withholding.
///
/// The base is `gross_salary - inss`. If the base is at or below the
/// table's exempt limit the withholding is zero. Otherwise a single
/// band is picked by the base and the withholding is
/// `base × rate - deduction`, rounded to cents.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary for the month
/// * `inss` - The INSS contribution already calculated on that salary
/// * `table` - The tax table whose IRRF bands apply
///
/// # Returns
///
/// The IRRF withholding, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_irrf;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::brazil_2024();
/// let irrf = calculate_irrf(
///     Decimal::from_str("3204.55").unwrap(),
///     Decimal::from_str("283.37").unwrap(),
///     &table,
/// );
/// assert_eq!(irrf, Decimal::from_str("56.74").unwrap());
/// ```
pub fn calculate_irrf(gross_salary: Decimal, inss: Decimal, table: &TaxTable) -> Decimal {
    let base = gross_salary - inss;

    if base <= table.irrf.exempt_limit {
        return Decimal::ZERO;
    }

    let (rate, deduction) = table.irrf.band_for(base);
    round_to_cents(base * rate - deduction)
}
