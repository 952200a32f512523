//! FGTS deposit calculation functionality.
//!
//! This module provides the FGTS employer deposit calculation used for
//! CLT payslips.
//!
//! The deposit is 8% of gross salary and is paid by the employer into
//! the worker's FGTS account. It never comes out of the worker's pay,
//! so it is reported on the payslip but excluded from deductions.

use rust_decimal::Decimal;

use crate::config::TaxTable;

/// Calculates the monthly FGTS deposit on a gross salary.
///
/// The deposit is the gross salary times the table's FGTS rate and is
/// deliberately not rounded: monthly deposits accumulate in the FGTS
/// account, and keeping full precision means the deposits for two
/// months sum to exactly the deposit on the combined salary.
///
/// # Arguments
///
/// * `gross_salary` - The gross salary for the month
/// * `table` - The tax table whose FGTS rate applies
///
/// # Returns
///
/// The exact, unrounded FGTS deposit.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_fgts;
/// use payroll_engine::config::TaxTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::brazil_2024();
/// let fgts = calculate_fgts(Decimal::from_str("3204.55").unwrap(), &table);
/// assert_eq!(fgts, Decimal::from_str("256.364").unwrap());
/// ```
pub fn calculate_fgts(gross_salary: Decimal, table: &TaxTable) -> Decimal {
    gross_salary * table.fgts_rate
}
