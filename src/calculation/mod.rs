//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for producing a
//! Brazilian monthly payslip: overtime pay, the progressive INSS
//! contribution, IRRF withholding, the FGTS employer deposit, currency
//! rounding, and the composer that assembles a complete payslip.

mod fgts;
mod inss;
mod irrf;
mod overtime;
mod payroll;
mod rounding;

pub use fgts::calculate_fgts;
pub use inss::calculate_inss;
pub use irrf::calculate_irrf;
pub use overtime::{CLT_OVERTIME_MULTIPLIER, MONTHLY_HOURS_DIVISOR, calculate_overtime};
pub use payroll::calculate_payroll;
pub use rounding::round_to_cents;
