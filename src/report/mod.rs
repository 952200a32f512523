//! Report generation for the payroll engine.
//!
//! This module turns a month of payslips and benefit records into the
//! aggregated [`crate::models::ReportSummary`]: company totals,
//! per-department subtotals, and benefit spend by bucket.

mod aggregate;
mod benefit_category;
mod department;

pub use aggregate::aggregate;
pub use benefit_category::classify_benefit;
pub use department::{UNSPECIFIED_DEPARTMENT, resolve_department};
