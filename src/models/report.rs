//! Report summary models for the payroll engine.
//!
//! This module contains the [`ReportSummary`] type and its associated
//! structures produced by aggregating a month of payslips and benefit
//! records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-department subtotals within a payroll report.
///
/// Departments appear in the order they were first encountered while
/// walking the payslips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    /// The department name, resolved through the employee directory.
    pub department: String,
    /// How many payslips landed in this department.
    pub employees: u32,
    /// Sum of base salaries in this department.
    pub total_base_salary: Decimal,
    /// Sum of overtime pay in this department.
    pub total_overtime_pay: Decimal,
    /// Sum of net salaries in this department.
    pub total_net_salary: Decimal,
}

/// Benefit spend grouped by reporting bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenefitTotals {
    /// Total spend on commuting benefits.
    pub transport_voucher: Decimal,
    /// Total spend on meal and grocery benefits.
    pub meal_voucher: Decimal,
    /// Total spend on every other benefit kind.
    pub other_benefits: Decimal,
}

/// The aggregated summary of one month of payroll.
///
/// All monetary totals are plain sums of already-rounded payslip
/// figures, so no additional rounding is applied here.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportSummary;
///
/// let summary = ReportSummary::default();
/// assert_eq!(summary.employees, 0);
/// assert!(summary.departments.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// How many payslips went into the report.
    pub employees: u32,
    /// Sum of base salaries across all payslips.
    pub total_base_salary: Decimal,
    /// Sum of overtime pay across all payslips.
    pub total_overtime_pay: Decimal,
    /// Sum of gross salaries across all payslips.
    pub total_gross_salary: Decimal,
    /// Sum of INSS contributions. PJ payslips contribute nothing.
    pub total_inss: Decimal,
    /// Sum of IRRF withholdings. PJ payslips contribute nothing.
    pub total_irrf: Decimal,
    /// Sum of FGTS deposits. PJ payslips contribute nothing.
    pub total_fgts: Decimal,
    /// Sum of payslip deductions.
    pub total_deductions: Decimal,
    /// Sum of net salaries.
    pub total_net_salary: Decimal,
    /// Total benefit spend for employees covered by the payroll.
    pub total_benefits: Decimal,
    /// Per-department subtotals, in first-encounter order.
    pub departments: Vec<DepartmentBreakdown>,
    /// Benefit spend broken down by bucket.
    pub benefits: BenefitTotals,
}
