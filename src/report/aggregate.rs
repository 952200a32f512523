//! Payroll report aggregation functionality.
//!
//! This module folds a month of payslips and benefit records into a
//! single [`ReportSummary`]: company-wide totals, per-department
//! subtotals, and benefit spend grouped by bucket.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::{
    BenefitCategory, BenefitRecord, DepartmentBreakdown, Payslip, ReportSummary,
};

use super::benefit_category::classify_benefit;
use super::department::resolve_department;

/// Aggregates payslips and benefit records into a report summary.
///
/// Payslips are walked once. Every payslip counts as one employee,
/// even if the same employee id appears twice, matching how a payroll
/// run with a duplicate entry actually paid out. Department buckets
/// are created in first-encounter order and named through
/// [`resolve_department`], with the `departments` directory (employee
/// id to department name) taking precedence over the payslip's own
/// department field.
///
/// Benefit records are then walked once. Records for employees with
/// no payslip in the run are skipped; the rest are bucketed by
/// [`classify_benefit`] and also summed into the overall benefit
/// total.
///
/// Totals are plain sums of already-rounded payslip figures, so no
/// rounding happens here.
///
/// # Arguments
///
/// * `payslips` - The payslips of the payroll run being reported
/// * `benefits` - The active benefit grants to fold in
/// * `departments` - Directory mapping employee ids to department names
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::TaxTable;
/// use payroll_engine::models::{ContractType, Period, Worker};
/// use payroll_engine::report::aggregate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let table = TaxTable::brazil_2024();
/// let worker = Worker {
///     id: "emp_001".to_string(),
///     department: Some("Engineering".to_string()),
///     contract_type: ContractType::Clt,
///     base_salary: Decimal::from_str("3000.00").unwrap(),
/// };
/// let payslip = calculate_payroll(
///     &worker,
///     Decimal::ZERO,
///     Period { month: 3, year: 2024 },
///     &table,
/// ).unwrap();
///
/// let summary = aggregate(&[payslip], &[], &HashMap::new());
/// assert_eq!(summary.employees, 1);
/// assert_eq!(summary.departments[0].department, "Engineering");
/// ```
pub fn aggregate(
    payslips: &[Payslip],
    benefits: &[BenefitRecord],
    departments: &HashMap<String, String>,
) -> ReportSummary {
    let mut summary = ReportSummary::default();
    let mut department_index: HashMap<String, usize> = HashMap::new();
    let mut covered: HashSet<&str> = HashSet::new();

    for payslip in payslips {
        covered.insert(payslip.employee_id.as_str());

        summary.employees += 1;
        summary.total_base_salary += payslip.base_salary;
        summary.total_overtime_pay += payslip.overtime_pay;
        summary.total_gross_salary += payslip.gross_salary;
        summary.total_inss += payslip.inss.unwrap_or(Decimal::ZERO);
        summary.total_irrf += payslip.irrf.unwrap_or(Decimal::ZERO);
        summary.total_fgts += payslip.fgts.unwrap_or(Decimal::ZERO);
        summary.total_deductions += payslip.deductions;
        summary.total_net_salary += payslip.net_salary;

        let department = resolve_department(
            departments.get(&payslip.employee_id).map(String::as_str),
            payslip.department.as_deref(),
        );
        let index = match department_index.get(&department) {
            Some(&index) => index,
            None => {
                let index = summary.departments.len();
                summary.departments.push(DepartmentBreakdown {
                    department: department.clone(),
                    ..DepartmentBreakdown::default()
                });
                department_index.insert(department, index);
                index
            }
        };

        let bucket = &mut summary.departments[index];
        bucket.employees += 1;
        bucket.total_base_salary += payslip.base_salary;
        bucket.total_overtime_pay += payslip.overtime_pay;
        bucket.total_net_salary += payslip.net_salary;
    }

    for benefit in benefits {
        if !covered.contains(benefit.employee_id.as_str()) {
            continue;
        }

        match classify_benefit(&benefit.benefit_type.name) {
            BenefitCategory::Transport => summary.benefits.transport_voucher += benefit.value,
            BenefitCategory::Meal => summary.benefits.meal_voucher += benefit.value,
            BenefitCategory::Other => summary.benefits.other_benefits += benefit.value,
        }
        summary.total_benefits += benefit.value;
    }

    summary
}
