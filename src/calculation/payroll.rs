//! Complete payslip calculation functionality.
//!
//! This module composes the individual calculations into a full
//! monthly payslip for one worker: overtime, the statutory INSS, IRRF
//! and FGTS amounts for CLT workers, and the resulting net salary.

use rust_decimal::Decimal;

use crate::config::TaxTable;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ContractType, Payslip, PayslipStatus, Period, Worker};

use super::fgts::calculate_fgts;
use super::inss::calculate_inss;
use super::irrf::calculate_irrf;
use super::overtime::calculate_overtime;

/// Calculates the complete payslip for one worker in one period.
///
/// The calculation runs in a fixed order: overtime pay first, then
/// gross salary, then the statutory amounts on that gross. For CLT
/// workers INSS and IRRF are withheld and the FGTS deposit is
/// reported; PJ contractors receive their gross untouched and the
/// statutory fields stay absent. Every payslip starts out `Pending`.
///
/// # Arguments
///
/// * `worker` - The worker being paid
/// * `overtime_hours` - The overtime hours worked in the period
/// * `period` - The month the payslip covers
/// * `table` - The tax table to apply
///
/// # Returns
///
/// Returns the payslip on success, or an error if:
/// - The base salary or overtime hours are negative
/// - The period month is outside 1 through 12
/// - Deductions exceed gross salary, which no valid input produces
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::TaxTable;
/// use payroll_engine::models::{ContractType, Period, Worker};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable::brazil_2024();
/// let worker = Worker {
///     id: "emp_001".to_string(),
///     department: Some("Engineering".to_string()),
///     contract_type: ContractType::Clt,
///     base_salary: Decimal::from_str("3000.00").unwrap(),
/// };
///
/// let payslip = calculate_payroll(
///     &worker,
///     Decimal::from_str("10").unwrap(),
///     Period { month: 3, year: 2024 },
///     &table,
/// ).unwrap();
///
/// assert_eq!(payslip.gross_salary, Decimal::from_str("3204.55").unwrap());
/// assert_eq!(payslip.net_salary, Decimal::from_str("2864.44").unwrap());
/// ```
pub fn calculate_payroll(
    worker: &Worker,
    overtime_hours: Decimal,
    period: Period,
    table: &TaxTable,
) -> PayrollResult<Payslip> {
    if worker.base_salary < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "base_salary".to_string(),
            message: format!("cannot be negative, got {}", worker.base_salary),
        });
    }
    if overtime_hours < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "overtime_hours".to_string(),
            message: format!("cannot be negative, got {}", overtime_hours),
        });
    }
    if period.month < 1 || period.month > 12 {
        return Err(PayrollError::InvalidInput {
            field: "period.month".to_string(),
            message: format!("must be 1 through 12, got {}", period.month),
        });
    }

    let overtime_pay = calculate_overtime(worker.base_salary, overtime_hours, worker.contract_type);
    let gross_salary = worker.base_salary + overtime_pay;

    let (inss, irrf, fgts) = match worker.contract_type {
        ContractType::Clt => {
            let inss = calculate_inss(gross_salary, table);
            let irrf = calculate_irrf(gross_salary, inss, table);
            let fgts = calculate_fgts(gross_salary, table);
            (Some(inss), Some(irrf), Some(fgts))
        }
        ContractType::Pj => (None, None, None),
    };

    // FGTS is an employer deposit, never withheld from the worker
    let deductions = inss.unwrap_or(Decimal::ZERO) + irrf.unwrap_or(Decimal::ZERO);
    let net_salary = gross_salary - deductions;

    if net_salary < Decimal::ZERO {
        return Err(PayrollError::NegativeNetSalary {
            employee_id: worker.id.clone(),
            net_salary,
        });
    }

    Ok(Payslip {
        employee_id: worker.id.clone(),
        department: worker.department.clone(),
        period,
        contract_type: worker.contract_type,
        status: PayslipStatus::Pending,
        base_salary: worker.base_salary,
        overtime_pay,
        gross_salary,
        inss,
        irrf,
        fgts,
        deductions,
        net_salary,
    })
}
