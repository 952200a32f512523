//! Payslip models for the payroll engine.
//!
//! This module contains the [`Payslip`] type produced by a payroll
//! calculation, along with the [`Period`] it covers and its lifecycle
//! [`PayslipStatus`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractType;
use crate::error::{PayrollError, PayrollResult};

/// The month a payslip refers to, known in Brazilian payroll as the
/// competência.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
///
/// let period = Period { month: 3, year: 2024 };
/// assert_eq!(period.to_string(), "03/2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The calendar month, 1 through 12.
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}

impl Period {
    /// Creates a period, checking that the month is a real calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] when `month` is outside
    /// 1 through 12.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Period;
    ///
    /// let period = Period::new(3, 2024).unwrap();
    /// assert_eq!(period.month, 3);
    /// assert!(Period::new(13, 2024).is_err());
    /// ```
    pub fn new(month: u32, year: i32) -> PayrollResult<Self> {
        if month < 1 || month > 12 {
            return Err(PayrollError::InvalidInput {
                field: "period.month".to_string(),
                message: format!("must be 1 through 12, got {}", month),
            });
        }
        Ok(Self { month, year })
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Represents where a payslip sits in its processing lifecycle.
///
/// Every payslip produced by the engine starts out as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// Calculated but not yet reviewed.
    Pending,
    /// Reviewed and approved for payment.
    Processed,
    /// Payment has been made.
    Paid,
}

/// The complete result of a payroll calculation for one worker in one
/// period.
///
/// The statutory components (`inss`, `irrf`, `fgts`) are only present
/// for CLT payslips. PJ payslips omit them entirely rather than
/// carrying zeros, because no withholding happened at all.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ContractType, Payslip, PayslipStatus, Period};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payslip = Payslip {
///     employee_id: "emp_001".to_string(),
///     department: Some("Engineering".to_string()),
///     period: Period { month: 3, year: 2024 },
///     contract_type: ContractType::Pj,
///     status: PayslipStatus::Pending,
///     base_salary: Decimal::from_str("8000.00").unwrap(),
///     overtime_pay: Decimal::ZERO,
///     gross_salary: Decimal::from_str("8000.00").unwrap(),
///     inss: None,
///     irrf: None,
///     fgts: None,
///     deductions: Decimal::ZERO,
///     net_salary: Decimal::from_str("8000.00").unwrap(),
/// };
/// assert_eq!(payslip.gross_salary, payslip.net_salary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// The ID of the worker the payslip is for.
    pub employee_id: String,
    /// The department the worker belonged to when the payslip was cut.
    #[serde(default)]
    pub department: Option<String>,
    /// The month the payslip covers.
    pub period: Period,
    /// The contract regime the calculation followed.
    pub contract_type: ContractType,
    /// Where the payslip sits in its processing lifecycle.
    pub status: PayslipStatus,
    /// The contractual monthly base salary.
    pub base_salary: Decimal,
    /// Pay for overtime hours, already rounded to cents.
    pub overtime_pay: Decimal,
    /// Base salary plus overtime pay.
    pub gross_salary: Decimal,
    /// INSS social security contribution. Absent for PJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inss: Option<Decimal>,
    /// IRRF income tax withheld at source. Absent for PJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrf: Option<Decimal>,
    /// FGTS employer deposit. Absent for PJ. Not a deduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fgts: Option<Decimal>,
    /// Total withheld from the worker: INSS plus IRRF.
    pub deductions: Decimal,
    /// Gross salary minus deductions.
    pub net_salary: Decimal,
}
