//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` and `/payroll/report` endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BenefitRecord, ContractType, Payslip, Period, Worker};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Contains the worker, the overtime hours worked, and the period the
/// payslip should cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The worker being paid.
    pub worker: WorkerRequest,
    /// The overtime hours worked in the period. Defaults to zero.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// The month the payslip covers.
    pub period: PeriodRequest,
}

/// Worker information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// Unique identifier for the worker.
    pub id: String,
    /// The department the worker belongs to, when known.
    #[serde(default)]
    pub department: Option<String>,
    /// The contract regime the worker is hired under.
    pub contract_type: ContractType,
    /// The contractual monthly base salary in BRL.
    pub base_salary: Decimal,
}

/// Period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The calendar month, 1 through 12.
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}

/// Request body for the `/payroll/report` endpoint.
///
/// Carries a payroll run's payslips together with the benefit grants
/// and the employee directory used to group by department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The payslips of the payroll run being reported.
    pub payslips: Vec<Payslip>,
    /// Active benefit grants to fold into the report.
    #[serde(default)]
    pub benefits: Vec<BenefitRecord>,
    /// Directory mapping employee ids to department names.
    #[serde(default)]
    pub departments: HashMap<String, String>,
}

impl From<WorkerRequest> for Worker {
    fn from(req: WorkerRequest) -> Self {
        Worker {
            id: req.id,
            department: req.department,
            contract_type: req.contract_type,
            base_salary: req.base_salary,
        }
    }
}

impl From<PeriodRequest> for Period {
    fn from(req: PeriodRequest) -> Self {
        Period {
            month: req.month,
            year: req.year,
        }
    }
}
