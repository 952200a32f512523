//! Worker model and related types.
//!
//! This module defines the Worker struct and ContractType enum
//! for representing employees on the payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the contract regime a worker is hired under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    /// Registered employment under the CLT labour code, subject to
    /// INSS, IRRF and FGTS.
    Clt,
    /// Contractor engagement through a legal entity. No statutory
    /// deductions are withheld by the payer.
    Pj,
}

/// Represents a worker whose payslip is being calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
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

impl Worker {
    /// Returns true if the worker is a registered CLT employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{ContractType, Worker};
    /// use rust_decimal::Decimal;
    ///
    /// let worker = Worker {
    ///     id: "emp_001".to_string(),
    ///     department: Some("Engineering".to_string()),
    ///     contract_type: ContractType::Clt,
    ///     base_salary: Decimal::new(300000, 2),
    /// };
    /// assert!(worker.is_clt());
    /// ```
    pub fn is_clt(&self) -> bool {
        self.contract_type == ContractType::Clt
    }
}
