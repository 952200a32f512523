//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefit;
mod payslip;
mod report;
mod worker;

pub use benefit::{BenefitCategory, BenefitRecord, BenefitType};
pub use payslip::{Payslip, PayslipStatus, Period};
pub use report::{BenefitTotals, DepartmentBreakdown, ReportSummary};
pub use worker::{ContractType, Worker};
