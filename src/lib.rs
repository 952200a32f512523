//! Payroll calculation engine for Brazilian CLT employment
//!
//! This crate provides functionality for computing monthly payslips under the
//! CLT regime (overtime, INSS, IRRF and FGTS) and for consolidating payroll
//! runs into summary reports grouped by department and benefit category.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
