//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for calculating CLT
//! payslips and consolidating payroll runs into reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PeriodRequest, ReportRequest, WorkerRequest};
pub use response::{ApiError, PayslipResponse, ReportResponse};
pub use state::AppState;
