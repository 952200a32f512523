//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxTable;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the tax table in force.
#[derive(Clone)]
pub struct AppState {
    /// The tax table used for calculations.
    table: Arc<TaxTable>,
}

impl AppState {
    /// Creates a new application state with the given tax table.
    pub fn new(table: TaxTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the tax table.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }
}
