//! Tax table loading and management for the payroll engine.
//!
//! This module provides the tax tables that drive the statutory
//! calculations, either built in or loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::TaxTableLoader;
//!
//! let loader = TaxTableLoader::load("./config/tables/2024.yaml").unwrap();
//! println!("Loaded tables for {}", loader.table().year);
//! ```

mod loader;
mod types;

pub use loader::TaxTableLoader;
pub use types::{InssBracket, IrrfBand, IrrfTable, TaxTable};
