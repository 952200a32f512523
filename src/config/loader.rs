//! Tax table loading functionality.
//!
//! This module provides the [`TaxTableLoader`] type for loading tax
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::TaxTable;

/// Loads and provides access to a tax table.
///
/// The `TaxTableLoader` reads a YAML tax table file, checks it for
/// internal consistency and hands out the parsed [`TaxTable`].
///
/// # File Structure
///
/// A tax table file holds one year's tables:
/// ```text
/// config/tables/
/// └── 2024.yaml   # INSS brackets, IRRF bands, FGTS rate
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::TaxTableLoader;
///
/// let loader = TaxTableLoader::load("./config/tables/2024.yaml").unwrap();
/// println!("Loaded tables for {}", loader.table().year);
/// ```
#[derive(Debug, Clone)]
pub struct TaxTableLoader {
    table: TaxTable,
}

impl TaxTableLoader {
    /// Loads a tax table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tax table file (e.g., "./config/tables/2024.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `TaxTableLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The parsed tables fail a consistency check
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::TaxTableLoader;
    ///
    /// let loader = TaxTableLoader::load("./config/tables/2024.yaml")?;
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let table = Self::load_yaml::<TaxTable>(path.as_ref())?;
        table.validate()?;
        Ok(Self { table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tax table.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }
}
