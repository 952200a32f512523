//! Tax table types for payroll calculation.
//!
//! This module contains the strongly-typed tax tables that drive the
//! INSS, IRRF and FGTS calculations. Tables can be deserialized from
//! YAML files or taken from the built-in 2024 values.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{PayrollError, PayrollResult};

/// One progressive INSS bracket.
///
/// Each bracket taxes the slice of gross salary between the previous
/// bracket's ceiling and its own ceiling at its own rate.
#[derive(Debug, Clone, Deserialize)]
pub struct InssBracket {
    /// The upper bound of the salary slice this bracket covers.
    pub ceiling: Decimal,
    /// The contribution rate applied to the slice, as a fraction.
    pub rate: Decimal,
}

/// One IRRF band with its rate and standard deduction.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfBand {
    /// The upper bound of the taxable base this band covers.
    pub ceiling: Decimal,
    /// The tax rate applied to the whole base, as a fraction.
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

/// The IRRF withholding table.
///
/// Unlike INSS, IRRF is not progressive across bands. The whole
/// taxable base is taxed at a single band's rate, and the band's
/// standard deduction compensates for the lower bands.
#[derive(Debug, Clone, Deserialize)]
pub struct IrrfTable {
    /// Bases at or below this amount are exempt.
    pub exempt_limit: Decimal,
    /// Bounded bands in ascending ceiling order.
    pub bands: Vec<IrrfBand>,
    /// The rate applied above the last bounded band.
    pub top_rate: Decimal,
    /// The standard deduction applied above the last bounded band.
    pub top_deduction: Decimal,
}

impl IrrfTable {
    /// Returns the rate and standard deduction for a taxable base.
    ///
    /// The base must already be above the exempt limit; exemption is
    /// the caller's decision.
    pub fn band_for(&self, base: Decimal) -> (Decimal, Decimal) {
        self.bands
            .iter()
            .find(|band| base <= band.ceiling)
            .map(|band| (band.rate, band.deduction))
            .unwrap_or((self.top_rate, self.top_deduction))
    }
}

/// The complete set of tax tables for one year.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxTable;
///
/// let table = TaxTable::brazil_2024();
/// assert_eq!(table.year, 2024);
/// assert_eq!(table.inss.len(), 4);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTable {
    /// The year these tables are effective for.
    pub year: i32,
    /// Progressive INSS brackets in ascending ceiling order.
    pub inss: Vec<InssBracket>,
    /// The IRRF withholding table.
    pub irrf: IrrfTable,
    /// The FGTS deposit rate, as a fraction of gross salary.
    pub fgts_rate: Decimal,
}

impl TaxTable {
    /// Returns the official Brazilian tables for 2024.
    ///
    /// INSS brackets follow Portaria Interministerial MPS/MF nº 2/2024
    /// and the IRRF table follows the values effective from February
    /// 2024 onward.
    pub fn brazil_2024() -> Self {
        Self {
            year: 2024,
            inss: vec![
                InssBracket {
                    ceiling: Decimal::new(141200, 2),
                    rate: Decimal::new(75, 3),
                },
                InssBracket {
                    ceiling: Decimal::new(266668, 2),
                    rate: Decimal::new(9, 2),
                },
                InssBracket {
                    ceiling: Decimal::new(400003, 2),
                    rate: Decimal::new(12, 2),
                },
                InssBracket {
                    ceiling: Decimal::new(778602, 2),
                    rate: Decimal::new(14, 2),
                },
            ],
            irrf: IrrfTable {
                exempt_limit: Decimal::new(225920, 2),
                bands: vec![
                    IrrfBand {
                        ceiling: Decimal::new(282665, 2),
                        rate: Decimal::new(75, 3),
                        deduction: Decimal::new(16944, 2),
                    },
                    IrrfBand {
                        ceiling: Decimal::new(375105, 2),
                        rate: Decimal::new(15, 2),
                        deduction: Decimal::new(38144, 2),
                    },
                    IrrfBand {
                        ceiling: Decimal::new(466468, 2),
                        rate: Decimal::new(225, 3),
                        deduction: Decimal::new(66277, 2),
                    },
                ],
                top_rate: Decimal::new(275, 3),
                top_deduction: Decimal::new(89600, 2),
            },
            fgts_rate: Decimal::new(8, 2),
        }
    }

    /// Checks the tables for internal consistency.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a usable table, or `ConfigValidation` if:
    /// - The INSS bracket list is empty
    /// - Any ceiling sequence is not strictly ascending
    /// - Any rate falls outside the range 0 to 1
    /// - Any deduction or ceiling is negative
    pub fn validate(&self) -> PayrollResult<()> {
        if self.inss.is_empty() {
            return Err(PayrollError::ConfigValidation {
                message: "INSS bracket list is empty".to_string(),
            });
        }

        let mut previous_ceiling = Decimal::ZERO;
        for bracket in &self.inss {
            if bracket.ceiling <= previous_ceiling {
                return Err(PayrollError::ConfigValidation {
                    message: format!(
                        "INSS bracket ceilings must be ascending, found {} after {}",
                        bracket.ceiling, previous_ceiling
                    ),
                });
            }
            Self::check_rate("INSS", bracket.rate)?;
            previous_ceiling = bracket.ceiling;
        }

        if self.irrf.exempt_limit < Decimal::ZERO {
            return Err(PayrollError::ConfigValidation {
                message: "IRRF exempt limit cannot be negative".to_string(),
            });
        }
        let mut previous_ceiling = self.irrf.exempt_limit;
        for band in &self.irrf.bands {
            if band.ceiling <= previous_ceiling {
                return Err(PayrollError::ConfigValidation {
                    message: format!(
                        "IRRF band ceilings must be ascending, found {} after {}",
                        band.ceiling, previous_ceiling
                    ),
                });
            }
            Self::check_rate("IRRF", band.rate)?;
            if band.deduction < Decimal::ZERO {
                return Err(PayrollError::ConfigValidation {
                    message: format!("IRRF deduction {} cannot be negative", band.deduction),
                });
            }
            previous_ceiling = band.ceiling;
        }
        Self::check_rate("IRRF", self.irrf.top_rate)?;
        if self.irrf.top_deduction < Decimal::ZERO {
            return Err(PayrollError::ConfigValidation {
                message: "IRRF top deduction cannot be negative".to_string(),
            });
        }

        Self::check_rate("FGTS", self.fgts_rate)?;

        Ok(())
    }

    fn check_rate(table: &str, rate: Decimal) -> PayrollResult<()> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(PayrollError::ConfigValidation {
                message: format!("{} rate {} must be between 0 and 1", table, rate),
            });
        }
        Ok(())
    }
}
