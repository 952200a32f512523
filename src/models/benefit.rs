//! Benefit models for the payroll engine.
//!
//! This module defines the benefit records fed into report generation
//! and the categories they are grouped under.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The named kind of a benefit as registered in the HR system.
///
/// Names are free text (e.g. "Vale Transporte", "Plano de Saúde") and
/// are classified into a [`BenefitCategory`] by the report module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitType {
    /// The registered name of the benefit.
    pub name: String,
}

/// A benefit granted to one employee, with its monthly value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitRecord {
    /// The ID of the employee the benefit is granted to.
    pub employee_id: String,
    /// The kind of benefit granted.
    pub benefit_type: BenefitType,
    /// The monthly value of the benefit in BRL.
    pub value: Decimal,
}

/// The reporting bucket a benefit falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCategory {
    /// Commuting benefits (vale transporte).
    Transport,
    /// Meal and grocery benefits (vale refeição, vale alimentação).
    Meal,
    /// Everything else (health plans, gym passes, bonuses in kind).
    Other,
}
