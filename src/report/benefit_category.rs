//! Benefit classification for payroll reports.
//!
//! Benefit kinds come in as free-text names registered in the HR
//! system, so reports bucket them by case-insensitive substring
//! matching on the Portuguese benefit vocabulary.

use crate::models::BenefitCategory;

/// Substring rules checked in order; the first hit wins.
const CATEGORY_RULES: &[(&[&str], BenefitCategory)] = &[
    (&["transporte"], BenefitCategory::Transport),
    (&["refeição", "alimentação"], BenefitCategory::Meal),
];

/// Classifies a benefit type name into its reporting bucket.
///
/// Matching is case-insensitive. Names mentioning "transporte" are
/// transport benefits even when they also mention a meal keyword,
/// because the transport rule is checked first. Names matching no
/// rule fall into [`BenefitCategory::Other`].
///
/// # Examples
///
/// ```
/// use payroll_engine::models::BenefitCategory;
/// use payroll_engine::report::classify_benefit;
///
/// assert_eq!(classify_benefit("Vale Transporte"), BenefitCategory::Transport);
/// assert_eq!(classify_benefit("Vale Refeição"), BenefitCategory::Meal);
/// assert_eq!(classify_benefit("Plano de Saúde"), BenefitCategory::Other);
/// ```
pub fn classify_benefit(type_name: &str) -> BenefitCategory {
    let normalized = type_name.to_lowercase();

    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return *category;
        }
    }

    BenefitCategory::Other
}
