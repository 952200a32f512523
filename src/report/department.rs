//! Department resolution for payroll reports.
//!
//! Payslips are grouped by department, but the department recorded on
//! a payslip can be stale or missing. The employee directory wins when
//! it knows better, and payslips that resolve to nothing are grouped
//! under a fixed fallback label.

/// Label for payslips whose department cannot be resolved.
pub const UNSPECIFIED_DEPARTMENT: &str = "Sem Departamento";

/// Resolves the department a payslip is grouped under.
///
/// The directory entry for the employee takes precedence over the
/// department recorded on the payslip itself. Empty strings count as
/// missing. When neither source knows, the payslip lands in
/// [`UNSPECIFIED_DEPARTMENT`].
///
/// # Examples
///
/// ```
/// use payroll_engine::report::{UNSPECIFIED_DEPARTMENT, resolve_department};
///
/// assert_eq!(
///     resolve_department(Some("Diretoria"), Some("Engineering")),
///     "Diretoria"
/// );
/// assert_eq!(resolve_department(None, Some("Engineering")), "Engineering");
/// assert_eq!(resolve_department(None, None), UNSPECIFIED_DEPARTMENT);
/// ```
pub fn resolve_department(
    directory_department: Option<&str>,
    record_department: Option<&str>,
) -> String {
    directory_department
        .filter(|name| !name.is_empty())
        .or(record_department.filter(|name| !name.is_empty()))
        .unwrap_or(UNSPECIFIED_DEPARTMENT)
        .to_string()
}
