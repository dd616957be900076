//! Shared per-employee screening helpers.
//!
//! Every evaluator screens employees through the same fail-open checks:
//! an unknown salary or a missing hire date passes the test but records
//! the missing datum, so gaps in input data surface as needs-review
//! rather than silent exclusion.

use chrono::NaiveDate;

use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{Employee, ReasonCode, Requirement};

/// Outcome of the wage-floor test for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageCheck {
    /// Salary confirmed at or above the applicable threshold.
    Met,
    /// The test passed provisionally because a datum was missing.
    Unverified(ReasonCode),
    /// Salary confirmed below the threshold.
    Below,
}

/// Outcome of the minimum-tenure test for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenureCheck {
    /// Tenure confirmed at or above the minimum.
    Met,
    /// The hire date is missing; the test passed provisionally.
    Unverified,
    /// Tenure confirmed below the minimum.
    Below,
}

/// Runs the wage-floor test against the threshold for the employee's own
/// hire date.
///
/// An unset salary passes provisionally (`SalaryUnverified`); a missing
/// hire date leaves the threshold unresolvable and also passes
/// provisionally (`HireDateMissing`). Unknown pay must never silently
/// become ineligible, and never a hard guarantee either.
pub fn wage_check(employee: &Employee, catalog: &ProgramCatalog) -> EngineResult<WageCheck> {
    if !employee.has_known_salary() {
        return Ok(WageCheck::Unverified(ReasonCode::SalaryUnverified));
    }
    let Some(hire_date) = employee.hire_date else {
        return Ok(WageCheck::Unverified(ReasonCode::HireDateMissing));
    };
    let threshold = catalog.minimum_wage_on_hire(hire_date)?;
    if employee.monthly_salary >= threshold {
        Ok(WageCheck::Met)
    } else {
        Ok(WageCheck::Below)
    }
}

/// Runs the minimum-tenure test as of the evaluation date.
pub fn tenure_check(employee: &Employee, as_of: NaiveDate, min_months: u32) -> TenureCheck {
    match employee.tenure_months_on(as_of) {
        None => TenureCheck::Unverified,
        Some(months) if months >= min_months => TenureCheck::Met,
        Some(_) => TenureCheck::Below,
    }
}

/// The outcome of screening one employee against one program.
///
/// The roster-level evaluators and the report matrix are both built from
/// these screens, so the two views always derive from the same predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeScreen {
    /// The screened employee.
    pub employee_id: String,
    /// Whether the employee passes the program's structural filters.
    pub qualifies: bool,
    /// Whether a qualification rests on a provisionally-passed check.
    pub needs_review: bool,
    /// Requirements this employee satisfied.
    pub requirements_met: Vec<Requirement>,
    /// Requirements this employee failed.
    pub requirements_not_met: Vec<Requirement>,
    /// Missing-datum codes behind a provisional pass.
    pub reasons: Vec<ReasonCode>,
}

impl EmployeeScreen {
    /// A screen that fails every listed requirement.
    pub fn disqualified(employee_id: &str, requirements_not_met: Vec<Requirement>) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            qualifies: false,
            needs_review: false,
            requirements_met: Vec::new(),
            requirements_not_met,
            reasons: Vec::new(),
        }
    }
}

/// Rolls per-employee screens up to roster-level requirement lists.
///
/// A requirement counts as met when at least one screened employee
/// satisfied it, and as not met when it was checked but nobody did; the
/// supplied order is preserved.
pub fn rollup_requirements(
    screens: &[EmployeeScreen],
    program_requirements: &[Requirement],
) -> (Vec<Requirement>, Vec<Requirement>) {
    let mut met = Vec::new();
    let mut not_met = Vec::new();
    for requirement in program_requirements {
        let any_met = screens
            .iter()
            .any(|s| s.requirements_met.contains(requirement));
        if any_met {
            met.push(*requirement);
        } else {
            not_met.push(*requirement);
        }
    }
    (met, not_met)
}
