//! Parental Employment Stability eligibility evaluation.
//!
//! Gated solely on small-business status. The qualifying event — an
//! approved parental leave — is not represented in the roster, so a
//! small-business claim is always needs-review with a single claim unit
//! and an amount left at zero for manual pricing.

use chrono::NaiveDate;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode, Requirement,
};

use super::screen::EmployeeScreen;

/// Screens one employee against Parental Employment Stability.
///
/// The program is claimed at company level; no roster employee
/// individually qualifies, so matrix cells stay empty.
pub fn screen_parental_employment_stability(
    _company: &CompanyProfile,
    employee: &Employee,
    _catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    Ok(EmployeeScreen::disqualified(&employee.id, Vec::new()))
}

/// Evaluates the Parental Employment Stability program for a company.
pub fn evaluate_parental_employment_stability(
    company: &CompanyProfile,
    _employees: &[Employee],
    catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    if !company.is_small_business {
        let mut result = EligibilityResult::not_eligible(
            Program::ParentalEmploymentStability,
            vec![ReasonCode::NotSmallBusiness],
        );
        result.requirements_not_met = vec![Requirement::SmallBusiness];
        return Ok(result);
    }

    // One company-level claim unit; the amount is priced during review
    let breakdown = compute_amount(
        Program::ParentalEmploymentStability,
        1,
        company.region,
        catalog,
    )?;

    Ok(EligibilityResult {
        program: Program::ParentalEmploymentStability,
        eligibility: Eligibility::NeedsReview,
        requirements_met: vec![Requirement::SmallBusiness],
        requirements_not_met: Vec::new(),
        qualifying_count: 1,
        qualifying_employee_ids: Vec::new(),
        amount_per_person: breakdown.per_person,
        support_months: breakdown.support_months,
        total_amount: breakdown.total,
        reasons: vec![ReasonCode::ParentalLeaveReviewRequired],
        notes: vec![
            "amount depends on the approved leave event and is entered manually during review"
                .to_string(),
        ],
    })
}
