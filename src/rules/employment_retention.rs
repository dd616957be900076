//! Employment Retention eligibility evaluation.
//!
//! Qualification depends on revenue-decline evidence that lives outside
//! the roster, so a selected program is unconditionally needs-review with
//! notes naming the required evidence; the amount is priced manually.

use chrono::NaiveDate;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode,
};

use super::screen::EmployeeScreen;

/// Screens one employee against Employment Retention.
///
/// Company-level program; no roster employee individually qualifies.
pub fn screen_employment_retention(
    _company: &CompanyProfile,
    employee: &Employee,
    _catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    Ok(EmployeeScreen::disqualified(&employee.id, Vec::new()))
}

/// Evaluates the Employment Retention program for a company.
pub fn evaluate_employment_retention(
    company: &CompanyProfile,
    _employees: &[Employee],
    catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let breakdown = compute_amount(Program::EmploymentRetention, 1, company.region, catalog)?;

    let documents: Vec<String> = catalog
        .required_documents(Program::EmploymentRetention)
        .iter()
        .map(|d| format!("{d:?}"))
        .collect();

    Ok(EligibilityResult {
        program: Program::EmploymentRetention,
        eligibility: Eligibility::NeedsReview,
        requirements_met: Vec::new(),
        requirements_not_met: Vec::new(),
        qualifying_count: 1,
        qualifying_employee_ids: Vec::new(),
        amount_per_person: breakdown.per_person,
        support_months: breakdown.support_months,
        total_amount: breakdown.total,
        reasons: vec![ReasonCode::RevenueDeclineEvidenceRequired],
        notes: vec![format!(
            "requires revenue-decline evidence for review: {}",
            documents.join(", ")
        )],
    })
}
