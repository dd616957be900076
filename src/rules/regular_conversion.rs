//! Regular Conversion eligibility evaluation.
//!
//! Applicability is gated on total roster size sitting inside a half-open
//! band. Within the band, support is capped: a flat cap for small rosters,
//! a floored ratio of the roster otherwise. The amount counts
//! min(wage-qualifying employees, cap). Conversion-candidate status is
//! not derivable from structured data, so an applicable program is always
//! needs-review.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode, Requirement,
};

use super::employment_promotion::append_unverified;
use super::screen::{EmployeeScreen, WageCheck, rollup_requirements, wage_check};

// The roster-size band is rolled up separately; screens only check wages.
const SCREEN_REQUIREMENTS: [Requirement; 1] = [Requirement::WageFloor];

/// Screens one employee against the Regular Conversion wage filter.
///
/// The roster-size band is a company-level gate, not part of the
/// per-employee predicate.
pub fn screen_regular_conversion(
    _company: &CompanyProfile,
    employee: &Employee,
    catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    let mut met = Vec::new();
    let mut not_met = Vec::new();
    let mut reasons = Vec::new();

    match wage_check(employee, catalog)? {
        WageCheck::Met => met.push(Requirement::WageFloor),
        WageCheck::Unverified(reason) => {
            met.push(Requirement::WageFloor);
            reasons.push(reason);
        }
        WageCheck::Below => not_met.push(Requirement::WageFloor),
    }

    Ok(EmployeeScreen {
        employee_id: employee.id.clone(),
        qualifies: not_met.is_empty(),
        needs_review: !reasons.is_empty(),
        requirements_met: met,
        requirements_not_met: not_met,
        reasons,
    })
}

/// The support cap for a roster of the given size.
fn support_cap(roster_size: u32, catalog: &ProgramCatalog) -> EngineResult<u32> {
    let params = catalog.regular_conversion();
    if roster_size < params.small_roster_limit {
        return Ok(params.small_roster_cap);
    }
    (Decimal::from(roster_size) * params.cap_ratio)
        .floor()
        .to_u32()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("support cap overflowed for roster of {roster_size}"),
        })
}

/// Evaluates the Regular Conversion program for a roster.
pub fn evaluate_regular_conversion(
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let params = catalog.regular_conversion();
    let roster_size = employees.len() as u32;

    if roster_size < params.min_roster || roster_size >= params.max_roster_exclusive {
        let mut result = EligibilityResult::not_eligible(
            Program::RegularConversion,
            vec![ReasonCode::RosterOutsideBand],
        );
        result.requirements_not_met = vec![Requirement::RosterSizeBand];
        result.notes.push(format!(
            "roster of {roster_size} is outside the supported band [{}, {})",
            params.min_roster, params.max_roster_exclusive
        ));
        return Ok(result);
    }

    let mut screens = Vec::with_capacity(employees.len());
    for employee in employees {
        screens.push(screen_regular_conversion(company, employee, catalog, as_of)?);
    }

    let wage_qualifying: Vec<&EmployeeScreen> = screens.iter().filter(|s| s.qualifies).collect();
    let (mut requirements_met, requirements_not_met) =
        rollup_requirements(&screens, &SCREEN_REQUIREMENTS);
    // The band gate passed to get here
    requirements_met.insert(0, Requirement::RosterSizeBand);

    if wage_qualifying.is_empty() {
        let mut result = EligibilityResult::not_eligible(
            Program::RegularConversion,
            vec![ReasonCode::ExcludedByWageFloor],
        );
        result.requirements_met = requirements_met;
        result.requirements_not_met = requirements_not_met;
        result.notes.push(format!(
            "all {roster_size} roster employees fell below the wage floor"
        ));
        return Ok(result);
    }

    let cap = support_cap(roster_size, catalog)?;
    let count = (wage_qualifying.len() as u32).min(cap);
    let capped: Vec<&EmployeeScreen> = wage_qualifying
        .iter()
        .take(count as usize)
        .copied()
        .collect();
    let breakdown = compute_amount(Program::RegularConversion, count, company.region, catalog)?;

    let mut reasons = vec![ReasonCode::ConversionCandidateReviewRequired];
    let mut notes = vec![format!(
        "support capped at {cap} conversions for a roster of {roster_size}"
    )];
    append_unverified(&capped, &mut reasons, &mut notes);

    Ok(EligibilityResult {
        program: Program::RegularConversion,
        eligibility: Eligibility::NeedsReview,
        requirements_met,
        requirements_not_met,
        qualifying_count: count,
        qualifying_employee_ids: capped.iter().map(|s| s.employee_id.clone()).collect(),
        amount_per_person: breakdown.per_person,
        support_months: breakdown.support_months,
        total_amount: breakdown.total,
        reasons,
        notes,
    })
}
