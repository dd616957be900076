//! Senior Continued Employment eligibility evaluation.
//!
//! Qualifying employees are aged 60 or above with at least twelve months
//! of tenure, employment insurance, and pay at or above the wage floor
//! for their own hire date. The quarterly rate is region-dependent.
//!
//! Seniors removed purely by the wage floor are counted separately from
//! those below the tenure minimum: raising pay and waiting out tenure are
//! different remediation paths and the reasons must not be merged.

use chrono::NaiveDate;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode, Requirement,
};

use super::employment_promotion::append_unverified;
use super::screen::{EmployeeScreen, TenureCheck, WageCheck, rollup_requirements, tenure_check, wage_check};

const REQUIREMENTS: [Requirement; 4] = [
    Requirement::SeniorAgeBand,
    Requirement::EmploymentInsurance,
    Requirement::MinimumTenure,
    Requirement::WageFloor,
];

/// Screens one employee against the Senior Continued Employment filters.
pub fn screen_senior_continued_employment(
    _company: &CompanyProfile,
    employee: &Employee,
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    let min_tenure = catalog.senior_continued_employment().min_tenure_months;
    screen_senior(employee, catalog, as_of, min_tenure)
}

/// Shared senior screening: age band, insurance, tenure, wage floor.
pub(super) fn screen_senior(
    employee: &Employee,
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
    min_tenure_months: u32,
) -> EngineResult<EmployeeScreen> {
    let mut met = Vec::new();
    let mut not_met = Vec::new();
    let mut reasons = Vec::new();

    if employee.is_senior(as_of) {
        met.push(Requirement::SeniorAgeBand);
    } else {
        not_met.push(Requirement::SeniorAgeBand);
    }
    if employee.insurance.employment {
        met.push(Requirement::EmploymentInsurance);
    } else {
        not_met.push(Requirement::EmploymentInsurance);
    }

    match tenure_check(employee, as_of, min_tenure_months) {
        TenureCheck::Met => met.push(Requirement::MinimumTenure),
        TenureCheck::Unverified => {
            met.push(Requirement::MinimumTenure);
            reasons.push(ReasonCode::HireDateMissing);
        }
        TenureCheck::Below => not_met.push(Requirement::MinimumTenure),
    }

    match wage_check(employee, catalog)? {
        WageCheck::Met => met.push(Requirement::WageFloor),
        WageCheck::Unverified(reason) => {
            met.push(Requirement::WageFloor);
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
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

/// Builds the roster-level senior result from per-employee screens.
///
/// Shared by both senior programs; only the program identity and catalog
/// parameters differ.
pub(super) fn evaluate_senior(
    program: Program,
    company: &CompanyProfile,
    screens: Vec<EmployeeScreen>,
    catalog: &ProgramCatalog,
) -> EngineResult<EligibilityResult> {
    let qualifying: Vec<&EmployeeScreen> = screens.iter().filter(|s| s.qualifies).collect();
    let (requirements_met, requirements_not_met) = rollup_requirements(&screens, &REQUIREMENTS);

    let demographic: Vec<&EmployeeScreen> = screens
        .iter()
        .filter(|s| {
            s.requirements_met.contains(&Requirement::SeniorAgeBand)
                && s.requirements_met.contains(&Requirement::EmploymentInsurance)
        })
        .collect();
    let tenure_short = demographic
        .iter()
        .filter(|s| s.requirements_not_met.contains(&Requirement::MinimumTenure))
        .count();
    let wage_floor_only = demographic
        .iter()
        .filter(|s| {
            s.requirements_met.contains(&Requirement::MinimumTenure)
                && s.requirements_not_met.contains(&Requirement::WageFloor)
        })
        .count();

    let min_tenure = match program {
        Program::SeniorEmploymentSupport => catalog.senior_employment_support().min_tenure_months,
        _ => catalog.senior_continued_employment().min_tenure_months,
    };

    if qualifying.is_empty() {
        let mut reasons = Vec::new();
        let mut notes = Vec::new();

        if demographic.is_empty() {
            reasons.push(ReasonCode::NoQualifyingSeniors);
            notes.push("no insured employees aged 60 or above on the roster".to_string());
        }
        if tenure_short > 0 {
            reasons.push(ReasonCode::TenureBelowMinimum);
            notes.push(format!(
                "{tenure_short} seniors below the {min_tenure}-month tenure minimum"
            ));
        }
        if wage_floor_only > 0 {
            reasons.push(ReasonCode::ExcludedByWageFloor);
            notes.push(format!(
                "{wage_floor_only} otherwise-qualifying seniors fell below the wage floor"
            ));
        }

        let mut result = EligibilityResult::not_eligible(program, reasons);
        result.requirements_met = requirements_met;
        result.requirements_not_met = requirements_not_met;
        result.notes = notes;
        return Ok(result);
    }

    let count = qualifying.len() as u32;
    let breakdown = compute_amount(program, count, company.region, catalog)?;

    let mut reasons = Vec::new();
    let mut notes = Vec::new();
    append_unverified(&qualifying, &mut reasons, &mut notes);
    if wage_floor_only > 0 {
        notes.push(format!(
            "{wage_floor_only} otherwise-qualifying seniors fell below the wage floor"
        ));
    }

    let eligibility = if reasons.is_empty() {
        Eligibility::Eligible
    } else {
        Eligibility::NeedsReview
    };

    Ok(EligibilityResult {
        program,
        eligibility,
        requirements_met,
        requirements_not_met,
        qualifying_count: count,
        qualifying_employee_ids: qualifying.iter().map(|s| s.employee_id.clone()).collect(),
        amount_per_person: breakdown.per_person,
        support_months: breakdown.support_months,
        total_amount: breakdown.total,
        reasons,
        notes,
    })
}

/// Evaluates the Senior Continued Employment program for a roster.
pub fn evaluate_senior_continued_employment(
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let mut screens = Vec::with_capacity(employees.len());
    for employee in employees {
        screens.push(screen_senior_continued_employment(
            company, employee, catalog, as_of,
        )?);
    }
    evaluate_senior(
        Program::SeniorContinuedEmployment,
        company,
        screens,
        catalog,
    )
}
