//! Youth Job Leap eligibility evaluation.
//!
//! Qualifying employees are aged 15-34, full-time, and enrolled in
//! employment insurance; there is no wage test. Non-capital companies
//! additionally receive the regional youth incentive and are eligible
//! outright. Capital-region claims hinge on the employment-disadvantaged
//! youth sub-category, which structured roster data cannot establish, so
//! they always need review.

use chrono::NaiveDate;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode, Region,
    Requirement, WorkType,
};

use super::screen::{EmployeeScreen, rollup_requirements};

const REQUIREMENTS: [Requirement; 3] = [
    Requirement::YouthAgeBand,
    Requirement::FullTimeWorkType,
    Requirement::EmploymentInsurance,
];

/// Screens one employee against the Youth Job Leap filters.
pub fn screen_youth_job_leap(
    _company: &CompanyProfile,
    employee: &Employee,
    _catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    let mut met = Vec::new();
    let mut not_met = Vec::new();

    if employee.is_youth(as_of) {
        met.push(Requirement::YouthAgeBand);
    } else {
        not_met.push(Requirement::YouthAgeBand);
    }
    if employee.work_type == WorkType::FullTime {
        met.push(Requirement::FullTimeWorkType);
    } else {
        not_met.push(Requirement::FullTimeWorkType);
    }
    if employee.insurance.employment {
        met.push(Requirement::EmploymentInsurance);
    } else {
        not_met.push(Requirement::EmploymentInsurance);
    }

    Ok(EmployeeScreen {
        employee_id: employee.id.clone(),
        qualifies: not_met.is_empty(),
        needs_review: false,
        requirements_met: met,
        requirements_not_met: not_met,
        reasons: Vec::new(),
    })
}

/// Evaluates the Youth Job Leap program for a roster.
pub fn evaluate_youth_job_leap(
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let mut screens = Vec::with_capacity(employees.len());
    for employee in employees {
        screens.push(screen_youth_job_leap(company, employee, catalog, as_of)?);
    }

    let qualifying: Vec<&EmployeeScreen> = screens.iter().filter(|s| s.qualifies).collect();
    let (requirements_met, requirements_not_met) = rollup_requirements(&screens, &REQUIREMENTS);

    if qualifying.is_empty() {
        let mut result = EligibilityResult::not_eligible(
            Program::YouthJobLeap,
            vec![ReasonCode::NoQualifyingYouth],
        );
        result.requirements_met = requirements_met;
        result.requirements_not_met = requirements_not_met;
        result
            .notes
            .push("no full-time, insured employees aged 15-34 on the roster".to_string());
        return Ok(result);
    }

    let count = qualifying.len() as u32;
    let breakdown = compute_amount(Program::YouthJobLeap, count, company.region, catalog)?;

    let (eligibility, reasons, notes) = match company.region {
        Region::NonCapital => (Eligibility::Eligible, Vec::new(), Vec::new()),
        Region::Capital => (
            Eligibility::NeedsReview,
            vec![ReasonCode::DisadvantagedYouthReviewRequired],
            vec![
                "capital-region claims require confirming each youth's \
                 employment-disadvantaged sub-category"
                    .to_string(),
            ],
        ),
    };

    Ok(EligibilityResult {
        program: Program::YouthJobLeap,
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
