//! Eligibility rule set: one evaluator per subsidy program.
//!
//! All evaluators share the same shape — screen the roster through
//! per-employee structural filters, apply the fail-open wage test,
//! distinguish "wrong demographic" from "excluded by the wage floor" when
//! nothing qualifies, and fall back to needs-review whenever a check is
//! not derivable from structured data. The per-employee screens double as
//! the predicate behind the report matrix.

mod employment_promotion;
mod employment_retention;
mod parental_employment_stability;
mod regular_conversion;
mod screen;
mod senior_continued_employment;
mod senior_employment_support;
mod youth_job_leap;

pub use employment_promotion::{evaluate_employment_promotion, screen_employment_promotion};
pub use employment_retention::{evaluate_employment_retention, screen_employment_retention};
pub use parental_employment_stability::{
    evaluate_parental_employment_stability, screen_parental_employment_stability,
};
pub use regular_conversion::{evaluate_regular_conversion, screen_regular_conversion};
pub use screen::{EmployeeScreen, TenureCheck, WageCheck, tenure_check, wage_check};
pub use senior_continued_employment::{
    evaluate_senior_continued_employment, screen_senior_continued_employment,
};
pub use senior_employment_support::{
    evaluate_senior_employment_support, screen_senior_employment_support,
};
pub use youth_job_leap::{evaluate_youth_job_leap, screen_youth_job_leap};

use chrono::NaiveDate;

use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{CompanyProfile, EligibilityResult, Employee, Program};

/// Evaluates one program against the full roster.
pub fn evaluate_program(
    program: Program,
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    match program {
        Program::YouthJobLeap => evaluate_youth_job_leap(company, employees, catalog, as_of),
        Program::EmploymentPromotion => {
            evaluate_employment_promotion(company, employees, catalog, as_of)
        }
        Program::RegularConversion => {
            evaluate_regular_conversion(company, employees, catalog, as_of)
        }
        Program::SeniorContinuedEmployment => {
            evaluate_senior_continued_employment(company, employees, catalog, as_of)
        }
        Program::SeniorEmploymentSupport => {
            evaluate_senior_employment_support(company, employees, catalog, as_of)
        }
        Program::ParentalEmploymentStability => {
            evaluate_parental_employment_stability(company, employees, catalog, as_of)
        }
        Program::EmploymentRetention => {
            evaluate_employment_retention(company, employees, catalog, as_of)
        }
    }
}

/// Screens one employee against one program's per-employee predicate.
///
/// This is the predicate the report matrix re-runs independently per
/// employee, keeping the matrix derivable from the same checks as the
/// roster-level results.
pub fn screen_employee(
    program: Program,
    company: &CompanyProfile,
    employee: &Employee,
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    match program {
        Program::YouthJobLeap => screen_youth_job_leap(company, employee, catalog, as_of),
        Program::EmploymentPromotion => {
            screen_employment_promotion(company, employee, catalog, as_of)
        }
        Program::RegularConversion => {
            screen_regular_conversion(company, employee, catalog, as_of)
        }
        Program::SeniorContinuedEmployment => {
            screen_senior_continued_employment(company, employee, catalog, as_of)
        }
        Program::SeniorEmploymentSupport => {
            screen_senior_employment_support(company, employee, catalog, as_of)
        }
        Program::ParentalEmploymentStability => {
            screen_parental_employment_stability(company, employee, catalog, as_of)
        }
        Program::EmploymentRetention => {
            screen_employment_retention(company, employee, catalog, as_of)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::models::{InsuranceStatus, Region, WorkType};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_company() -> CompanyProfile {
        CompanyProfile {
            legal_name: "한빛테크 주식회사".to_string(),
            registration_number: "123-45-67890".to_string(),
            region: Region::NonCapital,
            is_small_business: true,
            opening_date: date(2019, 3, 2),
            industry_code: "62010".to_string(),
        }
    }

    fn create_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            birth_date: date(2000, 1, 1),
            hire_date: Some(date(2024, 6, 1)),
            monthly_salary: Decimal::from(2_300_000),
            work_type: WorkType::FullTime,
            insurance: InsuranceStatus {
                employment: true,
                pension: true,
                health: true,
                enrolled_on: None,
            },
        }
    }

    #[test]
    fn test_dispatch_covers_every_program() {
        let catalog = default_catalog().unwrap();
        let company = create_company();
        let employees = vec![create_employee()];

        for program in Program::ordered() {
            let result =
                evaluate_program(program, &company, &employees, &catalog, date(2025, 6, 1))
                    .unwrap();
            assert_eq!(result.program, program);
        }
    }

    #[test]
    fn test_screen_dispatch_covers_every_program() {
        let catalog = default_catalog().unwrap();
        let company = create_company();
        let employee = create_employee();

        for program in Program::ordered() {
            let screen =
                screen_employee(program, &company, &employee, &catalog, date(2025, 6, 1)).unwrap();
            assert_eq!(screen.employee_id, "emp_001");
        }
    }

    #[test]
    fn test_screen_agrees_with_roster_evaluation() {
        let catalog = default_catalog().unwrap();
        let company = create_company();
        let employees = vec![create_employee()];
        let as_of = date(2025, 6, 1);

        for program in [
            Program::YouthJobLeap,
            Program::EmploymentPromotion,
            Program::SeniorContinuedEmployment,
            Program::SeniorEmploymentSupport,
        ] {
            let result =
                evaluate_program(program, &company, &employees, &catalog, as_of).unwrap();
            let screen =
                screen_employee(program, &company, &employees[0], &catalog, as_of).unwrap();

            let listed = result
                .qualifying_employee_ids
                .contains(&employees[0].id);
            assert_eq!(
                listed, screen.qualifies,
                "screen and roster evaluation disagree for {program}"
            );
        }
    }
}
