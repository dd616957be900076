//! Senior Employment Support eligibility evaluation.
//!
//! Same structural filters as Senior Continued Employment — age 60 or
//! above, twelve months of tenure, employment insurance, wage floor by
//! hire date — but paid at a flat quarterly rate with no region variant.
//! The default catalog declares the two senior programs mutually
//! exclusive; the resolver keeps whichever pays more.

use chrono::NaiveDate;

use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{CompanyProfile, EligibilityResult, Employee, Program};

use super::screen::EmployeeScreen;
use super::senior_continued_employment::{evaluate_senior, screen_senior};

/// Screens one employee against the Senior Employment Support filters.
pub fn screen_senior_employment_support(
    _company: &CompanyProfile,
    employee: &Employee,
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    let min_tenure = catalog.senior_employment_support().min_tenure_months;
    screen_senior(employee, catalog, as_of, min_tenure)
}

/// Evaluates the Senior Employment Support program for a roster.
pub fn evaluate_senior_employment_support(
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let mut screens = Vec::with_capacity(employees.len());
    for employee in employees {
        screens.push(screen_senior_employment_support(
            company, employee, catalog, as_of,
        )?);
    }
    evaluate_senior(Program::SeniorEmploymentSupport, company, screens, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::models::{Eligibility, InsuranceStatus, ReasonCode, Region, WorkType};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn won(amount: i64) -> Decimal {
        Decimal::from(amount)
    }

    fn create_company(region: Region) -> CompanyProfile {
        CompanyProfile {
            legal_name: "대경물산".to_string(),
            registration_number: "321-54-09876".to_string(),
            region,
            is_small_business: true,
            opening_date: date(2010, 5, 1),
            industry_code: "25999".to_string(),
        }
    }

    fn create_senior(id: &str, salary: i64, hire: NaiveDate) -> Employee {
        Employee {
            id: id.to_string(),
            birth_date: date(1961, 9, 3),
            hire_date: Some(hire),
            monthly_salary: won(salary),
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
    fn test_flat_quarterly_rate_ignores_region() {
        let catalog = default_catalog().unwrap();
        let employees = vec![create_senior("emp_001", 2_500_000, date(2023, 1, 10))];

        let capital = evaluate_senior_employment_support(
            &create_company(Region::Capital),
            &employees,
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();
        let non_capital = evaluate_senior_employment_support(
            &create_company(Region::NonCapital),
            &employees,
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();

        // 300,000 x 8 quarters either way
        assert_eq!(capital.amount_per_person, won(2_400_000));
        assert_eq!(non_capital.amount_per_person, won(2_400_000));
        assert_eq!(capital.eligibility, Eligibility::Eligible);
        assert_eq!(capital.support_months, 24);
    }

    #[test]
    fn test_tenure_reason_uses_tenure_code() {
        let catalog = default_catalog().unwrap();
        // 11 completed months on the evaluation date
        let employees = vec![create_senior("emp_001", 2_500_000, date(2024, 7, 1))];

        let result = evaluate_senior_employment_support(
            &create_company(Region::Capital),
            &employees,
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.reasons, vec![ReasonCode::TenureBelowMinimum]);
    }

    #[test]
    fn test_multiple_qualifying_seniors_scale_total() {
        let catalog = default_catalog().unwrap();
        let employees = vec![
            create_senior("emp_001", 2_500_000, date(2022, 5, 1)),
            create_senior("emp_002", 2_300_000, date(2023, 2, 1)),
            create_senior("emp_003", 2_400_000, date(2021, 11, 15)),
        ];

        let result = evaluate_senior_employment_support(
            &create_company(Region::NonCapital),
            &employees,
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.qualifying_count, 3);
        assert_eq!(result.total_amount, won(7_200_000));
    }

    #[test]
    fn test_wage_floor_tracks_hire_date_threshold() {
        let catalog = default_catalog().unwrap();
        // Clears the 2023 floor (2,010,580) but not the 2024 floor (2,060,740)
        let employees = vec![
            create_senior("emp_2023", 2_040_000, date(2023, 6, 1)),
            create_senior("emp_2024", 2_040_000, date(2024, 2, 1)),
        ];

        let result = evaluate_senior_employment_support(
            &create_company(Region::Capital),
            &employees,
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.qualifying_count, 1);
        assert_eq!(result.qualifying_employee_ids, vec!["emp_2023"]);
    }

    #[test]
    fn test_uninsured_senior_is_not_counted() {
        let catalog = default_catalog().unwrap();
        let mut uninsured = create_senior("emp_001", 2_500_000, date(2023, 1, 10));
        uninsured.insurance.employment = false;

        let result = evaluate_senior_employment_support(
            &create_company(Region::Capital),
            &[uninsured],
            &catalog,
            date(2025, 6, 1),
        )
        .unwrap();

        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.reasons, vec![ReasonCode::NoQualifyingSeniors]);
    }
}
