//! Employment Promotion eligibility evaluation.
//!
//! Qualifying employees carry employment insurance and clear the wage
//! floor resolved from their own hire date. Membership in a protected or
//! employment-disadvantaged class cannot be verified from structured
//! roster data, so a non-empty qualifying set is always needs-review; the
//! program is not-eligible only when the qualifying set is empty.

use chrono::NaiveDate;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, Program, ReasonCode, Requirement,
};

use super::screen::{EmployeeScreen, WageCheck, rollup_requirements, wage_check};

const REQUIREMENTS: [Requirement; 2] =
    [Requirement::EmploymentInsurance, Requirement::WageFloor];

/// Screens one employee against the Employment Promotion filters.
pub fn screen_employment_promotion(
    _company: &CompanyProfile,
    employee: &Employee,
    catalog: &ProgramCatalog,
    _as_of: NaiveDate,
) -> EngineResult<EmployeeScreen> {
    let mut met = Vec::new();
    let mut not_met = Vec::new();
    let mut reasons = Vec::new();

    if employee.insurance.employment {
        met.push(Requirement::EmploymentInsurance);
    } else {
        not_met.push(Requirement::EmploymentInsurance);
    }

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

/// Evaluates the Employment Promotion program for a roster.
pub fn evaluate_employment_promotion(
    company: &CompanyProfile,
    employees: &[Employee],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EligibilityResult> {
    let mut screens = Vec::with_capacity(employees.len());
    for employee in employees {
        screens.push(screen_employment_promotion(
            company, employee, catalog, as_of,
        )?);
    }

    let qualifying: Vec<&EmployeeScreen> = screens.iter().filter(|s| s.qualifies).collect();
    let (requirements_met, requirements_not_met) = rollup_requirements(&screens, &REQUIREMENTS);

    if qualifying.is_empty() {
        let insured = screens
            .iter()
            .filter(|s| s.requirements_met.contains(&Requirement::EmploymentInsurance))
            .count();

        // Different remediation paths: enrolling staff in employment
        // insurance vs raising pay above the floor.
        let (reason, note) = if insured == 0 {
            (
                ReasonCode::NoInsuredEmployees,
                "no roster employees are enrolled in employment insurance".to_string(),
            )
        } else {
            (
                ReasonCode::ExcludedByWageFloor,
                format!("{insured} insured employees fell below the wage floor"),
            )
        };

        let mut result = EligibilityResult::not_eligible(Program::EmploymentPromotion, vec![reason]);
        result.requirements_met = requirements_met;
        result.requirements_not_met = requirements_not_met;
        result.notes.push(note);
        return Ok(result);
    }

    let count = qualifying.len() as u32;
    let breakdown = compute_amount(Program::EmploymentPromotion, count, company.region, catalog)?;

    let mut reasons = vec![ReasonCode::ProtectedClassReviewRequired];
    let mut notes = vec![
        "protected-class membership must be confirmed against supporting documents".to_string(),
    ];
    append_unverified(&qualifying, &mut reasons, &mut notes);

    Ok(EligibilityResult {
        program: Program::EmploymentPromotion,
        eligibility: Eligibility::NeedsReview,
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

/// Appends missing-datum reasons from qualifying screens, naming the
/// affected employees.
pub(super) fn append_unverified(
    qualifying: &[&EmployeeScreen],
    reasons: &mut Vec<ReasonCode>,
    notes: &mut Vec<String>,
) {
    for code in [ReasonCode::SalaryUnverified, ReasonCode::HireDateMissing] {
        let affected: Vec<&str> = qualifying
            .iter()
            .filter(|s| s.reasons.contains(&code))
            .map(|s| s.employee_id.as_str())
            .collect();
        if !affected.is_empty() {
            reasons.push(code);
            let datum = match code {
                ReasonCode::SalaryUnverified => "monthly salary unset",
                _ => "hire date missing",
            };
            notes.push(format!("{datum} for {}", affected.join(", ")));
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

    fn won(amount: i64) -> Decimal {
        Decimal::from(amount)
    }

    fn create_company() -> CompanyProfile {
        CompanyProfile {
            legal_name: "한빛테크 주식회사".to_string(),
            registration_number: "123-45-67890".to_string(),
            region: Region::Capital,
            is_small_business: true,
            opening_date: date(2019, 3, 2),
            industry_code: "62010".to_string(),
        }
    }

    fn create_employee(id: &str, salary: i64, hire: NaiveDate) -> Employee {
        Employee {
            id: id.to_string(),
            birth_date: date(1988, 5, 20),
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
    fn test_non_empty_qualifying_set_is_always_needs_review() {
        let catalog = default_catalog().unwrap();
        let employees = vec![create_employee("emp_001", 2_500_000, date(2024, 6, 1))];

        let result =
            evaluate_employment_promotion(&create_company(), &employees, &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NeedsReview);
        assert!(
            result
                .reasons
                .contains(&ReasonCode::ProtectedClassReviewRequired)
        );
        // 600,000 x 12 months
        assert_eq!(result.amount_per_person, won(7_200_000));
        assert_eq!(result.total_amount, won(7_200_000));
    }

    /// The wage floor follows each employee's own hire date: identical
    /// salaries, opposite sides of the threshold boundary.
    #[test]
    fn test_wage_threshold_resolves_per_employee_hire_date() {
        let catalog = default_catalog().unwrap();
        let employees = vec![
            create_employee("emp_2024", 2_080_000, date(2024, 12, 31)),
            create_employee("emp_2025", 2_080_000, date(2025, 1, 1)),
        ];

        let result =
            evaluate_employment_promotion(&create_company(), &employees, &catalog, date(2025, 6, 1))
                .unwrap();

        // Only the 2024 hire clears its (lower) threshold
        assert_eq!(result.qualifying_count, 1);
        assert_eq!(result.qualifying_employee_ids, vec!["emp_2024"]);
    }

    #[test]
    fn test_no_insured_employees_reason() {
        let catalog = default_catalog().unwrap();
        let mut uninsured = create_employee("emp_001", 2_500_000, date(2024, 6, 1));
        uninsured.insurance.employment = false;

        let result =
            evaluate_employment_promotion(&create_company(), &[uninsured], &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.total_amount, Decimal::ZERO);
        assert_eq!(result.reasons, vec![ReasonCode::NoInsuredEmployees]);
    }

    #[test]
    fn test_wage_floor_exclusion_reason_is_distinct() {
        let catalog = default_catalog().unwrap();
        let underpaid = create_employee("emp_001", 1_800_000, date(2024, 6, 1));

        let result =
            evaluate_employment_promotion(&create_company(), &[underpaid], &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.reasons, vec![ReasonCode::ExcludedByWageFloor]);
        assert!(result.notes[0].contains("wage floor"));
    }

    #[test]
    fn test_unknown_salary_passes_and_is_flagged() {
        let catalog = default_catalog().unwrap();
        let employees = vec![create_employee("emp_001", 0, date(2024, 6, 1))];

        let result =
            evaluate_employment_promotion(&create_company(), &employees, &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NeedsReview);
        assert_eq!(result.qualifying_count, 1);
        assert!(result.reasons.contains(&ReasonCode::SalaryUnverified));
        assert!(result.notes.iter().any(|n| n.contains("emp_001")));
    }

    #[test]
    fn test_missing_hire_date_passes_and_is_flagged() {
        let catalog = default_catalog().unwrap();
        let mut employee = create_employee("emp_001", 2_500_000, date(2024, 6, 1));
        employee.hire_date = None;

        let result =
            evaluate_employment_promotion(&create_company(), &[employee], &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NeedsReview);
        assert!(result.reasons.contains(&ReasonCode::HireDateMissing));
    }

    #[test]
    fn test_empty_roster_is_not_eligible() {
        let catalog = default_catalog().unwrap();

        let result =
            evaluate_employment_promotion(&create_company(), &[], &catalog, date(2025, 6, 1))
                .unwrap();

        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.reasons, vec![ReasonCode::NoInsuredEmployees]);
    }
}
