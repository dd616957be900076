//! Pure calculation entry point.
//!
//! Callers own their state: they snapshot the company profile, roster,
//! requested programs, and an explicit as-of date into a
//! [`CalculationRequest`] and re-invoke [`run_calculation`] whenever
//! inputs change. The engine reads no ambient state and no clock, so two
//! identical requests produce byte-identical reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::catalog::ProgramCatalog;
use crate::error::{EngineError, EngineResult};
use crate::exclusion::resolve_exclusions;
use crate::models::{CompanyProfile, Employee, Program, ReportAggregate};
use crate::rules::evaluate_program;

/// A complete calculation request: one employer snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employer profile.
    pub company: CompanyProfile,
    /// The employee roster, in display order.
    pub employees: Vec<Employee>,
    /// Programs to evaluate; results keep this order. Duplicates are
    /// collapsed to the first occurrence.
    pub programs: Vec<Program>,
    /// The date ages, tenure, and thresholds are evaluated against.
    pub as_of: NaiveDate,
}

/// Runs the full eligibility and amount calculation for a request.
///
/// Evaluates every requested program in order, resolves catalog-declared
/// mutual exclusions, and aggregates the final report. Fatal errors are
/// limited to configuration problems and structurally broken rosters;
/// business non-qualification and missing per-employee data surface as
/// verdicts, never as errors.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use subsidy_engine::catalog::default_catalog;
/// use subsidy_engine::engine::{CalculationRequest, run_calculation};
/// use subsidy_engine::models::{
///     CompanyProfile, Employee, InsuranceStatus, Program, Region, WorkType,
/// };
///
/// let catalog = default_catalog().unwrap();
/// let request = CalculationRequest {
///     company: CompanyProfile {
///         legal_name: "한빛테크 주식회사".to_string(),
///         registration_number: "123-45-67890".to_string(),
///         region: Region::NonCapital,
///         is_small_business: true,
///         opening_date: NaiveDate::from_ymd_opt(2019, 3, 2).unwrap(),
///         industry_code: "62010".to_string(),
///     },
///     employees: vec![Employee {
///         id: "emp_001".to_string(),
///         birth_date: NaiveDate::from_ymd_opt(2003, 2, 10).unwrap(),
///         hire_date: Some(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()),
///         monthly_salary: Decimal::ZERO,
///         work_type: WorkType::FullTime,
///         insurance: InsuranceStatus {
///             employment: true,
///             pension: true,
///             health: true,
///             enrolled_on: None,
///         },
///     }],
///     programs: vec![Program::YouthJobLeap],
///     as_of: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
/// };
///
/// let report = run_calculation(&request, &catalog).unwrap();
/// assert_eq!(report.total_eligible_amount, Decimal::from(12_000_000));
/// ```
pub fn run_calculation(
    request: &CalculationRequest,
    catalog: &ProgramCatalog,
) -> EngineResult<ReportAggregate> {
    validate_roster(request)?;

    let programs = dedup_programs(&request.programs);
    debug!(
        company = %request.company.registration_number,
        roster = request.employees.len(),
        programs = programs.len(),
        as_of = %request.as_of,
        "Evaluating subsidy programs"
    );

    let mut results = Vec::with_capacity(programs.len());
    for program in &programs {
        results.push(evaluate_program(
            *program,
            &request.company,
            &request.employees,
            catalog,
            request.as_of,
        )?);
    }

    let (results, exclusions) = resolve_exclusions(results, catalog);

    let report = aggregate(
        &request.company,
        &request.employees,
        &programs,
        results,
        exclusions,
        catalog,
        request.as_of,
    )?;

    info!(
        company = %request.company.registration_number,
        eligible = report.eligible_count,
        needs_review = report.needs_review_count,
        total_eligible = %report.total_eligible_amount,
        total_potential = %report.total_potential_amount,
        "Calculation complete"
    );

    Ok(report)
}

/// Rejects structurally broken rosters before any rule runs.
fn validate_roster(request: &CalculationRequest) -> EngineResult<()> {
    for (i, employee) in request.employees.iter().enumerate() {
        if employee.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                employee_id: format!("#{}", i + 1),
                message: "employee id is empty".to_string(),
            });
        }
        if request.employees[..i].iter().any(|e| e.id == employee.id) {
            return Err(EngineError::InvalidEmployee {
                employee_id: employee.id.clone(),
                message: "duplicate employee id in roster".to_string(),
            });
        }
        if employee.birth_date > request.as_of {
            return Err(EngineError::InvalidEmployee {
                employee_id: employee.id.clone(),
                message: format!(
                    "birth date {} is after the evaluation date {}",
                    employee.birth_date, request.as_of
                ),
            });
        }
    }
    Ok(())
}

/// The requested programs with duplicates collapsed, order preserved.
fn dedup_programs(programs: &[Program]) -> Vec<Program> {
    let mut seen = Vec::with_capacity(programs.len());
    for program in programs {
        if !seen.contains(program) {
            seen.push(*program);
        }
    }
    seen
}
