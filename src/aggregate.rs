//! Report aggregation.
//!
//! Combines per-program results and exclusion records into the final
//! [`ReportAggregate`]: guaranteed vs potential totals, verdict counts,
//! and the employee × program matrix. Guaranteed and potential totals are
//! never merged — a caller claiming "guaranteed" amounts must only ever
//! see the strictly eligible sum.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::amount::compute_amount;
use crate::catalog::ProgramCatalog;
use crate::error::EngineResult;
use crate::models::{
    CompanyProfile, Eligibility, EligibilityResult, Employee, EmployeeProgramMatrix,
    ExclusionRecord, MatrixCell, MatrixRow, Program, ReportAggregate,
};
use crate::rules::screen_employee;

/// Assembles the final report from resolved results.
///
/// The matrix is built by re-running each program's per-employee
/// predicate independently per employee — not by slicing the roster-level
/// qualifying sets — so both views stay derivable from the same
/// predicates.
pub fn aggregate(
    company: &CompanyProfile,
    employees: &[Employee],
    programs: &[Program],
    results: Vec<EligibilityResult>,
    exclusions: Vec<ExclusionRecord>,
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<ReportAggregate> {
    let mut total_eligible_amount = Decimal::ZERO;
    let mut total_potential_amount = Decimal::ZERO;
    let mut eligible_count = 0u32;
    let mut needs_review_count = 0u32;

    for result in &results {
        match result.eligibility {
            Eligibility::Eligible => {
                total_eligible_amount += result.total_amount;
                eligible_count += 1;
            }
            Eligibility::NeedsReview => {
                total_potential_amount += result.total_amount;
                needs_review_count += 1;
            }
            Eligibility::NotEligible => {}
        }
    }

    let matrix = build_matrix(company, employees, programs, catalog, as_of)?;

    Ok(ReportAggregate {
        generated_at: as_of.and_time(NaiveTime::MIN),
        as_of,
        company: company.clone(),
        results,
        exclusions,
        total_eligible_amount,
        total_potential_amount,
        eligible_count,
        needs_review_count,
        matrix,
    })
}

/// Builds the employee × program matrix from per-employee screens.
fn build_matrix(
    company: &CompanyProfile,
    employees: &[Employee],
    programs: &[Program],
    catalog: &ProgramCatalog,
    as_of: NaiveDate,
) -> EngineResult<EmployeeProgramMatrix> {
    let mut rows = Vec::with_capacity(employees.len());

    for employee in employees {
        let mut cells = Vec::with_capacity(programs.len());
        for program in programs {
            let screen = screen_employee(*program, company, employee, catalog, as_of)?;
            let amount = if screen.qualifies {
                compute_amount(*program, 1, company.region, catalog)?.per_person
            } else {
                Decimal::ZERO
            };
            cells.push(MatrixCell {
                qualifies: screen.qualifies,
                needs_review: screen.needs_review,
                amount,
            });
        }
        rows.push(MatrixRow {
            employee_id: employee.id.clone(),
            cells,
        });
    }

    Ok(EmployeeProgramMatrix {
        programs: programs.to_vec(),
        rows,
    })
}
