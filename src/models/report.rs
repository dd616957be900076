//! Report aggregate models.
//!
//! The [`ReportAggregate`] is the final structure handed to downstream
//! report and screen renderers: ordered per-program results, exclusion
//! records, guaranteed vs potential totals, and the employee × program
//! matrix.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompanyProfile, EligibilityResult, ExclusionRecord, Program};

/// One cell of the employee × program matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Whether the employee passes this program's structural filters.
    pub qualifies: bool,
    /// Whether a missing datum made the qualification provisional.
    pub needs_review: bool,
    /// Maximum potential amount this employee contributes, zero when the
    /// employee does not qualify.
    pub amount: Decimal,
}

/// One matrix row: a single employee screened against every requested
/// program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// The roster employee this row describes.
    pub employee_id: String,
    /// Cells in the same order as [`EmployeeProgramMatrix::programs`].
    pub cells: Vec<MatrixCell>,
}

/// Employee × program matrix for UI rendering.
///
/// Rows follow roster order; columns follow requested-program order. The
/// cells are produced by re-running each program's per-employee predicate
/// independently, so the matrix stays derivable from the same predicates
/// as the roster-level results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProgramMatrix {
    /// Column order: the programs as requested.
    pub programs: Vec<Program>,
    /// Row order: the roster as supplied.
    pub rows: Vec<MatrixRow>,
}

/// The final report structure combining every per-program result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAggregate {
    /// Report timestamp, derived from the as-of date so identical inputs
    /// produce identical reports.
    pub generated_at: NaiveDateTime,
    /// The evaluation date every age, tenure, and threshold was resolved
    /// against.
    pub as_of: NaiveDate,
    /// Snapshot of the company the calculation ran for.
    pub company: CompanyProfile,
    /// Per-program results, one per requested program in request order.
    pub results: Vec<EligibilityResult>,
    /// Mutual-exclusion records, empty when no declared pair overlapped.
    pub exclusions: Vec<ExclusionRecord>,
    /// Sum of strictly eligible totals; the guaranteed figure.
    pub total_eligible_amount: Decimal,
    /// Sum of needs-review totals; a ceiling, never merged into the
    /// guaranteed figure.
    pub total_potential_amount: Decimal,
    /// Number of programs with an `Eligible` verdict.
    pub eligible_count: u32,
    /// Number of programs with a `NeedsReview` verdict.
    pub needs_review_count: u32,
    /// Employee × program qualification matrix.
    pub matrix: EmployeeProgramMatrix,
}
