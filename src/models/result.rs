//! Eligibility result models.
//!
//! This module contains the tri-state [`Eligibility`] verdict, the stable
//! [`Requirement`] and [`ReasonCode`] identifiers, and the per-program
//! [`EligibilityResult`] / [`ExclusionRecord`] output structures.
//!
//! Eligibility is a named three-value enum rather than a nullable flag so
//! "needs confirmation" can never be confused with "not eligible" at any
//! call site. Reason codes are stable identifiers; display text lives in a
//! lookup table owned by the presentation layer, and tests assert on the
//! codes only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Program;

/// Tri-state eligibility verdict for a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Eligibility {
    /// All requirements confirmed from structured data.
    Eligible,
    /// A structural requirement is not met.
    NotEligible,
    /// Qualifying on structured data, but a datum is missing or a rule
    /// requires manual confirmation; the amount shown is a ceiling.
    NeedsReview,
}

impl Eligibility {
    /// Whether this verdict carries a non-zero potential amount.
    pub fn is_payable(self) -> bool {
        matches!(self, Self::Eligible | Self::NeedsReview)
    }
}

/// Structural requirement checks referenced by results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Employee age within 15-34.
    YouthAgeBand,
    /// Employee age 60 or above.
    SeniorAgeBand,
    /// Full-time employment arrangement.
    FullTimeWorkType,
    /// Employment-insurance enrollment.
    EmploymentInsurance,
    /// Employment duration at or above the program minimum.
    MinimumTenure,
    /// Monthly salary at or above the applicable wage floor.
    WageFloor,
    /// Total roster size inside the program's band.
    RosterSizeBand,
    /// Company qualifies as a small business.
    SmallBusiness,
}

/// Stable reason codes explaining a verdict.
///
/// Codes, not prose: the presentation layer maps each code to its
/// display string, so translations change without touching rule logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// No roster employee matches the youth demographic filter.
    NoQualifyingYouth,
    /// No roster employee matches the senior demographic filter.
    NoQualifyingSeniors,
    /// No roster employee carries employment insurance.
    NoInsuredEmployees,
    /// Otherwise-qualifying employees fell below the tenure minimum.
    TenureBelowMinimum,
    /// Otherwise-qualifying employees fell below the wage floor.
    ExcludedByWageFloor,
    /// A salary was unset; the wage test passed provisionally.
    SalaryUnverified,
    /// A hire date was missing; tenure and wage-floor resolution passed
    /// provisionally.
    HireDateMissing,
    /// Capital-region claims need the employment-disadvantaged-youth
    /// sub-category confirmed manually.
    DisadvantagedYouthReviewRequired,
    /// Protected-class membership cannot be verified structurally.
    ProtectedClassReviewRequired,
    /// Conversion-candidate status cannot be verified structurally.
    ConversionCandidateReviewRequired,
    /// An approved parental-leave event must be confirmed manually.
    ParentalLeaveReviewRequired,
    /// Revenue-decline evidence must be supplied and reviewed.
    RevenueDeclineEvidenceRequired,
    /// Roster size falls outside the program band.
    RosterOutsideBand,
    /// The company is not a small business.
    NotSmallBusiness,
    /// A mutually-exclusive program with a larger amount takes precedence.
    ExcludedByOtherProgram,
}

impl ReasonCode {
    /// Default human-readable message for this code.
    ///
    /// Presentation layers typically replace this table with localized
    /// text; the engine only guarantees the code itself is stable.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoQualifyingYouth => "no employees in the youth demographic qualify",
            Self::NoQualifyingSeniors => "no employees in the senior demographic qualify",
            Self::NoInsuredEmployees => "no employees are enrolled in employment insurance",
            Self::TenureBelowMinimum => "tenure < 12 months",
            Self::ExcludedByWageFloor => "excluded purely by the wage floor",
            Self::SalaryUnverified => "monthly salary unset; wage test passed provisionally",
            Self::HireDateMissing => "hire date missing; checks passed provisionally",
            Self::DisadvantagedYouthReviewRequired => {
                "capital-region claims require confirming employment-disadvantaged youth status"
            }
            Self::ProtectedClassReviewRequired => {
                "protected-class membership requires manual confirmation"
            }
            Self::ConversionCandidateReviewRequired => {
                "permanent-conversion candidacy requires manual confirmation"
            }
            Self::ParentalLeaveReviewRequired => {
                "an approved parental-leave event requires manual confirmation"
            }
            Self::RevenueDeclineEvidenceRequired => {
                "revenue-decline evidence is required for review"
            }
            Self::RosterOutsideBand => "roster size is outside the supported band",
            Self::NotSmallBusiness => "the company is not a small business",
            Self::ExcludedByOtherProgram => {
                "a mutually-exclusive program with a larger amount takes precedence"
            }
        }
    }
}

/// The per-program outcome of an eligibility evaluation.
///
/// Invariants maintained by the rule set:
/// - `NotEligible` results carry a zero `total_amount`.
/// - `Eligible` and `NeedsReview` results satisfy
///   `total_amount == amount_per_person * Decimal::from(qualifying_count)`
///   with `qualifying_count >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// The evaluated program.
    pub program: Program,
    /// The tri-state verdict.
    pub eligibility: Eligibility,
    /// Requirements satisfied by at least one screened employee (or by
    /// the company, for company-level gates).
    pub requirements_met: Vec<Requirement>,
    /// Requirements that removed every remaining candidate.
    pub requirements_not_met: Vec<Requirement>,
    /// Number of qualifying employees (or claim units for company-level
    /// programs).
    pub qualifying_count: u32,
    /// Ids of the qualifying employees, in roster order.
    pub qualifying_employee_ids: Vec<String>,
    /// Maximum amount per qualifying employee over the support duration.
    pub amount_per_person: Decimal,
    /// Support duration in months.
    pub support_months: u32,
    /// Total maximum amount for this program.
    pub total_amount: Decimal,
    /// Stable reason codes explaining the verdict.
    pub reasons: Vec<ReasonCode>,
    /// Free-text supporting detail (counts, missing datum names).
    pub notes: Vec<String>,
}

impl EligibilityResult {
    /// A zeroed not-eligible result for the given program.
    pub fn not_eligible(program: Program, reasons: Vec<ReasonCode>) -> Self {
        Self {
            program,
            eligibility: Eligibility::NotEligible,
            requirements_met: Vec::new(),
            requirements_not_met: Vec::new(),
            qualifying_count: 0,
            qualifying_employee_ids: Vec::new(),
            amount_per_person: Decimal::ZERO,
            support_months: 0,
            total_amount: Decimal::ZERO,
            reasons,
            notes: Vec::new(),
        }
    }
}

/// Records one program losing a mutual-exclusion contest.
///
/// Exists only when two programs' qualifying-employee sets overlap under
/// a catalog-declared exclusive pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRecord {
    /// The program whose amount was removed.
    pub excluded: Program,
    /// The program that takes precedence.
    pub excluded_by: Program,
    /// Why the exclusion applied.
    pub reason: ReasonCode,
    /// Employee ids claimed by both programs.
    pub overlapping_employee_ids: Vec<String>,
    /// Supporting detail for the report.
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_serialization() {
        assert_eq!(
            serde_json::to_string(&Eligibility::Eligible).unwrap(),
            "\"ELIGIBLE\""
        );
        assert_eq!(
            serde_json::to_string(&Eligibility::NotEligible).unwrap(),
            "\"NOT_ELIGIBLE\""
        );
        assert_eq!(
            serde_json::to_string(&Eligibility::NeedsReview).unwrap(),
            "\"NEEDS_REVIEW\""
        );
    }

    #[test]
    fn test_is_payable() {
        assert!(Eligibility::Eligible.is_payable());
        assert!(Eligibility::NeedsReview.is_payable());
        assert!(!Eligibility::NotEligible.is_payable());
    }

    #[test]
    fn test_not_eligible_constructor_zeroes_amounts() {
        let result = EligibilityResult::not_eligible(
            Program::YouthJobLeap,
            vec![ReasonCode::NoQualifyingYouth],
        );
        assert_eq!(result.eligibility, Eligibility::NotEligible);
        assert_eq!(result.total_amount, Decimal::ZERO);
        assert_eq!(result.amount_per_person, Decimal::ZERO);
        assert_eq!(result.qualifying_count, 0);
        assert_eq!(result.reasons, vec![ReasonCode::NoQualifyingYouth]);
    }

    #[test]
    fn test_reason_code_serialization_is_stable() {
        assert_eq!(
            serde_json::to_string(&ReasonCode::ExcludedByWageFloor).unwrap(),
            "\"EXCLUDED_BY_WAGE_FLOOR\""
        );
        assert_eq!(
            serde_json::to_string(&ReasonCode::TenureBelowMinimum).unwrap(),
            "\"TENURE_BELOW_MINIMUM\""
        );
    }

    #[test]
    fn test_tenure_reason_message_names_the_threshold() {
        assert_eq!(ReasonCode::TenureBelowMinimum.message(), "tenure < 12 months");
    }

    #[test]
    fn test_requirement_serialization() {
        assert_eq!(
            serde_json::to_string(&Requirement::WageFloor).unwrap(),
            "\"wage_floor\""
        );
        assert_eq!(
            serde_json::to_string(&Requirement::RosterSizeBand).unwrap(),
            "\"roster_size_band\""
        );
    }

    #[test]
    fn test_exclusion_record_roundtrip() {
        let record = ExclusionRecord {
            excluded: Program::SeniorEmploymentSupport,
            excluded_by: Program::SeniorContinuedEmployment,
            reason: ReasonCode::ExcludedByOtherProgram,
            overlapping_employee_ids: vec!["emp_001".to_string()],
            note: "larger total amount takes precedence".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ExclusionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
