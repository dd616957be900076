//! Subsidy program and document identifiers.
//!
//! This module defines the closed set of subsidy programs the engine can
//! evaluate, plus the document kinds that appear in per-program required
//! document checklists. Adding a program is a catalog data change plus one
//! new evaluator module, never a scattered edit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of employment-subsidy programs.
///
/// The serde representation uses the stable identifiers from the source
/// system (`YOUTH_JOB_LEAP`, ...). Display names are catalog data, not
/// part of this enum.
///
/// # Example
///
/// ```
/// use subsidy_engine::models::Program;
///
/// assert_eq!(
///     serde_json::to_string(&Program::YouthJobLeap).unwrap(),
///     "\"YOUTH_JOB_LEAP\""
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Program {
    /// Youth Job Leap subsidy for hiring young full-time workers.
    YouthJobLeap,
    /// Employment promotion subsidy for hiring protected-class workers.
    EmploymentPromotion,
    /// Regular (permanent) conversion support for fixed-term workers.
    RegularConversion,
    /// Continued-employment subsidy for workers past retirement age.
    SeniorContinuedEmployment,
    /// Quarterly employment support for senior workers.
    SeniorEmploymentSupport,
    /// Employment-stability subsidy around parental leave events.
    ParentalEmploymentStability,
    /// Employment retention subsidy for companies in revenue decline.
    EmploymentRetention,
}

impl Program {
    /// All programs in catalog declaration order.
    ///
    /// This order is the deterministic tie-break used by the
    /// mutual-exclusion resolver, so it must stay stable.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::YouthJobLeap,
            Self::EmploymentPromotion,
            Self::RegularConversion,
            Self::SeniorContinuedEmployment,
            Self::SeniorEmploymentSupport,
            Self::ParentalEmploymentStability,
            Self::EmploymentRetention,
        ]
    }

    /// The stable identifier used in serialized data and reason output.
    pub const fn code(self) -> &'static str {
        match self {
            Self::YouthJobLeap => "YOUTH_JOB_LEAP",
            Self::EmploymentPromotion => "EMPLOYMENT_PROMOTION",
            Self::RegularConversion => "REGULAR_CONVERSION",
            Self::SeniorContinuedEmployment => "SENIOR_CONTINUED_EMPLOYMENT",
            Self::SeniorEmploymentSupport => "SENIOR_EMPLOYMENT_SUPPORT",
            Self::ParentalEmploymentStability => "PARENTAL_EMPLOYMENT_STABILITY",
            Self::EmploymentRetention => "EMPLOYMENT_RETENTION",
        }
    }

    /// Position in catalog declaration order.
    pub fn catalog_rank(self) -> usize {
        Self::ordered()
            .iter()
            .position(|p| *p == self)
            .unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kinds of supporting documents a program can require.
///
/// The engine never inspects document contents; the checklist is carried
/// as catalog data so downstream report components can render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Business registration certificate.
    BusinessRegistration,
    /// Employment-insurance enrollment roster.
    EmploymentInsuranceRoster,
    /// Signed labor contract for each claimed employee.
    LaborContract,
    /// Payroll ledger covering the support period.
    PayrollLedger,
    /// Identity document for each claimed employee.
    IdentityDocument,
    /// Permanent-conversion contract or amended labor contract.
    ConversionContract,
    /// Approved parental-leave confirmation.
    ParentalLeaveConfirmation,
    /// Evidence of revenue decline (financial statements, VAT returns).
    RevenueDeclineStatement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_serialization_uses_source_identifiers() {
        assert_eq!(
            serde_json::to_string(&Program::SeniorContinuedEmployment).unwrap(),
            "\"SENIOR_CONTINUED_EMPLOYMENT\""
        );
        assert_eq!(
            serde_json::to_string(&Program::ParentalEmploymentStability).unwrap(),
            "\"PARENTAL_EMPLOYMENT_STABILITY\""
        );
    }

    #[test]
    fn test_program_deserialization_roundtrip() {
        for program in Program::ordered() {
            let json = serde_json::to_string(&program).unwrap();
            let back: Program = serde_json::from_str(&json).unwrap();
            assert_eq!(program, back);
        }
    }

    #[test]
    fn test_code_matches_serde_representation() {
        for program in Program::ordered() {
            let json = serde_json::to_string(&program).unwrap();
            assert_eq!(json, format!("\"{}\"", program.code()));
        }
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(Program::YouthJobLeap.to_string(), "YOUTH_JOB_LEAP");
    }

    #[test]
    fn test_ordered_contains_every_program_once() {
        let programs = Program::ordered();
        assert_eq!(programs.len(), 7);
        for (i, a) in programs.iter().enumerate() {
            for b in programs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_catalog_rank_is_declaration_order() {
        assert_eq!(Program::YouthJobLeap.catalog_rank(), 0);
        assert_eq!(Program::EmploymentRetention.catalog_rank(), 6);
        assert!(
            Program::SeniorContinuedEmployment.catalog_rank()
                < Program::SeniorEmploymentSupport.catalog_rank()
        );
    }

    #[test]
    fn test_document_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::PayrollLedger).unwrap(),
            "\"payroll_ledger\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentKind::ParentalLeaveConfirmation).unwrap(),
            "\"parental_leave_confirmation\""
        );
    }
}
