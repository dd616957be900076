//! Built-in fiscal-2025 catalog data.
//!
//! These figures are versioned policy data announced per fiscal year.
//! Deployments that track newer announcements load a YAML catalog via
//! [`crate::catalog::CatalogLoader`] instead of relying on this table.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DocumentKind, Program};

use super::types::{
    CatalogMetadata, EmploymentPromotionParams, EmploymentRetentionParams, ExclusivePair,
    ParentalEmploymentStabilityParams, ProgramCatalog, ProgramTable, RegularConversionParams,
    SeniorContinuedEmploymentParams, SeniorEmploymentSupportParams, WageThreshold,
    YouthJobLeapParams,
};

fn won(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn date(y: i32, m: u32, d: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| EngineError::CatalogInvalid {
        message: format!("invalid date {y}-{m}-{d} in built-in catalog"),
    })
}

/// Builds the built-in fiscal-2025 catalog.
///
/// # Example
///
/// ```
/// use subsidy_engine::catalog::default_catalog;
///
/// let catalog = default_catalog().unwrap();
/// assert_eq!(catalog.metadata().fiscal_year, 2025);
/// ```
pub fn default_catalog() -> EngineResult<ProgramCatalog> {
    let metadata = CatalogMetadata {
        version: "2025-01-01".to_string(),
        fiscal_year: 2025,
        source_url: "https://www.moel.go.kr".to_string(),
    };

    // Monthly minimum wage: hourly figure x 209 statutory hours.
    let minimum_wage = vec![
        WageThreshold {
            effective_from: date(2023, 1, 1)?,
            monthly_amount: won(2_010_580),
        },
        WageThreshold {
            effective_from: date(2024, 1, 1)?,
            monthly_amount: won(2_060_740),
        },
        WageThreshold {
            effective_from: date(2025, 1, 1)?,
            monthly_amount: won(2_096_270),
        },
    ];

    let programs = ProgramTable {
        youth_job_leap: YouthJobLeapParams {
            display_name: "청년일자리도약장려금".to_string(),
            business_subsidy: won(7_200_000),
            non_capital_incentive: won(4_800_000),
            support_months: 12,
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::EmploymentInsuranceRoster,
                DocumentKind::LaborContract,
                DocumentKind::IdentityDocument,
            ],
        },
        employment_promotion: EmploymentPromotionParams {
            display_name: "고용촉진장려금".to_string(),
            monthly_amount: won(600_000),
            support_months: 12,
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::EmploymentInsuranceRoster,
                DocumentKind::LaborContract,
                DocumentKind::PayrollLedger,
            ],
        },
        regular_conversion: RegularConversionParams {
            display_name: "정규직 전환 지원금".to_string(),
            monthly_amount: won(500_000),
            support_months: 12,
            min_roster: 5,
            max_roster_exclusive: 30,
            small_roster_cap: 3,
            small_roster_limit: 10,
            cap_ratio: Decimal::new(3, 1),
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::ConversionContract,
                DocumentKind::PayrollLedger,
            ],
        },
        senior_continued_employment: SeniorContinuedEmploymentParams {
            display_name: "고령자 계속고용장려금".to_string(),
            quarterly_amount_capital: won(900_000),
            quarterly_amount_non_capital: won(1_100_000),
            support_quarters: 8,
            min_tenure_months: 12,
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::EmploymentInsuranceRoster,
                DocumentKind::LaborContract,
                DocumentKind::PayrollLedger,
            ],
        },
        senior_employment_support: SeniorEmploymentSupportParams {
            display_name: "고령자 고용지원금".to_string(),
            quarterly_amount: won(300_000),
            support_quarters: 8,
            min_tenure_months: 12,
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::EmploymentInsuranceRoster,
                DocumentKind::PayrollLedger,
            ],
        },
        parental_employment_stability: ParentalEmploymentStabilityParams {
            display_name: "출산육아기 고용안정장려금".to_string(),
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::ParentalLeaveConfirmation,
                DocumentKind::PayrollLedger,
            ],
        },
        employment_retention: EmploymentRetentionParams {
            display_name: "고용유지지원금".to_string(),
            required_documents: vec![
                DocumentKind::BusinessRegistration,
                DocumentKind::RevenueDeclineStatement,
                DocumentKind::PayrollLedger,
            ],
        },
    };

    // The two senior programs claim the same workers; only one pays.
    let exclusions = vec![ExclusivePair {
        first: Program::SeniorContinuedEmployment,
        second: Program::SeniorEmploymentSupport,
    }];

    ProgramCatalog::new(metadata, minimum_wage, programs, exclusions)
}
