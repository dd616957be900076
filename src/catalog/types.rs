//! Program catalog types.
//!
//! The catalog is the static, versioned table of per-program parameters:
//! wage thresholds, amounts, durations, and required-document checklists.
//! It is the only place policy constants live — fiscal-year updates are a
//! data change, never an evaluator edit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{DocumentKind, Program};

/// Metadata about the catalog version.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// Catalog version string (e.g., "2025-01-01").
    pub version: String,
    /// The fiscal year these parameters were announced for.
    pub fiscal_year: i32,
    /// URL to the official program notices.
    pub source_url: String,
}

/// A minimum-wage step effective from a given date.
///
/// Thresholds are resolved against an employee's **hire date**, not the
/// evaluation date. Hire dates earlier than the first entry resolve to the
/// first entry, which acts as the table baseline.
#[derive(Debug, Clone, Deserialize)]
pub struct WageThreshold {
    /// The date this threshold takes effect.
    pub effective_from: NaiveDate,
    /// Monthly minimum wage in whole KRW.
    pub monthly_amount: Decimal,
}

/// Parameters for the Youth Job Leap program.
#[derive(Debug, Clone, Deserialize)]
pub struct YouthJobLeapParams {
    /// Official display name.
    pub display_name: String,
    /// Per-person business subsidy over the support period.
    pub business_subsidy: Decimal,
    /// Additional per-person incentive paid outside the capital region.
    pub non_capital_incentive: Decimal,
    /// Support duration in months.
    pub support_months: u32,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Employment Promotion program.
#[derive(Debug, Clone, Deserialize)]
pub struct EmploymentPromotionParams {
    /// Official display name.
    pub display_name: String,
    /// Monthly amount per qualifying employee.
    pub monthly_amount: Decimal,
    /// Support duration in months.
    pub support_months: u32,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Regular Conversion program.
#[derive(Debug, Clone, Deserialize)]
pub struct RegularConversionParams {
    /// Official display name.
    pub display_name: String,
    /// Monthly amount per supported conversion.
    pub monthly_amount: Decimal,
    /// Support duration in months.
    pub support_months: u32,
    /// Inclusive lower roster-size bound.
    pub min_roster: u32,
    /// Exclusive upper roster-size bound.
    pub max_roster_exclusive: u32,
    /// Flat support cap applied below `small_roster_limit`.
    pub small_roster_cap: u32,
    /// Roster size at which the ratio cap replaces the flat cap.
    pub small_roster_limit: u32,
    /// Ratio cap applied at or above `small_roster_limit` (floored).
    pub cap_ratio: Decimal,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Senior Continued Employment program.
#[derive(Debug, Clone, Deserialize)]
pub struct SeniorContinuedEmploymentParams {
    /// Official display name.
    pub display_name: String,
    /// Quarterly amount per person for capital-region companies.
    pub quarterly_amount_capital: Decimal,
    /// Quarterly amount per person outside the capital region.
    pub quarterly_amount_non_capital: Decimal,
    /// Support duration in quarters.
    pub support_quarters: u32,
    /// Minimum employment duration in months.
    pub min_tenure_months: u32,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Senior Employment Support program.
#[derive(Debug, Clone, Deserialize)]
pub struct SeniorEmploymentSupportParams {
    /// Official display name.
    pub display_name: String,
    /// Quarterly amount per person.
    pub quarterly_amount: Decimal,
    /// Support duration in quarters.
    pub support_quarters: u32,
    /// Minimum employment duration in months.
    pub min_tenure_months: u32,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Parental Employment Stability program.
///
/// The qualifying event (an approved leave) is not represented in the
/// roster, so the catalog carries no amount; the claim is priced manually
/// during review.
#[derive(Debug, Clone, Deserialize)]
pub struct ParentalEmploymentStabilityParams {
    /// Official display name.
    pub display_name: String,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Parameters for the Employment Retention program.
#[derive(Debug, Clone, Deserialize)]
pub struct EmploymentRetentionParams {
    /// Official display name.
    pub display_name: String,
    /// Documents the claim must attach.
    pub required_documents: Vec<DocumentKind>,
}

/// Per-program parameter table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramTable {
    /// Youth Job Leap parameters.
    pub youth_job_leap: YouthJobLeapParams,
    /// Employment Promotion parameters.
    pub employment_promotion: EmploymentPromotionParams,
    /// Regular Conversion parameters.
    pub regular_conversion: RegularConversionParams,
    /// Senior Continued Employment parameters.
    pub senior_continued_employment: SeniorContinuedEmploymentParams,
    /// Senior Employment Support parameters.
    pub senior_employment_support: SeniorEmploymentSupportParams,
    /// Parental Employment Stability parameters.
    pub parental_employment_stability: ParentalEmploymentStabilityParams,
    /// Employment Retention parameters.
    pub employment_retention: EmploymentRetentionParams,
}

/// A pair of programs that cannot both be claimed for the same employees.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExclusivePair {
    /// First member, in catalog declaration order.
    pub first: Program,
    /// Second member.
    pub second: Program,
}

/// Borrowed view of one program's catalog parameters.
#[derive(Debug, Clone, Copy)]
pub enum ProgramParameters<'a> {
    /// Youth Job Leap parameters.
    YouthJobLeap(&'a YouthJobLeapParams),
    /// Employment Promotion parameters.
    EmploymentPromotion(&'a EmploymentPromotionParams),
    /// Regular Conversion parameters.
    RegularConversion(&'a RegularConversionParams),
    /// Senior Continued Employment parameters.
    SeniorContinuedEmployment(&'a SeniorContinuedEmploymentParams),
    /// Senior Employment Support parameters.
    SeniorEmploymentSupport(&'a SeniorEmploymentSupportParams),
    /// Parental Employment Stability parameters.
    ParentalEmploymentStability(&'a ParentalEmploymentStabilityParams),
    /// Employment Retention parameters.
    EmploymentRetention(&'a EmploymentRetentionParams),
}

/// The complete, validated program catalog.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    metadata: CatalogMetadata,
    /// Minimum-wage steps sorted by effective date ascending.
    minimum_wage: Vec<WageThreshold>,
    programs: ProgramTable,
    exclusions: Vec<ExclusivePair>,
}

impl ProgramCatalog {
    /// Creates a validated catalog from its component parts.
    ///
    /// A malformed catalog is rejected outright: an unreported gap would
    /// understate or fabricate a subsidy amount downstream.
    pub fn new(
        metadata: CatalogMetadata,
        minimum_wage: Vec<WageThreshold>,
        programs: ProgramTable,
        exclusions: Vec<ExclusivePair>,
    ) -> EngineResult<Self> {
        let mut sorted_wage = minimum_wage;
        sorted_wage.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));

        let catalog = Self {
            metadata,
            minimum_wage: sorted_wage,
            programs,
            exclusions,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.minimum_wage.is_empty() {
            return Err(EngineError::CatalogInvalid {
                message: "minimum wage table is empty".to_string(),
            });
        }
        for threshold in &self.minimum_wage {
            if threshold.monthly_amount <= Decimal::ZERO {
                return Err(EngineError::CatalogInvalid {
                    message: format!(
                        "non-positive minimum wage {} effective {}",
                        threshold.monthly_amount, threshold.effective_from
                    ),
                });
            }
        }

        let youth = &self.programs.youth_job_leap;
        if youth.business_subsidy <= Decimal::ZERO || youth.support_months == 0 {
            return Err(EngineError::CatalogInvalid {
                message: "youth_job_leap requires a positive subsidy and duration".to_string(),
            });
        }
        if youth.non_capital_incentive < Decimal::ZERO {
            return Err(EngineError::CatalogInvalid {
                message: "youth_job_leap incentive cannot be negative".to_string(),
            });
        }

        let promotion = &self.programs.employment_promotion;
        if promotion.monthly_amount <= Decimal::ZERO || promotion.support_months == 0 {
            return Err(EngineError::CatalogInvalid {
                message: "employment_promotion requires a positive amount and duration"
                    .to_string(),
            });
        }

        let conversion = &self.programs.regular_conversion;
        if conversion.monthly_amount <= Decimal::ZERO || conversion.support_months == 0 {
            return Err(EngineError::CatalogInvalid {
                message: "regular_conversion requires a positive amount and duration".to_string(),
            });
        }
        if conversion.min_roster >= conversion.max_roster_exclusive {
            return Err(EngineError::CatalogInvalid {
                message: format!(
                    "regular_conversion roster band [{}, {}) is empty",
                    conversion.min_roster, conversion.max_roster_exclusive
                ),
            });
        }
        if conversion.cap_ratio <= Decimal::ZERO || conversion.cap_ratio >= Decimal::ONE {
            return Err(EngineError::CatalogInvalid {
                message: "regular_conversion cap ratio must be between 0 and 1".to_string(),
            });
        }

        let continued = &self.programs.senior_continued_employment;
        if continued.quarterly_amount_capital <= Decimal::ZERO
            || continued.quarterly_amount_non_capital <= Decimal::ZERO
            || continued.support_quarters == 0
        {
            return Err(EngineError::CatalogInvalid {
                message: "senior_continued_employment requires positive quarterly amounts and \
                          duration"
                    .to_string(),
            });
        }

        let support = &self.programs.senior_employment_support;
        if support.quarterly_amount <= Decimal::ZERO || support.support_quarters == 0 {
            return Err(EngineError::CatalogInvalid {
                message: "senior_employment_support requires a positive quarterly amount and \
                          duration"
                    .to_string(),
            });
        }

        for pair in &self.exclusions {
            if pair.first == pair.second {
                return Err(EngineError::CatalogInvalid {
                    message: format!("exclusive pair declares {} against itself", pair.first),
                });
            }
        }
        for (i, a) in self.exclusions.iter().enumerate() {
            for b in self.exclusions.iter().skip(i + 1) {
                let same = (a.first == b.first && a.second == b.second)
                    || (a.first == b.second && a.second == b.first);
                if same {
                    return Err(EngineError::CatalogInvalid {
                        message: format!(
                            "exclusive pair ({}, {}) declared twice",
                            a.first, a.second
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns the minimum-wage steps, sorted ascending.
    pub fn minimum_wage_table(&self) -> &[WageThreshold] {
        &self.minimum_wage
    }

    /// Returns the declared mutually-exclusive program pairs.
    pub fn exclusive_pairs(&self) -> &[ExclusivePair] {
        &self.exclusions
    }

    /// Resolves the monthly minimum-wage threshold for an employee hired
    /// on the given date.
    ///
    /// The most recent step on or before the hire date applies; hire
    /// dates earlier than every step resolve to the first step, which is
    /// the table's baseline.
    pub fn minimum_wage_on_hire(&self, hire_date: NaiveDate) -> EngineResult<Decimal> {
        let threshold = self
            .minimum_wage
            .iter()
            .rfind(|t| t.effective_from <= hire_date)
            .or_else(|| self.minimum_wage.first());

        match threshold {
            Some(t) => Ok(t.monthly_amount),
            None => Err(EngineError::CatalogInvalid {
                message: "minimum wage table is empty".to_string(),
            }),
        }
    }

    /// Returns the parameters for a program.
    ///
    /// Total over the closed program set; the enum makes a missing arm a
    /// compile error rather than a runtime gap.
    pub fn parameters(&self, program: Program) -> ProgramParameters<'_> {
        match program {
            Program::YouthJobLeap => {
                ProgramParameters::YouthJobLeap(&self.programs.youth_job_leap)
            }
            Program::EmploymentPromotion => {
                ProgramParameters::EmploymentPromotion(&self.programs.employment_promotion)
            }
            Program::RegularConversion => {
                ProgramParameters::RegularConversion(&self.programs.regular_conversion)
            }
            Program::SeniorContinuedEmployment => ProgramParameters::SeniorContinuedEmployment(
                &self.programs.senior_continued_employment,
            ),
            Program::SeniorEmploymentSupport => {
                ProgramParameters::SeniorEmploymentSupport(&self.programs.senior_employment_support)
            }
            Program::ParentalEmploymentStability => {
                ProgramParameters::ParentalEmploymentStability(
                    &self.programs.parental_employment_stability,
                )
            }
            Program::EmploymentRetention => {
                ProgramParameters::EmploymentRetention(&self.programs.employment_retention)
            }
        }
    }

    /// Returns the official display name for a program.
    pub fn display_name(&self, program: Program) -> &str {
        match self.parameters(program) {
            ProgramParameters::YouthJobLeap(p) => &p.display_name,
            ProgramParameters::EmploymentPromotion(p) => &p.display_name,
            ProgramParameters::RegularConversion(p) => &p.display_name,
            ProgramParameters::SeniorContinuedEmployment(p) => &p.display_name,
            ProgramParameters::SeniorEmploymentSupport(p) => &p.display_name,
            ProgramParameters::ParentalEmploymentStability(p) => &p.display_name,
            ProgramParameters::EmploymentRetention(p) => &p.display_name,
        }
    }

    /// Returns the required-document checklist for a program.
    pub fn required_documents(&self, program: Program) -> &[DocumentKind] {
        match self.parameters(program) {
            ProgramParameters::YouthJobLeap(p) => &p.required_documents,
            ProgramParameters::EmploymentPromotion(p) => &p.required_documents,
            ProgramParameters::RegularConversion(p) => &p.required_documents,
            ProgramParameters::SeniorContinuedEmployment(p) => &p.required_documents,
            ProgramParameters::SeniorEmploymentSupport(p) => &p.required_documents,
            ProgramParameters::ParentalEmploymentStability(p) => &p.required_documents,
            ProgramParameters::EmploymentRetention(p) => &p.required_documents,
        }
    }

    /// Typed access to the Youth Job Leap parameters.
    pub fn youth_job_leap(&self) -> &YouthJobLeapParams {
        &self.programs.youth_job_leap
    }

    /// Typed access to the Employment Promotion parameters.
    pub fn employment_promotion(&self) -> &EmploymentPromotionParams {
        &self.programs.employment_promotion
    }

    /// Typed access to the Regular Conversion parameters.
    pub fn regular_conversion(&self) -> &RegularConversionParams {
        &self.programs.regular_conversion
    }

    /// Typed access to the Senior Continued Employment parameters.
    pub fn senior_continued_employment(&self) -> &SeniorContinuedEmploymentParams {
        &self.programs.senior_continued_employment
    }

    /// Typed access to the Senior Employment Support parameters.
    pub fn senior_employment_support(&self) -> &SeniorEmploymentSupportParams {
        &self.programs.senior_employment_support
    }

    /// Typed access to the Parental Employment Stability parameters.
    pub fn parental_employment_stability(&self) -> &ParentalEmploymentStabilityParams {
        &self.programs.parental_employment_stability
    }

    /// Typed access to the Employment Retention parameters.
    pub fn employment_retention(&self) -> &EmploymentRetentionParams {
        &self.programs.employment_retention
    }
}
