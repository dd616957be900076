//! Amount calculation for qualifying employees.
//!
//! Deterministic integer arithmetic over catalog figures. The only
//! rounding is the floor already baked into the Regular Conversion
//! support cap; every other figure is an exact product of whole-KRW
//! catalog amounts.

use rust_decimal::Decimal;

use crate::catalog::ProgramCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{Program, Region};

/// The computed amount for a program and qualifying set.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountBreakdown {
    /// Maximum amount per qualifying employee over the support period.
    pub per_person: Decimal,
    /// Support duration in months.
    pub support_months: u32,
    /// Total maximum amount (`per_person` × qualifying count).
    pub total: Decimal,
}

/// Computes the maximum amount a program pays for a qualifying set.
///
/// The rule set guarantees a non-empty qualifying set before asking for
/// an amount; a zero count here is a programming error, reported as
/// [`EngineError::CalculationError`] rather than silently producing a
/// zero figure.
///
/// Company-level programs (Parental Employment Stability, Employment
/// Retention) are priced manually during review, so their breakdown is
/// zero by contract.
pub fn compute_amount(
    program: Program,
    qualifying_count: u32,
    region: Region,
    catalog: &ProgramCatalog,
) -> EngineResult<AmountBreakdown> {
    if qualifying_count == 0 {
        return Err(EngineError::CalculationError {
            message: format!("amount requested for empty qualifying set ({program})"),
        });
    }

    let (per_person, support_months) = match program {
        Program::YouthJobLeap => {
            let params = catalog.youth_job_leap();
            let incentive = match region {
                Region::NonCapital => params.non_capital_incentive,
                Region::Capital => Decimal::ZERO,
            };
            (params.business_subsidy + incentive, params.support_months)
        }
        Program::EmploymentPromotion => {
            let params = catalog.employment_promotion();
            (
                params.monthly_amount * Decimal::from(params.support_months),
                params.support_months,
            )
        }
        Program::RegularConversion => {
            let params = catalog.regular_conversion();
            (
                params.monthly_amount * Decimal::from(params.support_months),
                params.support_months,
            )
        }
        Program::SeniorContinuedEmployment => {
            let params = catalog.senior_continued_employment();
            let quarterly = match region {
                Region::Capital => params.quarterly_amount_capital,
                Region::NonCapital => params.quarterly_amount_non_capital,
            };
            (
                quarterly * Decimal::from(params.support_quarters),
                params.support_quarters * 3,
            )
        }
        Program::SeniorEmploymentSupport => {
            let params = catalog.senior_employment_support();
            (
                params.quarterly_amount * Decimal::from(params.support_quarters),
                params.support_quarters * 3,
            )
        }
        Program::ParentalEmploymentStability | Program::EmploymentRetention => {
            (Decimal::ZERO, 0)
        }
    };

    Ok(AmountBreakdown {
        per_person,
        support_months,
        total: per_person * Decimal::from(qualifying_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn won(amount: i64) -> Decimal {
        Decimal::from(amount)
    }

    #[test]
    fn test_youth_non_capital_includes_incentive() {
        let catalog = default_catalog().unwrap();
        let breakdown =
            compute_amount(Program::YouthJobLeap, 1, Region::NonCapital, &catalog).unwrap();

        // 7,200,000 business subsidy + 4,800,000 incentive
        assert_eq!(breakdown.per_person, won(12_000_000));
        assert_eq!(breakdown.support_months, 12);
        assert_eq!(breakdown.total, won(12_000_000));
    }

    #[test]
    fn test_youth_capital_omits_incentive() {
        let catalog = default_catalog().unwrap();
        let breakdown =
            compute_amount(Program::YouthJobLeap, 1, Region::Capital, &catalog).unwrap();

        assert_eq!(breakdown.per_person, won(7_200_000));
        assert_eq!(breakdown.total, won(7_200_000));
    }

    #[test]
    fn test_promotion_is_monthly_rate_times_duration() {
        let catalog = default_catalog().unwrap();
        let breakdown =
            compute_amount(Program::EmploymentPromotion, 3, Region::Capital, &catalog).unwrap();

        assert_eq!(breakdown.per_person, won(7_200_000));
        assert_eq!(breakdown.total, won(21_600_000));
    }

    #[test]
    fn test_senior_continued_quarterly_rate_depends_on_region() {
        let catalog = default_catalog().unwrap();

        let capital = compute_amount(
            Program::SeniorContinuedEmployment,
            1,
            Region::Capital,
            &catalog,
        )
        .unwrap();
        let non_capital = compute_amount(
            Program::SeniorContinuedEmployment,
            1,
            Region::NonCapital,
            &catalog,
        )
        .unwrap();

        // 900,000 and 1,100,000 per quarter over 8 quarters
        assert_eq!(capital.per_person, won(7_200_000));
        assert_eq!(non_capital.per_person, won(8_800_000));
        assert_eq!(capital.support_months, 24);
    }

    #[test]
    fn test_senior_support_is_flat_quarterly_rate() {
        let catalog = default_catalog().unwrap();
        let breakdown = compute_amount(
            Program::SeniorEmploymentSupport,
            2,
            Region::NonCapital,
            &catalog,
        )
        .unwrap();

        // 300,000 per quarter over 8 quarters, two people
        assert_eq!(breakdown.per_person, won(2_400_000));
        assert_eq!(breakdown.total, won(4_800_000));
    }

    #[test]
    fn test_company_level_programs_have_manual_amounts() {
        let catalog = default_catalog().unwrap();

        for program in [
            Program::ParentalEmploymentStability,
            Program::EmploymentRetention,
        ] {
            let breakdown = compute_amount(program, 1, Region::Capital, &catalog).unwrap();
            assert_eq!(breakdown.per_person, Decimal::ZERO);
            assert_eq!(breakdown.total, Decimal::ZERO);
            assert_eq!(breakdown.support_months, 0);
        }
    }

    #[test]
    fn test_zero_qualifying_count_is_rejected() {
        let catalog = default_catalog().unwrap();
        let result = compute_amount(Program::YouthJobLeap, 0, Region::Capital, &catalog);

        match result.unwrap_err() {
            EngineError::CalculationError { message } => {
                assert!(message.contains("empty qualifying set"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_total_scales_linearly_with_count() {
        let catalog = default_catalog().unwrap();
        let one = compute_amount(Program::YouthJobLeap, 1, Region::NonCapital, &catalog).unwrap();
        let five = compute_amount(Program::YouthJobLeap, 5, Region::NonCapital, &catalog).unwrap();

        assert_eq!(five.total, one.total * won(5));
        assert_eq!(five.per_person, one.per_person);
    }
}
