//! Mutual-exclusion resolution between overlapping programs.
//!
//! Some program pairs cannot both be claimed for the same employees. The
//! catalog declares those pairs; this resolver is total over the
//! declarations and a no-op otherwise. When both members of a declared
//! pair hold payable verdicts over overlapping qualifying-employee sets,
//! the larger total amount wins and the loser is zeroed into the
//! exclusion list. Ties break by catalog declaration order, so the
//! outcome never depends on the order programs were requested in.

use rust_decimal::Decimal;

use crate::catalog::ProgramCatalog;
use crate::models::{Eligibility, EligibilityResult, ExclusionRecord, Program, ReasonCode};

/// Applies the catalog's exclusive pairs to a result list.
///
/// Returns the filtered results (same programs, same order; losers become
/// `NotEligible` with zeroed amounts) and the exclusion records.
pub fn resolve_exclusions(
    mut results: Vec<EligibilityResult>,
    catalog: &ProgramCatalog,
) -> (Vec<EligibilityResult>, Vec<ExclusionRecord>) {
    let mut exclusions = Vec::new();

    for pair in catalog.exclusive_pairs() {
        let Some(first_idx) = payable_position(&results, pair.first) else {
            continue;
        };
        let Some(second_idx) = payable_position(&results, pair.second) else {
            continue;
        };

        let overlap: Vec<String> = results[first_idx]
            .qualifying_employee_ids
            .iter()
            .filter(|id| results[second_idx].qualifying_employee_ids.contains(id))
            .cloned()
            .collect();
        if overlap.is_empty() {
            continue;
        }

        let first_total = results[first_idx].total_amount;
        let second_total = results[second_idx].total_amount;
        let (winner_idx, loser_idx) = if first_total > second_total {
            (first_idx, second_idx)
        } else if second_total > first_total {
            (second_idx, first_idx)
        } else if results[first_idx].program.catalog_rank()
            <= results[second_idx].program.catalog_rank()
        {
            (first_idx, second_idx)
        } else {
            (second_idx, first_idx)
        };

        let winner = results[winner_idx].program;
        exclusions.push(ExclusionRecord {
            excluded: results[loser_idx].program,
            excluded_by: winner,
            reason: ReasonCode::ExcludedByOtherProgram,
            overlapping_employee_ids: overlap.clone(),
            note: format!(
                "{winner} pays more for {} overlapping employees",
                overlap.len()
            ),
        });

        let loser = &mut results[loser_idx];
        loser.eligibility = Eligibility::NotEligible;
        loser.amount_per_person = Decimal::ZERO;
        loser.total_amount = Decimal::ZERO;
        loser.qualifying_count = 0;
        loser.qualifying_employee_ids.clear();
        loser.reasons.push(ReasonCode::ExcludedByOtherProgram);
        loser.notes.push(format!("superseded by {winner}"));
    }

    (results, exclusions)
}

fn payable_position(results: &[EligibilityResult], program: Program) -> Option<usize> {
    results
        .iter()
        .position(|r| r.program == program && r.eligibility.is_payable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn payable_result(
        program: Program,
        total: i64,
        employee_ids: &[&str],
    ) -> EligibilityResult {
        let count = employee_ids.len() as u32;
        let per_person = if count > 0 {
            Decimal::from(total) / Decimal::from(count)
        } else {
            Decimal::ZERO
        };
        EligibilityResult {
            program,
            eligibility: Eligibility::Eligible,
            requirements_met: vec![],
            requirements_not_met: vec![],
            qualifying_count: count,
            qualifying_employee_ids: employee_ids.iter().map(|s| s.to_string()).collect(),
            amount_per_person: per_person,
            support_months: 24,
            total_amount: Decimal::from(total),
            reasons: vec![],
            notes: vec![],
        }
    }

    #[test]
    fn test_larger_amount_wins_and_loser_is_zeroed() {
        let catalog = default_catalog().unwrap();
        let results = vec![
            payable_result(
                Program::SeniorContinuedEmployment,
                8_800_000,
                &["emp_001"],
            ),
            payable_result(Program::SeniorEmploymentSupport, 2_400_000, &["emp_001"]),
        ];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert_eq!(exclusions.len(), 1);
        assert_eq!(exclusions[0].excluded, Program::SeniorEmploymentSupport);
        assert_eq!(exclusions[0].excluded_by, Program::SeniorContinuedEmployment);
        assert_eq!(exclusions[0].overlapping_employee_ids, vec!["emp_001"]);

        let loser = &filtered[1];
        assert_eq!(loser.eligibility, Eligibility::NotEligible);
        assert_eq!(loser.total_amount, Decimal::ZERO);
        assert_eq!(loser.qualifying_count, 0);
        assert!(loser.reasons.contains(&ReasonCode::ExcludedByOtherProgram));

        // Winner untouched
        assert_eq!(filtered[0].total_amount, Decimal::from(8_800_000));
    }

    #[test]
    fn test_result_order_is_preserved() {
        let catalog = default_catalog().unwrap();
        // Request order has the support program first; the winner is still
        // decided by amount, not position
        let results = vec![
            payable_result(Program::SeniorEmploymentSupport, 2_400_000, &["emp_001"]),
            payable_result(
                Program::SeniorContinuedEmployment,
                8_800_000,
                &["emp_001"],
            ),
        ];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert_eq!(filtered[0].program, Program::SeniorEmploymentSupport);
        assert_eq!(filtered[1].program, Program::SeniorContinuedEmployment);
        assert_eq!(exclusions[0].excluded, Program::SeniorEmploymentSupport);
    }

    #[test]
    fn test_tie_breaks_by_catalog_declaration_order() {
        let catalog = default_catalog().unwrap();
        let results = vec![
            payable_result(Program::SeniorEmploymentSupport, 5_000_000, &["emp_001"]),
            payable_result(Program::SeniorContinuedEmployment, 5_000_000, &["emp_001"]),
        ];

        let (_, exclusions) = resolve_exclusions(results, &catalog);

        // Equal totals: the program declared first in the catalog wins
        assert_eq!(exclusions[0].excluded_by, Program::SeniorContinuedEmployment);
        assert_eq!(exclusions[0].excluded, Program::SeniorEmploymentSupport);
    }

    #[test]
    fn test_disjoint_qualifying_sets_are_untouched() {
        let catalog = default_catalog().unwrap();
        let results = vec![
            payable_result(
                Program::SeniorContinuedEmployment,
                8_800_000,
                &["emp_001"],
            ),
            payable_result(Program::SeniorEmploymentSupport, 2_400_000, &["emp_002"]),
        ];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert!(exclusions.is_empty());
        assert_eq!(filtered[0].eligibility, Eligibility::Eligible);
        assert_eq!(filtered[1].eligibility, Eligibility::Eligible);
    }

    #[test]
    fn test_not_eligible_member_cannot_exclude() {
        let catalog = default_catalog().unwrap();
        let mut ineligible = payable_result(
            Program::SeniorContinuedEmployment,
            0,
            &[],
        );
        ineligible.eligibility = Eligibility::NotEligible;
        let results = vec![
            ineligible,
            payable_result(Program::SeniorEmploymentSupport, 2_400_000, &["emp_001"]),
        ];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert!(exclusions.is_empty());
        assert_eq!(filtered[1].eligibility, Eligibility::Eligible);
    }

    #[test]
    fn test_needs_review_results_also_exclude() {
        let catalog = default_catalog().unwrap();
        let mut continued = payable_result(
            Program::SeniorContinuedEmployment,
            8_800_000,
            &["emp_001"],
        );
        continued.eligibility = Eligibility::NeedsReview;
        let results = vec![
            continued,
            payable_result(Program::SeniorEmploymentSupport, 2_400_000, &["emp_001"]),
        ];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert_eq!(exclusions.len(), 1);
        assert_eq!(filtered[0].eligibility, Eligibility::NeedsReview);
        assert_eq!(filtered[1].eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_no_declared_pairs_is_a_no_op() {
        let catalog = default_catalog().unwrap();
        let results = vec![payable_result(Program::YouthJobLeap, 12_000_000, &["emp_001"])];

        let (filtered, exclusions) = resolve_exclusions(results, &catalog);

        assert!(exclusions.is_empty());
        assert_eq!(filtered.len(), 1);
    }
}
