//! Multi-level risk aggregation and issue tallies
//!
//! Folds image-level verdicts into area-level and assessment-level risk
//! ("worst wins" at every level) and tallies issue counts by damage type.
//! All functions here are pure, synchronous, single-pass folds over a
//! completed batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::result::ImageAssessment;
use crate::analysis::risk::RiskRating;
use crate::detection::DamageType;

/// Worst-wins fold over child risks
///
/// The aggregate equals the maximum-ranked risk among its children and is
/// therefore never lower than any constituent. An empty child set
/// aggregates to `None`.
pub fn aggregate_risks<I>(risks: I) -> RiskRating
where
    I: IntoIterator<Item = RiskRating>,
{
    risks.into_iter().max().unwrap_or(RiskRating::None)
}

/// Issue counts across a set of images
///
/// Counts are per image-occurrence, not per distinct physical defect: the
/// same crack photographed from two angles counts twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTally {
    /// Total detected issues in scope
    pub total: usize,
    /// Per-damage-type counts
    pub per_type: BTreeMap<DamageType, usize>,
}

/// Tally detected issues per damage type across the images in scope
pub fn tally_issues<'a, I>(images: I) -> IssueTally
where
    I: IntoIterator<Item = &'a ImageAssessment>,
{
    let mut tally = IssueTally::default();
    for image in images {
        for issue in &image.issues {
            tally.total += 1;
            *tally.per_type.entry(issue.damage_type).or_insert(0) += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ConfidenceVector;
    use crate::detection::detect_issues;

    fn assessment(scores: [f32; 6], risk: RiskRating) -> ImageAssessment {
        let vector = ConfidenceVector::from_scores(&scores);
        ImageAssessment {
            image_ref: "img".to_string(),
            scores: vector,
            issues: detect_issues(&vector, 0.50),
            risk,
        }
    }

    #[test]
    fn test_aggregation_monotonicity() {
        assert_eq!(
            aggregate_risks([RiskRating::Low, RiskRating::High]),
            RiskRating::High
        );
    }

    #[test]
    fn test_aggregation_empty_is_none() {
        assert_eq!(aggregate_risks([]), RiskRating::None);
    }

    #[test]
    fn test_aggregation_all_none() {
        assert_eq!(
            aggregate_risks([RiskRating::None, RiskRating::None]),
            RiskRating::None
        );
    }

    #[test]
    fn test_aggregate_never_below_constituents() {
        let children = [RiskRating::Moderate, RiskRating::Low, RiskRating::None];
        let aggregate = aggregate_risks(children);
        for child in children {
            assert!(aggregate >= child);
        }
    }

    #[test]
    fn test_tally_counts_per_occurrence() {
        // The same damage type across two photos counts twice.
        let images = vec![
            assessment([0.0, 0.0, 0.8, 0.0, 0.0, 0.0], RiskRating::Low),
            assessment([0.0, 0.0, 0.7, 0.0, 0.6, 0.0], RiskRating::Moderate),
        ];
        let tally = tally_issues(&images);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.per_type.get(&DamageType::MinorCrack), Some(&2));
        assert_eq!(tally.per_type.get(&DamageType::Algae), Some(&1));
    }

    #[test]
    fn test_tally_empty_scope() {
        let tally = tally_issues(&[]);
        assert_eq!(tally.total, 0);
        assert!(tally.per_type.is_empty());
    }
}
