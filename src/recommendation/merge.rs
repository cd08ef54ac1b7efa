//! Recommendation grouping and merging
//!
//! Duplicate findings across photos collapse into one recommendation per
//! (damage type, level) key, with an occurrence count and the mean
//! confidence of the group. The algorithm is scope-agnostic: callers pass
//! the flat issue list of one area or of an entire assessment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::detection::{DamageLevel, DamageType, DetectedIssue};
use crate::recommendation::templates::{
    template_for, RecommendationTemplate, SeverityTier, CLEAN_SURFACE,
};

/// One deduplicated remediation entry
///
/// Covers every occurrence of one (damage type, level) pair across the
/// photos in scope. The synthetic clean entry carries no damage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecommendation {
    /// Damage type this entry covers; `None` for the clean-surface entry
    pub damage_type: Option<DamageType>,
    /// Severity tag; `None` for the clean-surface entry
    pub level: Option<DamageLevel>,
    /// Template title
    pub title: String,
    /// Template description
    pub description: String,
    /// Display tier
    pub severity: SeverityTier,
    /// Remediation steps, in order
    pub actions: Vec<String>,
    /// Number of photos the finding appeared in
    pub image_count: usize,
    /// Mean confidence across those occurrences
    pub average_confidence: f32,
}

impl MergedRecommendation {
    fn from_template(
        template: &RecommendationTemplate,
        key: Option<(DamageType, DamageLevel)>,
        image_count: usize,
        average_confidence: f32,
    ) -> Self {
        Self {
            damage_type: key.map(|(damage_type, _)| damage_type),
            level: key.map(|(_, level)| level),
            title: template.title.to_string(),
            description: template.description.to_string(),
            severity: template.severity,
            actions: template.actions.iter().map(|s| s.to_string()).collect(),
            image_count,
            average_confidence,
        }
    }
}

/// Merge a flat issue list into deduplicated recommendations
///
/// Issues are partitioned by (damage type, level); each group becomes one
/// entry with `image_count = |group|` and the group's mean confidence,
/// carrying the looked-up template. Output is ordered worst severity
/// first, ties by canonical class order.
///
/// An empty issue list yields a single synthetic clean-surface entry with
/// `image_count` set to `clean_image_count` and zero confidence.
pub fn merge_recommendations(
    issues: &[DetectedIssue],
    clean_image_count: usize,
) -> Vec<MergedRecommendation> {
    if issues.is_empty() {
        log::debug!(
            "no issues in scope; emitting clean-surface entry for {} image(s)",
            clean_image_count
        );
        return vec![MergedRecommendation::from_template(
            &CLEAN_SURFACE,
            None,
            clean_image_count,
            0.0,
        )];
    }

    let mut groups: BTreeMap<(DamageType, DamageLevel), Vec<f32>> = BTreeMap::new();
    for issue in issues {
        groups
            .entry((issue.damage_type, issue.level))
            .or_default()
            .push(issue.confidence);
    }

    let mut merged: Vec<MergedRecommendation> = groups
        .into_iter()
        .map(|((damage_type, level), confidences)| {
            let average = confidences.iter().sum::<f32>() / confidences.len() as f32;
            MergedRecommendation::from_template(
                template_for(damage_type, level),
                Some((damage_type, level)),
                confidences.len(),
                average,
            )
        })
        .collect();

    merged.sort_by_key(|entry| (entry.severity, entry.damage_type));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(damage_type: DamageType, confidence: f32) -> DetectedIssue {
        DetectedIssue {
            damage_type,
            level: damage_type.level(),
            confidence,
        }
    }

    #[test]
    fn test_grouping_counts_and_averages() {
        // Three photos each reporting a minor crack.
        let issues = vec![
            issue(DamageType::MinorCrack, 0.6),
            issue(DamageType::MinorCrack, 0.7),
            issue(DamageType::MinorCrack, 0.8),
        ];
        let merged = merge_recommendations(&issues, 0);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].damage_type, Some(DamageType::MinorCrack));
        assert_eq!(merged[0].image_count, 3);
        assert!((merged[0].average_confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_distinct_keys_stay_separate() {
        let issues = vec![
            issue(DamageType::MinorCrack, 0.6),
            issue(DamageType::Algae, 0.9),
        ];
        let merged = merge_recommendations(&issues, 0);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_ordered_worst_severity_first() {
        let issues = vec![
            issue(DamageType::PaintDamage, 0.6),
            issue(DamageType::Algae, 0.7),
            issue(DamageType::Spalling, 0.8),
        ];
        let merged = merge_recommendations(&issues, 0);

        let severities: Vec<SeverityTier> = merged.iter().map(|m| m.severity).collect();
        assert_eq!(
            severities,
            vec![
                SeverityTier::Urgent,
                SeverityTier::Moderate,
                SeverityTier::Minor,
            ]
        );
    }

    #[test]
    fn test_severity_tie_broken_by_class_order() {
        let issues = vec![
            issue(DamageType::MajorCrack, 0.6),
            issue(DamageType::Spalling, 0.6),
        ];
        let merged = merge_recommendations(&issues, 0);
        assert_eq!(merged[0].damage_type, Some(DamageType::Spalling));
        assert_eq!(merged[1].damage_type, Some(DamageType::MajorCrack));
    }

    #[test]
    fn test_empty_issue_list_yields_clean_entry() {
        let merged = merge_recommendations(&[], 4);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].damage_type, None);
        assert_eq!(merged[0].severity, SeverityTier::Good);
        assert_eq!(merged[0].image_count, 4);
        assert_eq!(merged[0].average_confidence, 0.0);
    }

    #[test]
    fn test_template_fields_carried_through() {
        let merged = merge_recommendations(&[issue(DamageType::Spalling, 0.9)], 0);
        let entry = &merged[0];

        assert_eq!(entry.title, "Concrete spalling");
        assert!(!entry.description.is_empty());
        assert!(!entry.actions.is_empty());
    }
}
