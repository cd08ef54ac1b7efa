//! Damage taxonomy and per-class threshold detection

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::ConfidenceVector;

/// Category of structural or surface defect
///
/// Variant order is the canonical class order, matching the classifier's
/// class layout. Each type carries a fixed severity ([`DamageType::level`]);
/// the mapping is closed, not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Concrete spalling / severe surface break-up
    Spalling,
    /// Major structural crack
    MajorCrack,
    /// Hairline or minor crack
    MinorCrack,
    /// Paint deterioration (peeling, blistering)
    PaintDamage,
    /// Algae or biological growth
    Algae,
}

/// Fixed severity tag bound to a damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageLevel {
    /// Structural concern, immediate attention
    High,
    /// Degrading condition, schedule remediation
    Moderate,
    /// Cosmetic, monitor
    Low,
}

impl DamageType {
    /// All damage types in canonical class order
    pub const ALL: [DamageType; 5] = [
        DamageType::Spalling,
        DamageType::MajorCrack,
        DamageType::MinorCrack,
        DamageType::PaintDamage,
        DamageType::Algae,
    ];

    /// The severity this damage type is always reported with
    pub fn level(self) -> DamageLevel {
        match self {
            DamageType::Spalling | DamageType::MajorCrack => DamageLevel::High,
            DamageType::Algae => DamageLevel::Moderate,
            DamageType::MinorCrack | DamageType::PaintDamage => DamageLevel::Low,
        }
    }

    /// Confidence score for this damage type in a classifier read
    pub fn confidence_in(self, scores: &ConfidenceVector) -> f32 {
        match self {
            DamageType::Spalling => scores.crack_high,
            DamageType::MajorCrack => scores.crack_moderate,
            DamageType::MinorCrack => scores.crack_low,
            DamageType::PaintDamage => scores.paint,
            DamageType::Algae => scores.algae,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DamageType::Spalling => "Spalling",
            DamageType::MajorCrack => "Major crack",
            DamageType::MinorCrack => "Minor crack",
            DamageType::PaintDamage => "Paint damage",
            DamageType::Algae => "Algae growth",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DamageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageLevel::High => write!(f, "High"),
            DamageLevel::Moderate => write!(f, "Moderate"),
            DamageLevel::Low => write!(f, "Low"),
        }
    }
}

/// One detected issue in one photograph
///
/// The confidence is always strictly above the detection threshold, and
/// the level always equals `damage_type.level()`. Issues are independent:
/// many can exist per image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedIssue {
    /// Detected defect category
    pub damage_type: DamageType,
    /// Severity tag (fixed per damage type)
    pub level: DamageLevel,
    /// Classifier confidence for this class
    pub confidence: f32,
}

impl DetectedIssue {
    fn new(damage_type: DamageType, confidence: f32) -> Self {
        Self {
            damage_type,
            level: damage_type.level(),
            confidence,
        }
    }
}

/// Detect issues by independent per-class thresholding
///
/// A damage class is reported iff its confidence strictly exceeds
/// `threshold`; a score exactly at the threshold is not a detection. The
/// plain score is deliberately ignored here: a photo can read "plain-ish"
/// and still show a real issue. Plain confidence informs risk
/// classification instead.
///
/// # Returns
///
/// Detected issues ordered by descending confidence, ties broken by
/// canonical class order. An all-zero read yields an empty list, identical
/// to the no-damage case.
pub fn detect_issues(scores: &ConfidenceVector, threshold: f32) -> Vec<DetectedIssue> {
    let mut issues: Vec<DetectedIssue> = DamageType::ALL
        .into_iter()
        .filter_map(|damage_type| {
            let confidence = damage_type.confidence_in(scores);
            (confidence > threshold).then(|| DetectedIssue::new(damage_type, confidence))
        })
        .collect();

    // Stable sort: equal confidences keep canonical class order.
    issues.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    log::debug!(
        "{} damage class(es) above threshold {:.2}",
        issues.len(),
        threshold
    );
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.50;

    fn vector(scores: [f32; 6]) -> ConfidenceVector {
        ConfidenceVector::from_scores(&scores)
    }

    #[test]
    fn test_threshold_boundary_exact_is_not_detected() {
        let issues = detect_issues(&vector([0.50, 0.0, 0.0, 0.0, 0.0, 0.0]), THRESHOLD);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_threshold_boundary_just_above_is_detected() {
        let issues = detect_issues(&vector([0.50001, 0.0, 0.0, 0.0, 0.0, 0.0]), THRESHOLD);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].damage_type, DamageType::Spalling);
        assert_eq!(issues[0].confidence, 0.50001);
    }

    #[test]
    fn test_multi_label_independence() {
        // CrackHigh and Algae both fire: two issues, not an argmax pick.
        let issues = detect_issues(&vector([0.9, 0.0, 0.0, 0.0, 0.9, 0.0]), THRESHOLD);
        assert_eq!(issues.len(), 2);
        let types: Vec<DamageType> = issues.iter().map(|i| i.damage_type).collect();
        assert!(types.contains(&DamageType::Spalling));
        assert!(types.contains(&DamageType::Algae));
    }

    #[test]
    fn test_plain_never_suppresses_detection() {
        let issues = detect_issues(&vector([0.0, 0.0, 0.8, 0.0, 0.0, 0.95]), THRESHOLD);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].damage_type, DamageType::MinorCrack);
    }

    #[test]
    fn test_degenerate_all_zero_vector() {
        let issues = detect_issues(&ConfidenceVector::zeroed(), THRESHOLD);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_ordering_by_descending_confidence() {
        let issues = detect_issues(&vector([0.6, 0.9, 0.7, 0.0, 0.0, 0.0]), THRESHOLD);
        let confidences: Vec<f32> = issues.iter().map(|i| i.confidence).collect();
        assert_eq!(confidences, vec![0.9, 0.7, 0.6]);
    }

    #[test]
    fn test_ordering_tie_broken_by_class_order() {
        let issues = detect_issues(&vector([0.0, 0.8, 0.0, 0.8, 0.0, 0.0]), THRESHOLD);
        assert_eq!(issues[0].damage_type, DamageType::MajorCrack);
        assert_eq!(issues[1].damage_type, DamageType::PaintDamage);
    }

    #[test]
    fn test_level_always_matches_type() {
        let issues = detect_issues(&vector([0.9, 0.9, 0.9, 0.9, 0.9, 0.0]), THRESHOLD);
        assert_eq!(issues.len(), 5);
        for issue in issues {
            assert_eq!(issue.level, issue.damage_type.level());
        }
    }

    #[test]
    fn test_fixed_type_level_mapping() {
        assert_eq!(DamageType::Spalling.level(), DamageLevel::High);
        assert_eq!(DamageType::MajorCrack.level(), DamageLevel::High);
        assert_eq!(DamageType::MinorCrack.level(), DamageLevel::Low);
        assert_eq!(DamageType::PaintDamage.level(), DamageLevel::Low);
        assert_eq!(DamageType::Algae.level(), DamageLevel::Moderate);
    }
}
