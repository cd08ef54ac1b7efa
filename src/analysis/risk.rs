//! Image-level risk classification
//!
//! Maps a photo's detected issues (plus its plain-surface confidence) to a
//! single risk verdict through a fixed-priority decision table. The
//! severity of the worst present issue always dominates; "no detectable
//! issue but also not confidently clean" degrades to Low rather than None
//! to avoid false reassurance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::detection::{DamageType, DetectedIssue};

/// Risk verdict for a photo, an area, or a whole assessment
///
/// Variants are declared in ascending rank so the derived `Ord` gives the
/// total order `None < Low < Moderate < High`; worst-wins aggregation is
/// then just `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRating {
    /// Confidently clean surface
    None,
    /// Cosmetic findings, or an ambiguous read worth a look
    Low,
    /// Degrading condition
    Moderate,
    /// Structural concern
    High,
}

impl RiskRating {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            RiskRating::None => "No risk",
            RiskRating::Low => "Low risk",
            RiskRating::Moderate => "Moderate risk",
            RiskRating::High => "High risk",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify one photo from its detected issues and plain-surface score
///
/// Fixed-priority decision table, evaluated top-down, first match wins:
///
/// 1. Any Spalling or MajorCrack issue → High
/// 2. Else any Algae issue → Moderate
/// 3. Else any MinorCrack or PaintDamage issue → Low
/// 4. Else (no issues) plain confidence above the floor → None
/// 5. Else (no issues, ambiguous plain reading) → Low
///
/// Pure over its inputs: the verdict is always derivable from the issue
/// list and plain confidence alone.
pub fn classify_risk(
    issues: &[DetectedIssue],
    plain_confidence: f32,
    config: &AnalysisConfig,
) -> RiskRating {
    let has_type = |matcher: fn(DamageType) -> bool| {
        issues.iter().any(|issue| matcher(issue.damage_type))
    };

    if has_type(|t| matches!(t, DamageType::Spalling | DamageType::MajorCrack)) {
        RiskRating::High
    } else if has_type(|t| matches!(t, DamageType::Algae)) {
        RiskRating::Moderate
    } else if has_type(|t| matches!(t, DamageType::MinorCrack | DamageType::PaintDamage)) {
        RiskRating::Low
    } else if plain_confidence > config.plain_confidence_floor {
        RiskRating::None
    } else {
        log::debug!(
            "no issues but plain confidence {:.2} at or below floor {:.2}; rating Low",
            plain_confidence,
            config.plain_confidence_floor
        );
        RiskRating::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ConfidenceVector;
    use crate::detection::detect_issues;

    fn issues_for(scores: [f32; 6]) -> Vec<DetectedIssue> {
        detect_issues(&ConfidenceVector::from_scores(&scores), 0.50)
    }

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn test_spalling_rates_high() {
        let issues = issues_for([0.9, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(classify_risk(&issues, 0.0, &config()), RiskRating::High);
    }

    #[test]
    fn test_major_crack_rates_high() {
        let issues = issues_for([0.0, 0.8, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(classify_risk(&issues, 0.0, &config()), RiskRating::High);
    }

    #[test]
    fn test_algae_rates_moderate() {
        let issues = issues_for([0.0, 0.0, 0.0, 0.0, 0.7, 0.0]);
        assert_eq!(classify_risk(&issues, 0.0, &config()), RiskRating::Moderate);
    }

    #[test]
    fn test_minor_findings_rate_low() {
        let issues = issues_for([0.0, 0.0, 0.6, 0.7, 0.0, 0.0]);
        assert_eq!(classify_risk(&issues, 0.0, &config()), RiskRating::Low);
    }

    #[test]
    fn test_high_dominates_regardless_of_other_issues() {
        // Risk monotonicity: a High-level issue wins over any mix.
        let issues = issues_for([0.55, 0.0, 0.9, 0.9, 0.9, 0.0]);
        assert_eq!(classify_risk(&issues, 0.0, &config()), RiskRating::High);
    }

    #[test]
    fn test_confidently_clean_rates_none() {
        let issues = issues_for([0.0, 0.0, 0.0, 0.0, 0.0, 0.95]);
        assert_eq!(classify_risk(&issues, 0.95, &config()), RiskRating::None);
    }

    #[test]
    fn test_ambiguous_low_plain_rates_low_not_none() {
        let issues = issues_for([0.0, 0.0, 0.0, 0.0, 0.0, 0.1]);
        assert_eq!(classify_risk(&issues, 0.1, &config()), RiskRating::Low);
    }

    #[test]
    fn test_plain_floor_boundary_is_strict() {
        // Exactly at the floor is still ambiguous.
        assert_eq!(classify_risk(&[], 0.30, &config()), RiskRating::Low);
        assert_eq!(classify_risk(&[], 0.30001, &config()), RiskRating::None);
    }

    #[test]
    fn test_rating_order_for_aggregation() {
        assert!(RiskRating::High > RiskRating::Moderate);
        assert!(RiskRating::Moderate > RiskRating::Low);
        assert!(RiskRating::Low > RiskRating::None);
    }
}
