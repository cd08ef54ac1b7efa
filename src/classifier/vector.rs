//! Classifier confidence vector
//!
//! The classifier reports six ordered per-class scores. The raw index
//! layout is an implicit contract with the model, so it is folded into
//! named fields exactly once, here at the adapter boundary; downstream
//! code never touches integer indices.

use serde::{Deserialize, Serialize};

/// Number of classes the classifier reports
pub const CLASS_COUNT: usize = 6;

/// Per-class confidence scores for one photograph
///
/// All values are in [0, 1]. Produced once per image at the classifier
/// boundary and immutable afterwards. The five damage scores are
/// independent (multi-label, not argmax-exclusive); `plain` is carried
/// separately for risk classification and never suppresses a detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceVector {
    /// Severe crack / spalling score (class 0)
    pub crack_high: f32,
    /// Moderate crack score (class 1)
    pub crack_moderate: f32,
    /// Hairline crack score (class 2)
    pub crack_low: f32,
    /// Paint deterioration score (class 3)
    pub paint: f32,
    /// Algae growth score (class 4)
    pub algae: f32,
    /// Plain (undamaged) surface score (class 5)
    pub plain: f32,
}

impl ConfidenceVector {
    /// Build a vector from the adapter's raw ordered scores
    ///
    /// A slice shorter than [`CLASS_COUNT`] is padded with zero confidence
    /// rather than rejected; extra entries are ignored. The adapter's
    /// contract is trusted, so values are not range-checked here.
    pub fn from_scores(scores: &[f32]) -> Self {
        if scores.len() < CLASS_COUNT {
            log::warn!(
                "classifier returned {} scores, expected {}; missing classes default to 0",
                scores.len(),
                CLASS_COUNT
            );
        }
        let score = |index: usize| scores.get(index).copied().unwrap_or(0.0);
        Self {
            crack_high: score(0),
            crack_moderate: score(1),
            crack_low: score(2),
            paint: score(3),
            algae: score(4),
            plain: score(5),
        }
    }

    /// All-zero vector (degenerate input)
    pub fn zeroed() -> Self {
        Self::from_scores(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_full() {
        let v = ConfidenceVector::from_scores(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(v.crack_high, 0.1);
        assert_eq!(v.crack_moderate, 0.2);
        assert_eq!(v.crack_low, 0.3);
        assert_eq!(v.paint, 0.4);
        assert_eq!(v.algae, 0.5);
        assert_eq!(v.plain, 0.6);
    }

    #[test]
    fn test_from_scores_short_slice_defaults_to_zero() {
        let v = ConfidenceVector::from_scores(&[0.9, 0.8]);
        assert_eq!(v.crack_high, 0.9);
        assert_eq!(v.crack_moderate, 0.8);
        assert_eq!(v.crack_low, 0.0);
        assert_eq!(v.paint, 0.0);
        assert_eq!(v.algae, 0.0);
        assert_eq!(v.plain, 0.0);
    }

    #[test]
    fn test_from_scores_extra_entries_ignored() {
        let v = ConfidenceVector::from_scores(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        assert_eq!(v.plain, 0.6);
    }

    #[test]
    fn test_zeroed() {
        let v = ConfidenceVector::zeroed();
        assert_eq!(v, ConfidenceVector::from_scores(&[0.0; 6]));
    }
}
