//! Assessment result types
//!
//! The field set of these types is the contract with persistence and
//! reporting collaborators; the storage format is theirs, the shape is
//! ours.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::{aggregate_risks, tally_issues};
use crate::analysis::risk::RiskRating;
use crate::classifier::ConfidenceVector;
use crate::detection::{DamageType, DetectedIssue};
use crate::error::AssessmentError;
use crate::recommendation::{merge_recommendations, MergedRecommendation};

/// Completed analysis of a single photograph
///
/// Created once per photo at analysis time and immutable thereafter;
/// re-analysis produces a brand-new assessment replacing the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAssessment {
    /// Caller-side reference to the source photo (path, storage key, ...)
    pub image_ref: String,
    /// The classifier read this assessment derives from
    pub scores: ConfidenceVector,
    /// Detected issues, ordered by descending confidence
    pub issues: Vec<DetectedIssue>,
    /// Image-level risk verdict
    pub risk: RiskRating,
}

impl ImageAssessment {
    /// Plain-surface confidence carried for risk classification
    pub fn plain_confidence(&self) -> f32 {
        self.scores.plain
    }
}

/// One named building area (e.g. "Foundation") and the photos taken of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaAssessment {
    /// Area identifier
    pub area_id: String,
    /// Assessed photos of this area
    pub images: Vec<ImageAssessment>,
    /// Worst-wins aggregate over the area's images
    pub risk: RiskRating,
}

impl AreaAssessment {
    /// Build an area assessment; risk derives from the images
    pub fn new(area_id: impl Into<String>, images: Vec<ImageAssessment>) -> Self {
        let risk = aggregate_risks(images.iter().map(|image| image.risk));
        Self {
            area_id: area_id.into(),
            images,
            risk,
        }
    }
}

/// Stage at which a photo dropped out of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The photo bytes could not be decoded
    Decode,
    /// The classifier adapter failed
    Inference,
    /// The batch was cancelled before this photo started
    Skipped,
}

/// Per-image failure note
///
/// A failing photo is excluded from the aggregate, never batch-fatal; the
/// note tells the caller which photo dropped out and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFailure {
    /// Caller-side reference to the source photo
    pub image_ref: String,
    /// Failure stage
    pub kind: FailureKind,
    /// Human-readable cause
    pub message: String,
}

impl ImageFailure {
    pub(crate) fn from_error(image_ref: &str, error: &AssessmentError) -> Self {
        let kind = match error {
            AssessmentError::Decode(_) => FailureKind::Decode,
            _ => FailureKind::Inference,
        };
        Self {
            image_ref: image_ref.to_string(),
            kind,
            message: error.to_string(),
        }
    }

    pub(crate) fn skipped(image_ref: &str) -> Self {
        Self {
            image_ref: image_ref.to_string(),
            kind: FailureKind::Skipped,
            message: "batch cancelled before this image started".to_string(),
        }
    }
}

/// Engine bookkeeping attached to a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    /// Successfully analyzed photos
    pub analyzed: usize,
    /// Photos that failed to decode or classify
    pub failed: usize,
    /// Photos skipped due to cancellation
    pub skipped: usize,
    /// Wall-clock batch time in milliseconds
    pub processing_time_ms: f32,
    /// Engine version the summary was produced with
    pub engine_version: String,
}

impl Default for AssessmentMetadata {
    fn default() -> Self {
        Self {
            analyzed: 0,
            failed: 0,
            skipped: 0,
            processing_time_ms: 0.0,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Scope a summary was computed over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentScope {
    /// Ungrouped batch: images in submission order
    Flat(Vec<ImageAssessment>),
    /// Area-grouped assessment
    Areas(Vec<AreaAssessment>),
}

impl AssessmentScope {
    /// Every image in scope
    ///
    /// Flat scope iterates in submission order; area scope iterates area
    /// by area.
    pub fn images(&self) -> impl Iterator<Item = &ImageAssessment> {
        let (flat, areas): (&[ImageAssessment], &[AreaAssessment]) = match self {
            AssessmentScope::Flat(images) => (images, &[]),
            AssessmentScope::Areas(areas) => (&[], areas),
        };
        flat.iter()
            .chain(areas.iter().flat_map(|area| area.images.iter()))
    }

    /// Number of images in scope
    pub fn image_count(&self) -> usize {
        self.images().count()
    }
}

/// Terminal aggregate for one assessment run
///
/// Created once at the end of an analysis run and replaced wholesale on
/// re-analysis, never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    /// Worst-wins aggregate across the whole scope
    pub overall_risk: RiskRating,
    /// Total issue occurrences in scope
    pub total_issue_count: usize,
    /// Issue occurrences per damage type
    pub per_type_counts: BTreeMap<DamageType, usize>,
    /// Assessed images, grouped or flat
    pub scope: AssessmentScope,
    /// Per-image failure notes
    pub failures: Vec<ImageFailure>,
    /// Merged remediation recommendations across the whole scope
    pub recommendations: Vec<MergedRecommendation>,
    /// Engine bookkeeping
    pub metadata: AssessmentMetadata,
}

impl AssessmentSummary {
    /// Summarize a completed flat batch
    pub fn from_images(
        images: Vec<ImageAssessment>,
        failures: Vec<ImageFailure>,
        metadata: AssessmentMetadata,
    ) -> Self {
        Self::summarize(AssessmentScope::Flat(images), failures, metadata)
    }

    /// Summarize an area-grouped assessment
    pub fn from_areas(
        areas: Vec<AreaAssessment>,
        failures: Vec<ImageFailure>,
        metadata: AssessmentMetadata,
    ) -> Self {
        Self::summarize(AssessmentScope::Areas(areas), failures, metadata)
    }

    fn summarize(
        scope: AssessmentScope,
        failures: Vec<ImageFailure>,
        metadata: AssessmentMetadata,
    ) -> Self {
        let overall_risk = match &scope {
            AssessmentScope::Flat(images) => {
                aggregate_risks(images.iter().map(|image| image.risk))
            }
            AssessmentScope::Areas(areas) => aggregate_risks(areas.iter().map(|area| area.risk)),
        };

        let tally = tally_issues(scope.images());
        let issues: Vec<DetectedIssue> = scope
            .images()
            .flat_map(|image| image.issues.iter().copied())
            .collect();
        let clean_images = scope
            .images()
            .filter(|image| image.issues.is_empty())
            .count();
        let recommendations = merge_recommendations(&issues, clean_images);

        log::debug!(
            "summary: {} image(s), overall {:?}, {} issue(s), {} recommendation(s)",
            scope.image_count(),
            overall_risk,
            tally.total,
            recommendations.len()
        );

        Self {
            overall_risk,
            total_issue_count: tally.total,
            per_type_counts: tally.per_type,
            scope,
            failures,
            recommendations,
            metadata,
        }
    }
}
