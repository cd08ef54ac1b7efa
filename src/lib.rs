//! # Facade Assess
//!
//! A damage assessment engine for building-surface photographs, turning
//! raw classifier confidence scores into actionable structural findings.
//!
//! ## Features
//!
//! - **Multi-label detection**: independent per-class thresholding over
//!   the classifier's confidence vector
//! - **Risk classification**: fixed-priority decision table mapping a
//!   photo's issues to a single verdict
//! - **Worst-wins aggregation**: image → area → assessment risk folds and
//!   per-type issue tallies
//! - **Merged recommendations**: deduplicated remediation entries with
//!   occurrence counts and averaged confidence
//!
//! ## Quick Start
//!
//! ```no_run
//! use facade_assess::{assess_image, AnalysisConfig, UniformClassifier};
//!
//! // Any `Classifier` impl works; this stand-in always reports algae.
//! let mut classifier = UniformClassifier::new(vec![0.0, 0.0, 0.0, 0.0, 0.8, 0.1]);
//!
//! let photo = std::fs::read("south-wall.jpg")?;
//! let assessment = assess_image("south-wall", &photo, &mut classifier, &AnalysisConfig::default())?;
//!
//! println!("risk: {} ({} issue(s))", assessment.risk, assessment.issues.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The assessment pipeline follows this flow:
//!
//! ```text
//! Photo bytes → Preprocessing → Classifier → Detection → Risk → Aggregation → Recommendations
//! ```
//!
//! Preprocessing and classification can fail, scoped to a single photo;
//! everything downstream is a pure total function over typed input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod batch;
pub mod classifier;
pub mod config;
pub mod detection;
pub mod error;
pub mod preprocessing;
pub mod recommendation;

// Re-export main types
pub use analysis::aggregate::{aggregate_risks, tally_issues, IssueTally};
pub use analysis::result::{
    AreaAssessment, AssessmentMetadata, AssessmentScope, AssessmentSummary, FailureKind,
    ImageAssessment, ImageFailure,
};
pub use analysis::risk::{classify_risk, RiskRating};
pub use analysis::session::{AssessmentSession, SessionState, TransitionError};
pub use batch::{assess_batch, default_workers, CancelToken, ImageInput};
pub use classifier::{Classifier, ClassifierPool, ConfidenceVector, UniformClassifier};
pub use config::AnalysisConfig;
pub use detection::{detect_issues, DamageLevel, DamageType, DetectedIssue};
pub use error::{AssessmentError, Result};
pub use recommendation::{merge_recommendations, MergedRecommendation, SeverityTier};

/// Assess a single photograph end to end
///
/// Runs the full per-photo pipeline: decode and resize the photo, invoke
/// the classifier, detect issues above the detection threshold, and
/// classify image-level risk.
///
/// # Arguments
///
/// * `image_ref` - Caller-side reference carried into the result
/// * `bytes` - Raw encoded photo bytes
/// * `classifier` - Classifier adapter to run inference with
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// An [`ImageAssessment`] with the classifier read, detected issues
/// (descending confidence) and the risk verdict.
///
/// # Errors
///
/// Returns `AssessmentError::Decode` if the bytes cannot be decoded, or
/// `AssessmentError::Inference` if the classifier adapter fails. Both are
/// scoped to this photo; batch callers treat them as per-image notes.
///
/// # Example
///
/// ```no_run
/// use facade_assess::{assess_image, AnalysisConfig, UniformClassifier};
///
/// let mut classifier = UniformClassifier::new(vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// let photo = std::fs::read("pillar.jpg")?;
///
/// let assessment = assess_image("pillar", &photo, &mut classifier, &AnalysisConfig::default())?;
/// assert_eq!(assessment.risk, facade_assess::RiskRating::High);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn assess_image<C>(
    image_ref: &str,
    bytes: &[u8],
    classifier: &mut C,
    config: &AnalysisConfig,
) -> Result<ImageAssessment>
where
    C: Classifier + ?Sized,
{
    log::debug!("Assessing {image_ref} ({} bytes)", bytes.len());

    let tensor = preprocessing::prepare(bytes, config.input_resolution)?;
    let scores = classifier::run_inference(classifier, &tensor)?;
    let issues = detect_issues(&scores, config.detection_threshold);
    let risk = classify_risk(&issues, scores.plain, config);

    log::debug!(
        "{image_ref}: {} issue(s), plain {:.2}, risk {:?}",
        issues.len(),
        scores.plain,
        risk
    );

    Ok(ImageAssessment {
        image_ref: image_ref.to_string(),
        scores,
        issues,
        risk,
    })
}
