//! Error types for the damage assessment engine

use thiserror::Error;

/// Result type alias for assessment operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

/// Errors that can occur while assessing photographs
///
/// `Decode` and `Inference` are recovered at single-image granularity: a
/// failing photo is excluded from the batch aggregate and reported as a
/// per-image note. Only `EmptyBatch` surfaces as an end-to-end failure.
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// The input bytes could not be decoded into a bitmap
    /// (corrupt file, unsupported format, zero-byte input)
    #[error("image could not be decoded: {0}")]
    Decode(#[source] image::ImageError),

    /// The classifier adapter reported a failure
    #[error("classifier inference failed: {0}")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Every image in the batch failed, so no summary can be produced
    #[error("no image in the batch could be analyzed ({failed} failed, {skipped} skipped)")]
    EmptyBatch {
        /// Images that failed to decode or classify
        failed: usize,
        /// Images skipped due to cancellation
        skipped: usize,
    },
}
