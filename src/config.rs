//! Configuration parameters for damage assessment

/// Default per-class detection threshold.
///
/// A damage class is reported only when its confidence strictly exceeds
/// this value; a score exactly at the threshold is not a detection.
pub const DEFAULT_DETECTION_THRESHOLD: f32 = 0.50;

/// Default plain-surface confidence floor.
///
/// An issue-free photo whose plain score does not exceed this floor is
/// rated Low rather than None: an under-confident classifier read is
/// "worth a look", never silently clean. Tuned empirically.
pub const DEFAULT_PLAIN_CONFIDENCE_FLOOR: f32 = 0.30;

/// Default classifier input resolution (square, pixels).
pub const DEFAULT_INPUT_RESOLUTION: u32 = 224;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Detection
    /// Per-class detection threshold (default: 0.50)
    /// Strictly-greater comparison against each damage class score
    pub detection_threshold: f32,

    // Risk classification
    /// Plain-surface confidence floor (default: 0.30)
    /// Separates a confidently clean photo (None) from an ambiguous
    /// low-confidence read (Low) when no issue was detected
    pub plain_confidence_floor: f32,

    // Preprocessing
    /// Classifier input resolution in pixels, square (default: 224)
    pub input_resolution: u32,

    // Batch processing
    /// Worker threads for batch assessment (default: available cores)
    pub workers: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
            plain_confidence_floor: DEFAULT_PLAIN_CONFIDENCE_FLOOR,
            input_resolution: DEFAULT_INPUT_RESOLUTION,
            workers: None,
        }
    }
}
