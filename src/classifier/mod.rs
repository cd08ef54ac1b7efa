//! Classifier adapter boundary
//!
//! The model itself is out of scope for this engine: anything that can
//! turn a prepared image tensor into six ordered confidence scores can
//! drive an assessment. The engine assumes (and does not re-verify) that
//! identical tensors produce identical scores.

pub mod pool;
pub mod vector;

pub use pool::{ClassifierPool, PooledClassifier};
pub use vector::{ConfidenceVector, CLASS_COUNT};

use crate::error::{AssessmentError, Result};
use crate::preprocessing::ImageTensor;

/// Error type adapters report: whatever the underlying model produced
pub type AdapterError = Box<dyn std::error::Error + Send + Sync>;

/// An opaque image classifier
///
/// One instance is never used from two threads at once; batch assessment
/// enforces exclusive access through [`ClassifierPool`]. `infer` takes
/// `&mut self` because model runtimes are commonly stateful.
pub trait Classifier: Send {
    /// Run inference, returning the ordered per-class scores
    fn infer(&mut self, tensor: &ImageTensor) -> std::result::Result<Vec<f32>, AdapterError>;
}

/// Invoke the adapter and fold its scores into a [`ConfidenceVector`]
///
/// Any adapter failure surfaces as `AssessmentError::Inference`. A score
/// slice shorter than [`CLASS_COUNT`] is padded with zeros rather than
/// rejected.
pub fn run_inference<C>(classifier: &mut C, tensor: &ImageTensor) -> Result<ConfidenceVector>
where
    C: Classifier + ?Sized,
{
    let scores = classifier
        .infer(tensor)
        .map_err(AssessmentError::Inference)?;
    Ok(ConfidenceVector::from_scores(&scores))
}

/// Classifier returning the same scores for every tensor
///
/// A stand-in for demos and tests; real deployments implement
/// [`Classifier`] over their model runtime.
#[derive(Debug, Clone)]
pub struct UniformClassifier {
    scores: Vec<f32>,
}

impl UniformClassifier {
    /// Create a classifier that always reports `scores`
    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }
}

impl Classifier for UniformClassifier {
    fn infer(&mut self, _tensor: &ImageTensor) -> std::result::Result<Vec<f32>, AdapterError> {
        Ok(self.scores.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::to_tensor;

    fn test_tensor() -> ImageTensor {
        let image =
            image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(4, 4, image::Rgb([0; 3])));
        to_tensor(&image, 4)
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn infer(&mut self, _tensor: &ImageTensor) -> std::result::Result<Vec<f32>, AdapterError> {
            Err("model runtime exploded".into())
        }
    }

    #[test]
    fn test_run_inference_wraps_scores() {
        let mut classifier = UniformClassifier::new(vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.1]);
        let vector = run_inference(&mut classifier, &test_tensor()).unwrap();
        assert_eq!(vector.crack_high, 0.9);
        assert_eq!(vector.plain, 0.1);
    }

    #[test]
    fn test_run_inference_surfaces_adapter_failure() {
        let result = run_inference(&mut FailingClassifier, &test_tensor());
        assert!(matches!(
            result,
            Err(crate::error::AssessmentError::Inference(_))
        ));
    }

    #[test]
    fn test_run_inference_pads_short_scores() {
        let mut classifier = UniformClassifier::new(vec![0.7]);
        let vector = run_inference(&mut classifier, &test_tensor()).unwrap();
        assert_eq!(vector.crack_high, 0.7);
        assert_eq!(vector.plain, 0.0);
    }
}
