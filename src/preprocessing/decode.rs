//! Image decoding using the `image` crate

use image::DynamicImage;

use crate::error::{AssessmentError, Result};

/// Decode raw bytes into a bitmap
///
/// The format is sniffed from the content, so the caller does not need to
/// know whether the photo arrived as JPEG, PNG, or anything else the
/// `image` crate handles.
///
/// # Arguments
///
/// * `bytes` - Raw encoded image bytes
///
/// # Errors
///
/// Returns `AssessmentError::Decode` if the bytes are empty, truncated, or
/// in an unsupported format.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    log::debug!("Decoding image ({} bytes)", bytes.len());
    image::load_from_memory(bytes).map_err(AssessmentError::Decode)
}
