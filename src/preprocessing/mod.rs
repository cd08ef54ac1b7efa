//! Image preprocessing modules
//!
//! This module contains utilities for preparing photographs for
//! classification:
//! - Decoding raw bytes into a bitmap
//! - Resizing to the fixed square model resolution
//! - Channel normalization to [0, 1]

pub mod decode;
pub mod tensor;

pub use decode::decode_image;
pub use tensor::{to_tensor, ImageTensor};

use crate::error::Result;

/// Decode raw photo bytes and produce the classifier input tensor
///
/// Deterministic: identical bytes and resolution always produce an
/// identical tensor.
///
/// # Errors
///
/// Returns `AssessmentError::Decode` if the bytes cannot be decoded into a
/// bitmap.
pub fn prepare(bytes: &[u8], resolution: u32) -> Result<ImageTensor> {
    let image = decode::decode_image(bytes)?;
    Ok(tensor::to_tensor(&image, resolution))
}
