//! Classifier input tensor construction
//!
//! The classifier expects a fixed-shape square RGB input with channel
//! values in [0, 1]. This module resizes a decoded bitmap to that shape and
//! normalizes the 8-bit channel values.

use image::imageops::FilterType;
use image::DynamicImage;

/// Scale factor mapping 8-bit channel values into [0, 1]
const CHANNEL_SCALE: f32 = 1.0 / 255.0;

/// Fixed-shape normalized classifier input
///
/// Row-major RGB float buffer: the value of channel `c` at pixel `(x, y)`
/// lives at `data()[(y * resolution + x) as usize * 3 + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    resolution: u32,
    data: Vec<f32>,
}

impl ImageTensor {
    /// Side length of the square input, in pixels
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Normalized channel values, row-major RGB
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Total number of float values (`resolution * resolution * 3`)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-resolution tensor
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Resize a bitmap to the square model resolution and normalize channels
///
/// Resizing ignores the source aspect ratio: the classifier was trained on
/// squashed square inputs, so the tensor must match. Deterministic for
/// identical input pixels and resolution.
///
/// # Arguments
///
/// * `image` - Decoded source bitmap
/// * `resolution` - Target side length in pixels
pub fn to_tensor(image: &DynamicImage, resolution: u32) -> ImageTensor {
    log::debug!(
        "Resizing {}x{} image to {}x{} tensor",
        image.width(),
        image.height(),
        resolution,
        resolution
    );

    let resized = image.resize_exact(resolution, resolution, FilterType::Triangle);
    let data = resized
        .to_rgb8()
        .into_raw()
        .into_iter()
        .map(|value| f32::from(value) * CHANNEL_SCALE)
        .collect();

    ImageTensor { resolution, data }
}
