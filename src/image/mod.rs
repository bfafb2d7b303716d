//! Tensor normalization and image conversion
//!
//! Converts a planar fp32 tensor into an interleaved 8-bit RGB image:
//! one global min/max scan, affine normalization to [0, 255], truncating
//! quantization, then a planar-to-packed transpose.

mod normalization;
mod rgb;
mod save;

pub use normalization::{find_min_max, quantize_to_u8};
pub use rgb::convert_rgb;
pub use save::save_image;

use crate::error::ConvertError;
use crate::types::FloatTensor;
use image::DynamicImage;

/// Convert a decoded tensor to an RGB image
///
/// # Errors
///
/// Returns [`ConvertError::ImageLayout`] for a non-3-channel tensor and
/// [`ConvertError::ConstantInput`] when the global value range is empty,
/// which would make the normalization denominator zero.
pub fn convert_to_image(tensor: &FloatTensor) -> Result<DynamicImage, ConvertError> {
    if tensor.shape.channels != 3 {
        return Err(ConvertError::ImageLayout {
            shape: tensor.shape,
        });
    }

    let range = find_min_max(&tensor.samples);
    if range.is_degenerate() {
        return Err(ConvertError::ConstantInput { value: range.min });
    }

    convert_rgb(tensor, range)
}
