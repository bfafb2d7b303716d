use super::normalization::quantize_to_u8;
use crate::error::ConvertError;
use crate::types::{FloatTensor, ValueRange};
use image::{DynamicImage, ImageBuffer, RgbImage};

/// Pack a planar 3-channel tensor into an interleaved RGB image
///
/// A single range is applied to all three planes: normalization is global
/// over the whole tensor, never per-channel. Plane 0 becomes R, plane 1 G,
/// plane 2 B.
pub fn convert_rgb(tensor: &FloatTensor, range: ValueRange) -> Result<DynamicImage, ConvertError> {
    let shape = tensor.shape;
    let pixel_count = shape.pixel_count();
    let span = range.span();

    let r_plane = tensor.channel(0);
    let g_plane = tensor.channel(1);
    let b_plane = tensor.channel(2);

    // (channel, row, col) -> (row, col, channel)
    let mut pixels = Vec::with_capacity(pixel_count * 3);
    for i in 0..pixel_count {
        pixels.push(quantize_to_u8(r_plane[i], range.min, span));
        pixels.push(quantize_to_u8(g_plane[i], range.min, span));
        pixels.push(quantize_to_u8(b_plane[i], range.min, span));
    }

    let rgb_image: RgbImage = ImageBuffer::from_raw(shape.cols, shape.rows, pixels)
        .ok_or(ConvertError::ImageLayout { shape })?;

    Ok(DynamicImage::ImageRgb8(rgb_image))
}
