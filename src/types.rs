//! Domain-specific types for raw fp32 tensor payloads

use std::fmt;

/// Shape of the decoded tensor: planes of rows x cols values,
/// channel-major (channel, row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShape {
    pub channels: u32,
    pub rows: u32,
    pub cols: u32,
}

/// The fixed input layout: 3 planes of 128x128 fp32 samples
pub const INPUT_SHAPE: TensorShape = TensorShape {
    channels: 3,
    rows: 128,
    cols: 128,
};

impl TensorShape {
    #[must_use]
    pub const fn new(channels: u32, rows: u32, cols: u32) -> Self {
        Self {
            channels,
            rows,
            cols,
        }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.channels as usize * self.pixel_count()
    }

    /// Number of payload bytes consumed for this shape (4 bytes per sample)
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.sample_count() * size_of::<f32>()
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.channels > 0 && self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{channels}x{rows}x{cols}",
            channels = self.channels,
            rows = self.rows,
            cols = self.cols
        )
    }
}

/// Decoded fp32 samples in planar (channel, row, column) order
#[derive(Debug, Clone, PartialEq)]
pub struct FloatTensor {
    pub shape: TensorShape,
    pub samples: Vec<f32>,
}

impl FloatTensor {
    #[must_use]
    pub fn new(shape: TensorShape, samples: Vec<f32>) -> Self {
        debug_assert_eq!(samples.len(), shape.sample_count());
        Self { shape, samples }
    }

    /// One plane of rows x cols values, row-major
    #[inline]
    #[must_use]
    pub fn channel(&self, index: u32) -> &[f32] {
        let len = self.shape.pixel_count();
        let start = index as usize * len;
        &self.samples[start..start + len]
    }
}

/// Global minimum and maximum over a sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// True when the range cannot be used as a normalization denominator
    /// (constant input, or no finite samples at all)
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{min} .. {max}", min = self.min, max = self.max)
    }
}
