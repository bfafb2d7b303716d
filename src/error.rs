//! Error type covering every stage of the conversion pipeline

use crate::types::TensorShape;
use std::path::PathBuf;
use thiserror::Error;

/// Conversion failure, one variant per pipeline stage
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file missing or unreadable
    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input payload shorter than one full tensor
    #[error(
        "input too short: need {expected} bytes for {shape} fp32 samples, got {actual}"
    )]
    InputTooShort {
        expected: usize,
        actual: usize,
        shape: TensorShape,
    },

    /// All samples equal; min-max normalization would divide by zero
    #[error("input is constant-valued (all samples = {value}); cannot min-max normalize a zero range")]
    ConstantInput { value: f32 },

    /// Tensor shape cannot be packed into an RGB image
    #[error("tensor shape {shape} cannot be packed as RGB (expected 3 channels)")]
    ImageLayout { shape: TensorShape },

    /// Image encoding failed, or the output extension names no known format
    #[error("failed to encode image for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output destination unwritable
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image written but the terminal preview failed
    #[error("failed to display image preview: {0}")]
    PreviewFailed(String),
}
