//! Atomic image persistence
//!
//! The encoded image is written to a temporary file in the destination
//! directory and renamed over the final path, so a failed conversion never
//! leaves a partially written image behind.

use crate::error::ConvertError;
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use tempfile::NamedTempFile;

/// Encode `image` in the format named by `path`'s extension and persist it
///
/// # Errors
///
/// Returns [`ConvertError::Encode`] for an unrecognized extension or an
/// encoder failure, and [`ConvertError::OutputWrite`] when the destination
/// directory is unwritable or the final rename fails.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), ConvertError> {
    let format = ImageFormat::from_path(path).map_err(|source| ConvertError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    image
        .write_to(&mut tmp, format)
        .map_err(|source| ConvertError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    tmp.persist(path).map_err(|e| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}
