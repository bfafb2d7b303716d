//! Raw fp32 payload loading and decoding
//!
//! The input format is a headerless binary dump: at least `shape.byte_len()`
//! bytes, of which the first `shape.sample_count()` little-endian IEEE-754
//! f32 values are consumed. Anything past that is ignored. Byte order is
//! part of the contract; the data is never reinterpreted in native order.

use crate::error::ConvertError;
use crate::types::{FloatTensor, TensorShape};
use std::fs;
use std::path::Path;

/// Read the entire input file into memory
pub fn load_raw_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the leading bytes of `buffer` into a planar tensor
///
/// Channel 0 is filled first, then channel 1, then channel 2, each
/// row-major. Trailing bytes beyond the tensor payload are discarded.
///
/// # Errors
///
/// Returns [`ConvertError::InputTooShort`] when the buffer holds fewer
/// than `shape.byte_len()` bytes.
pub fn decode_tensor(buffer: &[u8], shape: TensorShape) -> Result<FloatTensor, ConvertError> {
    let expected = shape.byte_len();

    if buffer.len() < expected {
        return Err(ConvertError::InputTooShort {
            expected,
            actual: buffer.len(),
            shape,
        });
    }

    let samples: Vec<f32> = buffer[..expected]
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok(FloatTensor::new(shape, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn encode(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_decode_little_endian_samples() {
        let shape = TensorShape::new(1, 1, 4);
        let buffer = encode(&[0.0, -1.0, 1.5, 255.0]);

        let tensor = decode_tensor(&buffer, shape).expect("decode should succeed");
        assert_eq!(tensor.samples, vec![0.0, -1.0, 1.5, 255.0]);
        assert_eq!(tensor.shape, shape);
    }

    #[test]
    fn test_decode_known_byte_pattern() {
        // 1.0f32 is 00 00 80 3f little-endian
        let shape = TensorShape::new(1, 1, 1);
        let tensor = decode_tensor(&[0x00, 0x00, 0x80, 0x3f], shape).unwrap();
        assert_eq!(tensor.samples, vec![1.0]);
    }

    #[test]
    fn test_trailing_bytes_are_discarded() {
        let shape = TensorShape::new(1, 2, 2);
        let exact = encode(&[1.0, 2.0, 3.0, 4.0]);

        let mut padded = exact.clone();
        padded.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef, 0x01]);

        let from_exact = decode_tensor(&exact, shape).unwrap();
        let from_padded = decode_tensor(&padded, shape).unwrap();
        assert_eq!(from_exact, from_padded);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let shape = TensorShape::new(1, 2, 2);
        let buffer = encode(&[1.0, 2.0, 3.0]); // one sample missing

        let result = decode_tensor(&buffer, shape);
        assert_matches!(
            result,
            Err(ConvertError::InputTooShort {
                expected: 16,
                actual: 12,
                ..
            })
        );
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let result = decode_tensor(&[], TensorShape::new(3, 128, 128));
        assert_matches!(result, Err(ConvertError::InputTooShort { expected: 196_608, actual: 0, .. }));
    }

    #[test]
    fn test_channel_planes_are_contiguous() {
        let shape = TensorShape::new(3, 1, 2);
        let buffer = encode(&[0.0, 0.1, 1.0, 1.1, 2.0, 2.1]);

        let tensor = decode_tensor(&buffer, shape).unwrap();
        assert_eq!(tensor.channel(0), &[0.0, 0.1]);
        assert_eq!(tensor.channel(1), &[1.0, 1.1]);
        assert_eq!(tensor.channel(2), &[2.0, 2.1]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = load_raw_file(Path::new("/nonexistent/input.bin"));
        assert_matches!(result, Err(ConvertError::InputRead { .. }));
    }
}
