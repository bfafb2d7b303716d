use crate::types::ValueRange;

/// Global min/max over all samples, NaN operands skipped
#[inline]
#[must_use]
pub fn find_min_max(values: &[f32]) -> ValueRange {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        });
    ValueRange::new(min, max)
}

/// Map a sample into [0, 255] and truncate toward zero
///
/// Truncation (not rounding) is deliberate; it keeps output byte-identical
/// with the established converter behavior.
#[inline]
#[must_use]
pub fn quantize_to_u8(value: f32, min: f32, range: f32) -> u8 {
    let normalized = (value - min) / range;
    (normalized * 255.0_f32) as u8
}
