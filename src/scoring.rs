use anyhow::Result;

use crate::error::AlignmentError;

/// Sum of absolute byte differences between two equal-length buffers.
/// Lower is more similar. Unweighted and unnormalized; the accumulator is
/// 64-bit so even very large frames stay far from overflow.
pub fn sum_absolute_difference(a: &[u8], b: &[u8]) -> Result<u64> {
    if a.len() != b.len() {
        return Err(AlignmentError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        }
        .into());
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.abs_diff(y) as u64)
        .sum())
}
