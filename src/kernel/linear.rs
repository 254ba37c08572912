//! Linear sampling: merge adjacent taps so a single bilinear fetch reads both.
//!
//! Sampling at the weighted centroid of two texels with the summed weight returns
//! `w1 * t1 + w2 * t2`, which halves the number of fetches outside the center tap.

use tracing::debug;

use crate::domain::{HalfKernel, LinearKernel};
use crate::kernel::KernelError;

/// Weighted centroid of two sample positions.
pub fn interpolate_offset(o1: f64, w1: f64, o2: f64, w2: f64) -> Result<f64, KernelError> {
    let total = w1 + w2;
    if !(total.is_finite() && total > 0.0) {
        return Err(KernelError::InvalidParameter(format!(
            "cannot interpolate offsets {o1} and {o2} with weight sum {total}"
        )));
    }
    Ok((o1 * w1 + o2 * w2) / total)
}

/// Merge the taps of a half kernel pairwise.
///
/// The center tap is emitted unchanged. Taps `(1, 2)`, `(3, 4)`, ... are merged into one
/// sample each. When the number of non-center taps is odd, the outermost tap has no
/// partner and is emitted unchanged at its integer offset.
pub fn linear_interpolate(half: &HalfKernel) -> Result<LinearKernel, KernelError> {
    if half.weights.len() != half.offsets.len() {
        return Err(KernelError::InvalidParameter(format!(
            "half kernel has {} weights but {} offsets",
            half.weights.len(),
            half.offsets.len()
        )));
    }
    let (Some(&center_weight), Some(&center_offset)) = (half.weights.first(), half.offsets.first())
    else {
        return Err(KernelError::InvalidKernelSize { len: 0 });
    };

    let capacity = 1 + half.weights.len() / 2;
    let mut weights = Vec::with_capacity(capacity);
    let mut offsets = Vec::with_capacity(capacity);
    weights.push(center_weight);
    offsets.push(f64::from(center_offset));

    let outer = half.weights[1..].chunks(2).zip(half.offsets[1..].chunks(2));
    for (w, o) in outer {
        match (w, o) {
            (&[w1, w2], &[o1, o2]) => {
                weights.push(w1 + w2);
                offsets.push(interpolate_offset(f64::from(o1), w1, f64::from(o2), w2)?);
            }
            (&[w], &[o]) => {
                debug!(offset = o, weight = w, "outermost tap has no partner, kept unmerged");
                weights.push(w);
                offsets.push(f64::from(o));
            }
            _ => {
                return Err(KernelError::InvalidParameter(
                    "half kernel weights and offsets fell out of step".to_string(),
                ));
            }
        }
    }

    Ok(LinearKernel { weights, offsets })
}
