//! Normalized binomial weights.
//!
//! Row `n` of Pascal's triangle divided by its sum approaches a sampled Gaussian with
//! variance `n / 4` as `n` grows, and is exactly symmetric for every `n`.

use tracing::debug;

use crate::domain::GaussianWeights;
use crate::kernel::KernelError;
use crate::math::{binomial, checked_sum};

/// Build normalized weights for row `index`, dropping `omit_edges` taps at each end.
///
/// Requires `2 * omit_edges <= index`; otherwise nothing is retained and normalization
/// would divide by zero. The exact sum is `2^index` minus the dropped edges, so with
/// `omit_edges == 0` the largest usable index is 127.
pub fn gaussian_weights(index: u32, omit_edges: u32) -> Result<GaussianWeights, KernelError> {
    if u64::from(omit_edges) * 2 > u64::from(index) {
        return Err(KernelError::InvalidParameter(format!(
            "omit_edges={omit_edges} leaves no taps for index={index}"
        )));
    }

    let last = index - omit_edges;
    let coefficients = (omit_edges..=last)
        .map(|k| binomial(index, k))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(index, omit_edges, ?coefficients, "binomial coefficients");

    let sum = checked_sum(&coefficients).ok_or(KernelError::WeightSumOverflow { index, omit_edges })?;
    let total = sum as f64;
    let weights = coefficients.iter().map(|&c| c as f64 / total).collect();

    Ok(GaussianWeights {
        coefficients,
        weights,
    })
}
