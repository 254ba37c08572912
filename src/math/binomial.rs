//! Exact binomial coefficients.
//!
//! Factorial-based evaluation in floating point loses integer precision around
//! `32! ≈ 2.6e35`, so coefficients are built with the multiplicative form instead:
//!
//! - `C(n, 0) = 1`
//! - `C(n, i + 1) = C(n, i) * (n - i) / (i + 1)`
//!
//! The factor `(i + 1)` is split by `g = gcd(C(n, i), i + 1)` before multiplying, so
//! `(n - i)` is divisible by `(i + 1) / g` and the only product formed is the next
//! coefficient itself. Overflow is reported only when `C(n, k)` does not fit in `u128`
//! (rows from `n = 132` at the center).

use crate::kernel::KernelError;

/// Compute `C(n, k)` exactly.
pub fn binomial(n: u32, k: u32) -> Result<u128, KernelError> {
    if k > n {
        return Err(KernelError::InvalidParameter(format!(
            "binomial coefficient requires k <= n (got n={n}, k={k})"
        )));
    }

    // C(n, k) == C(n, n - k); walk the shorter side.
    let steps = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..steps {
        let divisor = u128::from(i + 1);
        let g = gcd(c, divisor);
        let factor = u128::from(n - i) / (divisor / g);
        c = (c / g)
            .checked_mul(factor)
            .ok_or(KernelError::CoefficientOverflow { n, k })?;
    }
    Ok(c)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Sum a sequence of coefficients, failing instead of wrapping.
pub fn checked_sum(values: &[u128]) -> Option<u128> {
    values.iter().try_fold(0u128, |acc, &v| acc.checked_add(v))
}
