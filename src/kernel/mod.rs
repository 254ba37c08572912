//! Binomial blur kernel generation.
//!
//! The kernel is built in three passes, each in its own module:
//!
//! - `gaussian`: binomial coefficients for one row of Pascal's triangle, normalized to unit sum
//! - `half`: the center-outward half of the symmetric kernel
//! - `linear`: adjacent taps merged pairwise so one bilinear fetch reads two texels

use thiserror::Error;

pub mod gaussian;
pub mod half;
pub mod linear;

pub use gaussian::*;
pub use half::*;
pub use linear::*;

/// Errors produced while building a kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("kernel of {len} taps has no center tap (length must be odd)")]
    InvalidKernelSize { len: usize },
    #[error("binomial coefficient C({n}, {k}) does not fit in 128 bits")]
    CoefficientOverflow { n: u32, k: u32 },
    #[error("sum of retained coefficients for index={index}, omit_edges={omit_edges} does not fit in 128 bits")]
    WeightSumOverflow { index: u32, omit_edges: u32 },
}
