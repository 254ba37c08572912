//! Mathematical utilities: exact binomial coefficients.

pub mod binomial;

pub use binomial::*;
