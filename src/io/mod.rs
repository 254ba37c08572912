//! Input/output helpers.
//!
//! - kernel JSON read/write (`kernel`)
//! - per-tap CSV export (`export`)

pub mod export;
pub mod kernel;

pub use export::*;
pub use kernel::*;
