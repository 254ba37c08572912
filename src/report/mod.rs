//! Reporting utilities: formatted terminal output.
//!
//! Formatting lives here so the kernel math stays free of presentation concerns and
//! output changes are localized (the golden tests pin the exact text).

pub mod format;

pub use format::*;
