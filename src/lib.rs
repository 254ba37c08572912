//! `blur-weights` library crate.
//!
//! The binary (`blur-weights`) is a thin wrapper around this library so that:
//!
//! - kernel math is testable without spawning processes
//! - build scripts can call the generator directly instead of parsing stdout

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod kernel;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod shader;
