//! Terminal report for a kernel run.
//!
//! The layout is fixed so the numbers can be copied straight into shader source:
//!
//! 1. raw coefficients
//! 2. half-kernel weights (center outward)
//! 3. half-kernel offsets
//! 4. `## Linear interpolation ##`
//! 5. interpolated weights
//! 6. interpolated offsets
//! 7. summary line

use std::fmt::Debug;

use crate::domain::KernelRun;

pub const LINEAR_HEADER: &str = "## Linear interpolation ##";

/// Format the full seven-line report, newline terminated.
pub fn format_report(run: &KernelRun) -> String {
    let mut out = String::new();

    out.push_str(&fmt_list(&run.gaussian.coefficients));
    out.push('\n');
    out.push_str(&fmt_list(&run.half.weights));
    out.push('\n');
    out.push_str(&fmt_list(&run.half.offsets));
    out.push('\n');

    out.push_str(LINEAR_HEADER);
    out.push('\n');
    out.push_str(&fmt_list(&run.linear.weights));
    out.push('\n');
    out.push_str(&fmt_list(&run.linear.offsets));
    out.push('\n');

    out.push_str(&format_summary(run));
    out.push('\n');

    out
}

/// `## Gaussian with NxN kernel -> M samples`
pub fn format_summary(run: &KernelRun) -> String {
    let n = run.full_len();
    format!("## Gaussian with {n}x{n} kernel -> {} samples", run.sample_count())
}

/// Bracketed, comma separated list; floats use shortest round-trip form.
fn fmt_list<T: Debug>(values: &[T]) -> String {
    format!("{values:?}")
}
