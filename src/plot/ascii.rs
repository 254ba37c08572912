//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a kernel's falloff
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - half-kernel taps: `|` bars rising from the bottom row
//! - linear samples: `*` at (centroid offset, merged weight)

use crate::domain::{HalfKernel, KernelFile, LinearKernel};

/// Render the half kernel with its linear samples overlaid.
pub fn render_kernel_plot(half: &HalfKernel, linear: &LinearKernel, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let x_max = half
        .offsets
        .iter()
        .map(|&o| f64::from(o))
        .chain(linear.offsets.iter().copied())
        .fold(0.0, f64::max);
    let x_max = if x_max > 0.0 { x_max } else { 1.0 };

    let y_max = half
        .weights
        .iter()
        .chain(linear.weights.iter())
        .copied()
        .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let mut grid = vec![vec![' '; width]; height];

    // Bars first so samples overlay them.
    for (&w, &o) in half.weights.iter().zip(&half.offsets) {
        let x = map_x(f64::from(o), x_max, width);
        let top = map_y(w, y_max, height);
        for row in grid.iter_mut().skip(top) {
            row[x] = '|';
        }
    }

    for (&w, &o) in linear.weights.iter().zip(&linear.offsets) {
        let x = map_x(o, x_max, width);
        let y = map_y(w, y_max, height);
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: offset=[0.000, {x_max:.3}] | weight=[0.000000, {y_max:.6}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Render a plot from a saved kernel JSON file.
pub fn render_kernel_plot_from_file(kernel: &KernelFile, width: usize, height: usize) -> String {
    render_kernel_plot(&kernel.half, &kernel.linear, width, height)
}

fn map_x(offset: f64, x_max: f64, width: usize) -> usize {
    let u = (offset / x_max).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(weight: f64, y_max: f64, height: usize) -> usize {
    let u = (weight / y_max).clamp(0.0, 1.0);
    // weight=y_max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_kernel;
    use crate::domain::KernelSpec;

    #[test]
    fn plot_golden_snapshot_row_four() {
        let run = run_kernel(&KernelSpec::new(4, 0).unwrap()).unwrap();
        let txt = render_kernel_plot(&run.half, &run.linear, 10, 5);
        let expected = concat!(
            "Plot: offset=[0.000, 2.000] | weight=[0.000000, 0.375000]\n",
            "*         \n",
            "|    *    \n",
            "|    |    \n",
            "|    |   |\n",
            "|    |   |\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn plot_has_requested_dimensions() {
        let run = run_kernel(&KernelSpec::default()).unwrap();
        let txt = render_kernel_plot(&run.half, &run.linear, 40, 12);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
        assert_eq!(txt.matches('*').count(), 9);
    }

    #[test]
    fn center_only_kernel_does_not_divide_by_zero() {
        let half = HalfKernel {
            weights: vec![1.0],
            offsets: vec![0],
        };
        let linear = LinearKernel {
            weights: vec![1.0],
            offsets: vec![0.0],
        };
        let txt = render_kernel_plot(&half, &linear, 1, 1);
        assert!(txt.starts_with("Plot: offset=[0.000, 1.000]"));
        assert_eq!(txt.lines().nth(1), Some("*         "));
    }
}
