//! Shared kernel pipeline used by every subcommand.
//!
//! binomial weights -> half kernel -> linear samples
//!
//! Front-ends (report, shader, exports) only deal with presentation.

use tracing::info;

use crate::domain::{KernelRun, KernelSpec};
use crate::kernel::{KernelError, gaussian_weights, half_kernel, linear_interpolate};

/// Run all kernel passes for an already validated spec.
pub fn run_kernel(spec: &KernelSpec) -> Result<KernelRun, KernelError> {
    let gaussian = gaussian_weights(spec.index, spec.omit_edges)?;
    let half = half_kernel(&gaussian.weights)?;
    let linear = linear_interpolate(&half)?;

    info!(
        index = spec.index,
        omit_edges = spec.omit_edges,
        taps = gaussian.weights.len(),
        samples = linear.len(),
        "kernel built"
    );

    Ok(KernelRun {
        spec: *spec,
        gaussian,
        half,
        linear,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn default_run_shapes() {
        let run = run_kernel(&KernelSpec::default()).unwrap();
        assert_eq!(run.full_len(), 33);
        assert_eq!(run.half.weights.len(), 17);
        assert_eq!(run.sample_count(), 9);
        assert_eq!(run.linear.weights[0], 601_080_390.0 / 2f64.powi(32));
    }

    #[test]
    fn row_126_builds() {
        let run = run_kernel(&KernelSpec::new(126, 0).unwrap()).unwrap();
        assert_eq!(run.full_len(), 127);
        assert_eq!(run.half.weights.len(), 64);
        // center + 31 pairs + unpaired outer tap
        assert_eq!(run.sample_count(), 33);
    }

    #[test]
    fn linear_mass_matches_half_mass() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let index = 2 * rng.gen_range(0..=50u32);
            let omit = rng.gen_range(0..=index / 2);
            let run = run_kernel(&KernelSpec::new(index, omit).unwrap()).unwrap();

            let half_mass: f64 = run.half.weights.iter().sum();
            let linear_mass: f64 = run.linear.weights.iter().sum();
            assert!(
                (half_mass - linear_mass).abs() < 1e-12,
                "index={index} omit={omit}: {half_mass} vs {linear_mass}"
            );

            // Full kernel mass = 2 * half mass - center.
            let full = 2.0 * half_mass - run.half.weights[0];
            assert!((full - 1.0).abs() < 1e-9);
        }
    }
}
