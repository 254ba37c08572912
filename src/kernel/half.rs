use crate::domain::HalfKernel;
use crate::kernel::KernelError;

/// Take the center-outward half of a symmetric kernel.
///
/// The kernel must have odd length so a center tap exists; the result starts at that
/// tap (offset 0) and runs to the outermost tap.
pub fn half_kernel(weights: &[f64]) -> Result<HalfKernel, KernelError> {
    let len = weights.len();
    if len % 2 == 0 {
        return Err(KernelError::InvalidKernelSize { len });
    }

    let weights = weights[len / 2..].to_vec();
    let offsets = (0..weights.len() as u32).collect();
    Ok(HalfKernel { weights, offsets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::gaussian_weights;

    #[test]
    fn row_32_half_has_17_taps() {
        let g = gaussian_weights(32, 0).unwrap();
        let half = half_kernel(&g.weights).unwrap();
        assert_eq!(half.weights.len(), 17);
        assert_eq!(half.offsets, (0..17).collect::<Vec<u32>>());
        assert_eq!(half.weights[0], g.weights[16]);
        assert_eq!(half.weights[16], g.weights[32]);
    }

    #[test]
    fn single_tap_kernel_is_its_own_half() {
        let half = half_kernel(&[1.0]).unwrap();
        assert_eq!(half.weights, vec![1.0]);
        assert_eq!(half.offsets, vec![0]);
    }

    #[test]
    fn even_and_empty_kernels_are_rejected() {
        assert_eq!(
            half_kernel(&[0.25, 0.25, 0.25, 0.25]),
            Err(KernelError::InvalidKernelSize { len: 4 })
        );
        assert_eq!(half_kernel(&[]), Err(KernelError::InvalidKernelSize { len: 0 }));
    }
}
