//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - validated kernel parameters (`KernelSpec`)
//! - per-pass outputs (`GaussianWeights`, `HalfKernel`, `LinearKernel`)
//! - the combined run (`KernelRun`) and its JSON form (`KernelFile`)

pub mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelError;

    #[test]
    fn default_spec_is_row_32() {
        let spec = KernelSpec::default();
        assert_eq!(spec, KernelSpec::new(32, 0).unwrap());
        assert_eq!(spec.retained_taps(), 33);
    }

    #[test]
    fn omit_edges_may_consume_all_but_the_center() {
        let spec = KernelSpec::new(8, 4).unwrap();
        assert_eq!(spec.retained_taps(), 1);
    }

    #[test]
    fn too_many_omitted_edges_is_invalid_parameter() {
        assert!(matches!(
            KernelSpec::new(8, 5),
            Err(KernelError::InvalidParameter(_))
        ));
        assert!(matches!(
            KernelSpec::new(0, u32::MAX),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn odd_index_has_no_center_tap() {
        assert_eq!(
            KernelSpec::new(5, 1),
            Err(KernelError::InvalidKernelSize { len: 4 })
        );
    }
}
