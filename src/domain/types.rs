//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the kernel is built
//! - exported to JSON/CSV
//! - reloaded later for plotting

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::kernel::KernelError;

/// Row of Pascal's triangle used when no index is given (33 taps).
pub const DEFAULT_INDEX: u32 = 32;

/// Validated kernel parameters.
///
/// `index` selects row `n` of Pascal's triangle (`n + 1` taps). `omit_edges` drops that
/// many taps from each end before normalization; for LDR targets the outermost taps
/// contribute almost nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    pub index: u32,
    pub omit_edges: u32,
}

impl KernelSpec {
    /// Validate parameters up front so later passes never see an empty or centerless kernel.
    pub fn new(index: u32, omit_edges: u32) -> Result<Self, KernelError> {
        if u64::from(omit_edges) * 2 > u64::from(index) {
            return Err(KernelError::InvalidParameter(format!(
                "omit_edges={omit_edges} leaves no taps for index={index} (need 2*omit_edges <= index)"
            )));
        }

        let spec = Self { index, omit_edges };
        let taps = spec.retained_taps();
        if taps % 2 == 0 {
            return Err(KernelError::InvalidKernelSize { len: taps });
        }
        Ok(spec)
    }

    /// Number of taps left after dropping `omit_edges` from both ends.
    pub fn retained_taps(&self) -> usize {
        (self.index - 2 * self.omit_edges) as usize + 1
    }
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
            omit_edges: 0,
        }
    }
}

/// Raw coefficients and their normalized weights, one entry per retained tap.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianWeights {
    pub coefficients: Vec<u128>,
    pub weights: Vec<f64>,
}

/// Center-outward half of a symmetric kernel. `offsets[i] == i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalfKernel {
    pub weights: Vec<f64>,
    pub offsets: Vec<u32>,
}

/// Samples after pairwise merging. `weights[0]`/`offsets[0]` is the untouched center tap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearKernel {
    pub weights: Vec<f64>,
    pub offsets: Vec<f64>,
}

impl LinearKernel {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Every artifact of one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRun {
    pub spec: KernelSpec,
    pub gaussian: GaussianWeights,
    pub half: HalfKernel,
    pub linear: LinearKernel,
}

impl KernelRun {
    /// Width of the full kernel (`N` in "NxN kernel").
    pub fn full_len(&self) -> usize {
        self.gaussian.weights.len()
    }

    /// Number of bilinear fetches per pass after merging.
    pub fn sample_count(&self) -> usize {
        self.linear.len()
    }
}

/// Target shading language for emitted constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShaderLang {
    Glsl,
    Wgsl,
}

/// Portable JSON representation of a kernel run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub index: u32,
    pub omit_edges: u32,
    pub coefficients: Vec<u128>,
    pub weights: Vec<f64>,
    pub half: HalfKernel,
    pub linear: LinearKernel,
}
