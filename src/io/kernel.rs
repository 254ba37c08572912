//! Read/write kernel JSON files.
//!
//! Kernel JSON is the "portable" representation of a run:
//! - parameters (index, omit_edges) and generation time
//! - raw coefficients and the full normalized weights
//! - half kernel and linear samples, ready for plotting or code generation
//!
//! The schema is defined by `domain::KernelFile`.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use crate::domain::{KernelFile, KernelRun};
use crate::error::{AppError, EXIT_INVALID_DATA, EXIT_IO};

pub const TOOL_NAME: &str = "blur-weights";

impl KernelFile {
    pub fn from_run(run: &KernelRun, generated_at: DateTime<Local>) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_at,
            index: run.spec.index,
            omit_edges: run.spec.omit_edges,
            coefficients: run.gaussian.coefficients.clone(),
            weights: run.gaussian.weights.clone(),
            half: run.half.clone(),
            linear: run.linear.clone(),
        }
    }

    /// Check that paired sequences line up before anything downstream indexes them.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.len() != self.weights.len() {
            return Err(format!(
                "{} coefficients but {} weights",
                self.coefficients.len(),
                self.weights.len()
            ));
        }
        if self.half.weights.len() != self.half.offsets.len() {
            return Err(format!(
                "half kernel has {} weights but {} offsets",
                self.half.weights.len(),
                self.half.offsets.len()
            ));
        }
        if self.linear.weights.len() != self.linear.offsets.len() {
            return Err(format!(
                "linear samples have {} weights but {} offsets",
                self.linear.weights.len(),
                self.linear.offsets.len()
            ));
        }
        if self.half.weights.is_empty() || self.linear.is_empty() {
            return Err("kernel has no samples".to_string());
        }
        Ok(())
    }
}

/// Write a kernel JSON file.
pub fn write_kernel_json(path: &Path, run: &KernelRun) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to create kernel JSON '{}': {e}", path.display())))?;

    let kernel = KernelFile::from_run(run, Local::now());
    serde_json::to_writer_pretty(file, &kernel)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write kernel JSON: {e}")))?;

    info!(path = %path.display(), "wrote kernel JSON");
    Ok(())
}

/// Read and validate a kernel JSON file.
pub fn read_kernel_json(path: &Path) -> Result<KernelFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to open kernel JSON '{}': {e}", path.display())))?;
    let kernel: KernelFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_INVALID_DATA, format!("Invalid kernel JSON: {e}")))?;
    kernel
        .validate()
        .map_err(|e| AppError::new(EXIT_INVALID_DATA, format!("Invalid kernel JSON '{}': {e}", path.display())))?;
    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_kernel;
    use crate::domain::KernelSpec;

    #[test]
    fn kernel_json_round_trip() {
        let run = run_kernel(&KernelSpec::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernel.json");

        write_kernel_json(&path, &run).unwrap();
        let file = read_kernel_json(&path).unwrap();

        assert_eq!(file.tool, TOOL_NAME);
        assert_eq!(file.index, 32);
        assert_eq!(file.omit_edges, 0);
        assert_eq!(file.coefficients, run.gaussian.coefficients);
        assert_eq!(file.weights, run.gaussian.weights);
        assert_eq!(file.half, run.half);
        assert_eq!(file.linear, run.linear);
    }

    #[test]
    fn mismatched_sequences_are_rejected() {
        let run = run_kernel(&KernelSpec::new(4, 0).unwrap()).unwrap();
        let mut file = KernelFile::from_run(&run, Local::now());
        file.linear.offsets.pop();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mismatch.json");
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();
        let err = read_kernel_json(&path).unwrap_err();

        assert_eq!(err.exit_code(), EXIT_INVALID_DATA);
        assert!(err.to_string().contains("linear samples"), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_kernel_json(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
    }
}
