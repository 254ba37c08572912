//! Export per-tap results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or build scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::KernelRun;
use crate::error::{AppError, EXIT_IO};

/// Write half-kernel taps and linear samples to a CSV file.
pub fn write_taps_csv(path: &Path, run: &KernelRun) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_taps(&mut out, run).map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV: {e}")))?;
    out.flush()
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export CSV: {e}")))?;
    Ok(())
}

fn write_taps<W: Write>(out: &mut W, run: &KernelRun) -> std::io::Result<()> {
    writeln!(out, "set,position,offset,weight")?;

    for (pos, (w, o)) in run.half.weights.iter().zip(&run.half.offsets).enumerate() {
        writeln!(out, "half,{pos},{o},{w:?}")?;
    }
    for (pos, (w, o)) in run.linear.weights.iter().zip(&run.linear.offsets).enumerate() {
        writeln!(out, "linear,{pos},{o:?},{w:?}")?;
    }
    Ok(())
}
