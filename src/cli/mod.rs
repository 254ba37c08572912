//! Command-line parsing for the blur weight generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the kernel math.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_INDEX, ShaderLang};
use crate::shader::DEFAULT_PREFIX;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "blur-weights",
    version,
    about = "Binomial blur weights and linear-sampling offsets for separable blur shaders"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print coefficients, half-kernel weights/offsets and linear samples (default).
    Weights(WeightsArgs),
    /// Print the linear samples as GLSL or WGSL constants.
    Shader(ShaderArgs),
    /// Plot a previously exported kernel JSON.
    Plot(PlotArgs),
}

/// Kernel parameters shared by every generating subcommand.
///
/// Each flag may also be set through the environment (or a `.env` file).
#[derive(Debug, Args, Clone)]
pub struct KernelArgs {
    /// Row of Pascal's triangle to use; the kernel has index+1 taps. Must be even.
    #[arg(short = 'n', long, env = "BLUR_WEIGHTS_INDEX", default_value_t = DEFAULT_INDEX)]
    pub index: u32,

    /// Taps dropped from each end before normalization (useful for LDR targets).
    #[arg(short = 'e', long, env = "BLUR_WEIGHTS_OMIT_EDGES", default_value_t = 0)]
    pub omit_edges: u32,
}

/// Options for the `weights` report.
#[derive(Debug, Args, Clone)]
pub struct WeightsArgs {
    #[command(flatten)]
    pub kernel: KernelArgs,

    /// Render an ASCII plot of the kernel after the report.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,

    /// Export the kernel (parameters + all sequences) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Export half-kernel taps and linear samples to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

/// Options for shader constant emission.
#[derive(Debug, Args, Clone)]
pub struct ShaderArgs {
    #[command(flatten)]
    pub kernel: KernelArgs,

    /// Target shading language.
    #[arg(short, long, value_enum, default_value_t = ShaderLang::Glsl)]
    pub lang: ShaderLang,

    /// Identifier prefix for the emitted constants (upper-cased).
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

/// Options for plotting a saved kernel.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Kernel JSON file produced by `blur-weights weights --export-json`.
    #[arg(long, value_name = "JSON")]
    pub kernel: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}
