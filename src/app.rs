//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - builds the kernel
//! - prints the report, shader constants or plot
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::{Command, KernelArgs, PlotArgs, ShaderArgs, WeightsArgs};
use crate::domain::{KernelRun, KernelSpec};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `blur-weights` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is normal; flags and real environment variables still apply.
    dotenvy::dotenv().ok();
    crate::logging::init();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Weights(args) => handle_weights(args),
        Command::Shader(args) => handle_shader(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_weights(args: WeightsArgs) -> Result<(), AppError> {
    let run = build_kernel(&args.kernel)?;

    print!("{}", crate::report::format_report(&run));

    if args.plot {
        let plot = crate::plot::render_kernel_plot(&run.half, &run.linear, args.width, args.height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export_json {
        crate::io::kernel::write_kernel_json(path, &run)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::export::write_taps_csv(path, &run)?;
    }

    Ok(())
}

fn handle_shader(args: ShaderArgs) -> Result<(), AppError> {
    let run = build_kernel(&args.kernel)?;
    let source = crate::shader::render_shader(&run, args.lang, &args.prefix)?;
    print!("{source}");
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let kernel = crate::io::kernel::read_kernel_json(&args.kernel)?;
    debug!(index = kernel.index, omit_edges = kernel.omit_edges, "loaded kernel JSON");

    let plot = crate::plot::render_kernel_plot_from_file(&kernel, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn build_kernel(args: &KernelArgs) -> Result<KernelRun, AppError> {
    let spec = KernelSpec::new(args.index, args.omit_edges)?;
    Ok(pipeline::run_kernel(&spec)?)
}

const DEFAULT_COMMAND: &str = "weights";

/// Insert the `weights` subcommand when argv has none.
///
/// `blur-weights` and `blur-weights -n 16 --plot` both run the report. Top-level
/// `-h`/`--help`/`-V`/`--version` and any bare word (a subcommand, `help`, or a typo
/// clap should report) pass through.
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    match argv.get(1).map(String::as_str) {
        None => argv.push(DEFAULT_COMMAND.to_string()),
        Some("-h" | "--help" | "-V" | "--version") => {}
        Some(flag) if flag.starts_with('-') => argv.insert(1, DEFAULT_COMMAND.to_string()),
        Some(_) => {}
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_weights() {
        assert_eq!(rewrite_args(args(&["blur-weights"])), args(&["blur-weights", "weights"]));
    }

    #[test]
    fn leading_flags_go_to_weights() {
        assert_eq!(
            rewrite_args(args(&["blur-weights", "-n", "16", "--plot"])),
            args(&["blur-weights", "weights", "-n", "16", "--plot"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for argv in [
            args(&["blur-weights", "shader", "--lang", "wgsl"]),
            args(&["blur-weights", "plot", "--kernel", "k.json"]),
            args(&["blur-weights", "--help"]),
            args(&["blur-weights", "-V"]),
            args(&["blur-weights", "help", "shader"]),
        ] {
            assert_eq!(rewrite_args(argv.clone()), argv);
        }
    }

    #[test]
    fn invalid_kernel_args_map_to_exit_code_3() {
        let err = build_kernel(&KernelArgs {
            index: 7,
            omit_edges: 0,
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_KERNEL);

        let err = build_kernel(&KernelArgs {
            index: 4,
            omit_edges: 3,
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_KERNEL);
    }
}
