//! Shader constant emission.
//!
//! Renders the linear samples of a kernel run as constant arrays that can be pasted
//! into a separable blur pass:
//!
//! - GLSL: `const float BLUR_WEIGHTS[M] = float[](...);`
//! - WGSL: `const BLUR_WEIGHTS = array<f32, M>(...);`
//!
//! Values are written as `f32` literals since that is what the GPU consumes.

use crate::domain::{KernelRun, ShaderLang};
use crate::kernel::KernelError;

pub const DEFAULT_PREFIX: &str = "BLUR";

/// Render the sample count, offsets and weights of `run` in `lang`.
pub fn render_shader(run: &KernelRun, lang: ShaderLang, prefix: &str) -> Result<String, KernelError> {
    let prefix = normalize_prefix(prefix)?;
    let count = run.sample_count();
    let offsets = fmt_f32_list(&run.linear.offsets);
    let weights = fmt_f32_list(&run.linear.weights);

    let mut out = String::new();
    out.push_str(&format!(
        "// Gaussian {n}x{n} kernel (index={}, omit_edges={}) -> {count} linear samples\n",
        run.spec.index,
        run.spec.omit_edges,
        n = run.full_len(),
    ));

    match lang {
        ShaderLang::Glsl => {
            out.push_str(&format!("const int {prefix}_SAMPLE_COUNT = {count};\n"));
            out.push_str(&format!("const float {prefix}_OFFSETS[{count}] = float[]({offsets});\n"));
            out.push_str(&format!("const float {prefix}_WEIGHTS[{count}] = float[]({weights});\n"));
        }
        ShaderLang::Wgsl => {
            out.push_str(&format!("const {prefix}_SAMPLE_COUNT: u32 = {count}u;\n"));
            out.push_str(&format!("const {prefix}_OFFSETS = array<f32, {count}>({offsets});\n"));
            out.push_str(&format!("const {prefix}_WEIGHTS = array<f32, {count}>({weights});\n"));
        }
    }

    Ok(out)
}

fn normalize_prefix(prefix: &str) -> Result<String, KernelError> {
    let mut chars = prefix.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(KernelError::InvalidParameter(format!(
            "shader prefix '{prefix}' is not a valid identifier"
        )));
    }
    Ok(prefix.to_ascii_uppercase())
}

fn fmt_f32_list(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|&v| float_literal(v as f32)).collect();
    parts.join(", ")
}

/// Shortest `f32` text that still parses as a float literal in both languages.
fn float_literal(v: f32) -> String {
    let s = format!("{v:?}");
    if s.contains(['.', 'e', 'E']) {
        s
    } else {
        format!("{s}.0")
    }
}
