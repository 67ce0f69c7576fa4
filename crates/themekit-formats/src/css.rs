//! Style-sheet custom-property generation.
//!
//! Emits a `:root` block for light mode, a `.dark` block for dark-mode
//! overrides, font/radius variables from the document's typography and
//! shape settings, and `@keyframes` blocks for every animation. Output is
//! byte-deterministic: all maps iterate in sorted order.

use std::fmt::Write;

use crate::input::{GenerateError, GenerateOptions, GeneratorInput};

pub fn generate_css(
    input: &GeneratorInput,
    _options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let mut out = String::new();

    out.push_str(":root {\n");
    for (name, value) in &input.light.vars {
        let _ = writeln!(out, "  --{}: {};", name, value);
    }
    for (name, value) in &input.doc.typography {
        let _ = writeln!(out, "  --{}: {};", name, value);
    }
    for (name, value) in &input.doc.shape {
        let _ = writeln!(out, "  --{}: {};", name, value);
    }
    out.push_str("}\n");

    out.push_str("\n.dark {\n");
    for (name, value) in &input.dark.vars {
        let _ = writeln!(out, "  --{}: {};", name, value);
    }
    out.push_str("}\n");

    for (name, frames) in &input.doc.animations.keyframes {
        let _ = write!(out, "\n@keyframes {} {{\n", name);
        for (offset, props) in frames {
            let _ = writeln!(out, "  {} {{", offset);
            for (prop, value) in props {
                let _ = writeln!(out, "    {}: {};", prop, value);
            }
            out.push_str("  }\n");
        }
        out.push_str("}\n");
    }

    Ok(out)
}
