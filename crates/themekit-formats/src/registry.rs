//! Format dispatch table.
//!
//! Maps format names to their generator, file extension, and display
//! name. Unknown names fail with
//! [`GenerateError::UnknownFormat`]; extension lookup falls back to
//! `.txt` so callers writing arbitrary payloads always get a usable
//! filename.

use crate::css::generate_css;
use crate::design_tool::generate_design_tool;
use crate::input::{GenerateError, GenerateOptions, GeneratorInput};
use crate::scss::generate_scss;
use crate::tailwind::generate_tailwind;
use crate::tokens::generate_tokens;

/// A registered generator.
pub type GeneratorFn = fn(&GeneratorInput, &GenerateOptions) -> Result<String, GenerateError>;

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub name: &'static str,
    pub generate: GeneratorFn,
    pub extension: &'static str,
    pub display_name: &'static str,
}

/// All registered formats, in generation order.
pub const FORMATS: &[FormatSpec] = &[
    FormatSpec {
        name: "css",
        generate: generate_css,
        extension: ".css",
        display_name: "Style-sheet custom properties",
    },
    FormatSpec {
        name: "scss",
        generate: generate_scss,
        extension: ".scss",
        display_name: "Preprocessor variables",
    },
    FormatSpec {
        name: "tailwind",
        generate: generate_tailwind,
        extension: ".js",
        display_name: "Utility-framework config",
    },
    FormatSpec {
        name: "design-tool",
        generate: generate_design_tool,
        extension: ".json",
        display_name: "Design-tool tokens",
    },
    FormatSpec {
        name: "tokens",
        generate: generate_tokens,
        extension: ".json",
        display_name: "Token interchange",
    },
];

/// Looks up a format by name.
pub fn format_spec(name: &str) -> Result<&'static FormatSpec, GenerateError> {
    FORMATS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| GenerateError::UnknownFormat(name.to_string()))
}

/// Runs one named generator.
pub fn generate(
    name: &str,
    input: &GeneratorInput,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let spec = format_spec(name)?;
    (spec.generate)(input, options)
}

/// File extension for a format name; `.txt` for unknown names.
pub fn file_extension(name: &str) -> &'static str {
    format_spec(name).map(|spec| spec.extension).unwrap_or(".txt")
}

/// Outcome of one format within a [`generate_all`] run.
#[derive(Debug)]
pub struct FormatResult {
    pub format: &'static str,
    pub extension: &'static str,
    pub output: Result<String, GenerateError>,
}

/// Runs every registered generator. One generator's failure never
/// prevents the others from completing; each reports its own result.
pub fn generate_all(input: &GeneratorInput, options: &GenerateOptions) -> Vec<FormatResult> {
    FORMATS
        .iter()
        .map(|spec| FormatResult {
            format: spec.name,
            extension: spec.extension,
            output: (spec.generate)(input, options),
        })
        .collect()
}
