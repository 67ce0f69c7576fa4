//! Output-format generators for resolved theme variable sets.
//!
//! Every generator is a pure function from a [`GeneratorInput`] (document
//! plus per-mode resolved snapshots) and [`GenerateOptions`] to a string,
//! deterministic for identical input — repeated generation from an
//! unchanged document is byte-identical, which keeps regeneration
//! diff-friendly and lets the rewrite engine detect changes cheaply.
//!
//! Formats are requested by name through the dispatch table in
//! [`registry`]; see [`FORMATS`] for the registered set.
//!
//! ```rust
//! use themekit_formats::{generate, GenerateOptions, GeneratorInput};
//! use themekit_resolve::ThemeDocument;
//!
//! let doc = ThemeDocument::from_yaml(r##"
//! version: "2"
//! id: demo
//! name: Demo
//! category: test
//! semantic:
//!   light:
//!     primary: "#12a594"
//! "##).unwrap();
//!
//! let input = GeneratorInput::from_document(&doc);
//! let css = generate("css", &input, &GenerateOptions::default()).unwrap();
//! assert!(css.contains("--primary: #12a594;"));
//! ```

pub mod css;
pub mod design_tool;
pub mod input;
pub mod registry;
pub mod scss;
pub mod tailwind;
pub mod tokens;

pub use css::generate_css;
pub use design_tool::generate_design_tool;
pub use input::{GenerateError, GenerateOptions, GeneratorInput};
pub use registry::{
    file_extension, format_spec, generate, generate_all, FormatResult, FormatSpec, GeneratorFn,
    FORMATS,
};
pub use scss::generate_scss;
pub use tailwind::generate_tailwind;
pub use tokens::{generate_tokens, pipeline_config};
