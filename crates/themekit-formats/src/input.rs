//! Shared generator input and options.

use themekit_resolve::{snapshot, Mode, ResolvedSnapshot, ThemeDocument};

/// Everything a generator needs: the source document plus both per-mode
/// resolved snapshots. Built once and shared across formats so
/// `generate_all` resolves the document a single time.
#[derive(Debug, Clone)]
pub struct GeneratorInput<'a> {
    pub doc: &'a ThemeDocument,
    pub light: ResolvedSnapshot,
    pub dark: ResolvedSnapshot,
}

impl<'a> GeneratorInput<'a> {
    /// Resolves both modes of a document into a generator input.
    pub fn from_document(doc: &'a ThemeDocument) -> Self {
        Self {
            doc,
            light: snapshot(doc, Mode::Light),
            dark: snapshot(doc, Mode::Dark),
        }
    }

    pub fn snapshot(&self, mode: Mode) -> &ResolvedSnapshot {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Generator tuning knobs. Every field has a sensible default.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Variable name prefix for preprocessor output (`$<prefix>-primary`).
    pub prefix: String,
    /// Group token-interchange colors into nested objects (`true`) or keep
    /// a flat namespace (`false`).
    pub nested_colors: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prefix: "theme".to_string(),
            nested_colors: true,
        }
    }
}

/// Error raised by format generation or dispatch.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The requested format name is not registered.
    #[error("unknown format '{0}'")]
    UnknownFormat(String),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
