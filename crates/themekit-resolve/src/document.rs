//! Theme document model.
//!
//! A theme document is the root artifact of the engine: a declarative YAML
//! file carrying mode-partitioned token groups and 12-step color scales.
//! Two schema versions exist:
//!
//! - **Version 1** (legacy): flat `light`/`dark` color maps under `colors`,
//!   plus typography and shape settings.
//! - **Version 2** (extended): named color scales, semantic/status/effects
//!   token groups where values may reference other locations in the same
//!   document via `$ref` dot-paths, and animation definitions.
//!
//! Documents are loaded read-only. Migration (see [`crate::migrate`])
//! produces a new document rather than mutating in place.
//!
//! # Example
//!
//! ```rust
//! use themekit_resolve::ThemeDocument;
//!
//! let doc = ThemeDocument::from_yaml(r##"
//! version: "2"
//! id: ocean-glass
//! name: Ocean Glass
//! category: glass
//! scales:
//!   teal:
//!     hue: "185"
//!     light:
//!       steps: ["#fafefd", "#f3fbf9", "#e0f8f3", "#ccf3ea", "#b8eae0",
//!               "#a1ded2", "#83cdc1", "#53b9ab", "#12a594", "#0d9b8a",
//!               "#008573", "#0d3d38"]
//! semantic:
//!   light:
//!     primary: { $ref: "scales.teal.steps.9" }
//!     background: "#fdfdfd"
//! "##).unwrap();
//!
//! assert_eq!(doc.id, "ocean-glass");
//! assert!(doc.scales.contains_key("teal"));
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Display mode a token set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Both modes, in generation order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token's value: either an already-concrete literal or a reference to
/// another location in the same document.
///
/// References serialize as `{ $ref: "<dot-path>" }`, literals as plain
/// strings, so the two are unambiguous in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A pointer to another node, e.g. `scales.teal.steps.9`.
    Reference {
        #[serde(rename = "$ref")]
        path: String,
    },
    /// A concrete value (color, dimension, shadow, ...).
    Literal(String),
}

impl TokenValue {
    /// Convenience constructor for a literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        TokenValue::Literal(value.into())
    }

    /// Convenience constructor for a reference.
    pub fn reference(path: impl Into<String>) -> Self {
        TokenValue::Reference { path: path.into() }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, TokenValue::Reference { .. })
    }
}

/// A named group of tokens. `BTreeMap` keeps iteration order stable, which
/// the generators rely on for byte-identical regeneration.
pub type TokenGroup = BTreeMap<String, TokenValue>;

/// A token group split by display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTokens {
    #[serde(default)]
    pub light: TokenGroup,
    #[serde(default)]
    pub dark: TokenGroup,
}

impl ModeTokens {
    pub fn get(&self, mode: Mode) -> &TokenGroup {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut TokenGroup {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// The two ladders of one mode of a color scale.
///
/// Steps are indexed 1..=12 by position. Either ladder may be absent — a
/// scale is allowed to define only opaque steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleLadders {
    /// Opaque steps, 1 (near-background tint) through 12 (high-contrast text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// Alpha variants carrying an explicit transparency component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Vec<String>>,
}

/// A named hue family with per-mode 12-step ladders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    /// Hue anchor the ladders were derived from (degrees or a color name).
    #[serde(default)]
    pub hue: String,
    #[serde(default)]
    pub light: ScaleLadders,
    #[serde(default)]
    pub dark: ScaleLadders,
}

impl ColorScale {
    pub fn ladders(&self, mode: Mode) -> &ScaleLadders {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Ordered keyframe stops: offset (`"0%"`, `"50%"`, ...) to property map.
pub type Keyframes = BTreeMap<String, BTreeMap<String, String>>;

/// Animation definitions: named keyframe sets plus timing strings
/// (`"pulse-glow 2s ease-in-out infinite"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animations {
    #[serde(default)]
    pub keyframes: BTreeMap<String, Keyframes>,
    #[serde(default)]
    pub timing: BTreeMap<String, String>,
}

impl Animations {
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty() && self.timing.is_empty()
    }
}

/// Legacy version-1 flat color maps. Retained on migrated documents for
/// backward-reading callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeColors {
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl ModeColors {
    pub fn get(&self, mode: Mode) -> &BTreeMap<String, String> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// Error loading or parsing a theme document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse theme document: {message}")]
    Parse { message: String },
}

/// The root theme artifact.
///
/// All fields default so that a structurally incomplete document still
/// loads; the validator reports missing required fields as a complete
/// error list instead of the parser failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Schema version: `"1"` legacy flat form, `"2"` extended form.
    #[serde(default)]
    pub version: String,
    /// Kebab-case identifier, unique within a theme registry.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Named hue families owned by this document.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<String, ColorScale>,
    /// Semantic tokens: background, foreground, primary, card, border, ...
    #[serde(default, skip_serializing_if = "ModeTokens::is_empty")]
    pub semantic: ModeTokens,
    /// Status tokens: success, warning, info, destructive.
    #[serde(default, skip_serializing_if = "ModeTokens::is_empty")]
    pub status: ModeTokens,
    /// Effect tokens: glass, glow.
    #[serde(default, skip_serializing_if = "ModeTokens::is_empty")]
    pub effects: ModeTokens,
    #[serde(default, skip_serializing_if = "Animations::is_empty")]
    pub animations: Animations,
    /// Font settings, carried verbatim through migration.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub typography: BTreeMap<String, String>,
    /// Radius/spacing settings, carried verbatim through migration.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub shape: BTreeMap<String, String>,
    /// Version-1 flat color maps; the only token source in legacy
    /// documents, retained alongside the groups after migration.
    #[serde(default, skip_serializing_if = "ModeColors::is_empty")]
    pub colors: ModeColors,
}

impl ThemeDocument {
    /// Parses a theme document from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, DocumentError> {
        serde_yaml::from_str(yaml).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a theme document from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Serializes the document back to YAML.
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(self).map_err(|e| DocumentError::Parse {
            message: e.to_string(),
        })
    }

    pub fn is_legacy(&self) -> bool {
        self.version == "1"
    }

    /// Token group for a named root (`semantic`, `status`, `effects`).
    pub fn group(&self, name: &str) -> Option<&ModeTokens> {
        match name {
            "semantic" => Some(&self.semantic),
            "status" => Some(&self.status),
            "effects" => Some(&self.effects),
            _ => None,
        }
    }

    /// Names of the addressable token groups, in generation order.
    pub const GROUPS: [&'static str; 3] = ["semantic", "status", "effects"];
}
