//! Project configuration.
//!
//! An initialized project carries a `themekit.yaml` at its root naming
//! the active theme and the artifact files the engine regenerates. Its
//! absence is how the rebuild engine recognizes an uninitialized target.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use themekit_scan::{ScanDepth, ScanOptions};

/// Config file name at the project root.
pub const CONFIG_FILE: &str = "themekit.yaml";

/// Project-local state directory (themes, backups).
pub const STATE_DIR: &str = ".themekit";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project config: {0}")]
    Parse(String),
}

/// Paths of the generated theme artifacts, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default = "default_tailwind")]
    pub tailwind: String,
}

fn default_stylesheet() -> String {
    "styles/theme.css".to_string()
}

fn default_tailwind() -> String {
    "tailwind.config.js".to_string()
}

impl Default for Artifacts {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            tailwind: default_tailwind(),
        }
    }
}

/// Scanner overrides. Unset fields fall back to the scanner defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

/// The `themekit.yaml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Active theme id.
    pub theme: String,
    #[serde(default)]
    pub artifacts: Artifacts,
    #[serde(default)]
    pub scan: ScanSettings,
}

impl ProjectConfig {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            artifacts: Artifacts::default(),
            scan: ScanSettings::default(),
        }
    }

    /// True when `root` carries a project config.
    pub fn exists(root: &Path) -> bool {
        root.join(CONFIG_FILE).is_file()
    }

    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self, root: &Path) -> Result<(), ConfigError> {
        let path = root.join(CONFIG_FILE);
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::Io { path, source: e })
    }

    /// Scanner options with project overrides applied.
    pub fn scan_options(&self, depth: ScanDepth) -> ScanOptions {
        let mut options = ScanOptions {
            depth,
            ..Default::default()
        };
        if let Some(dirs) = &self.scan.dirs {
            options.dirs = dirs.clone();
        }
        if let Some(extensions) = &self.scan.extensions {
            options.extensions = extensions.clone();
        }
        options
    }

    /// Artifact paths relative to the project root, in write order.
    pub fn artifact_paths(&self) -> Vec<&str> {
        vec![&self.artifacts.stylesheet, &self.artifacts.tailwind]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ProjectConfig::new("ocean-glass");
        config.save(tmp.path()).unwrap();

        assert!(ProjectConfig::exists(tmp.path()));
        let loaded = ProjectConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_defaults_fill_in() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "theme: minimal\n").unwrap();
        let config = ProjectConfig::load(tmp.path()).unwrap();
        assert_eq!(config.artifacts.stylesheet, "styles/theme.css");
        assert_eq!(config.scan, ScanSettings::default());
    }

    #[test]
    fn test_scan_overrides() {
        let mut config = ProjectConfig::new("t");
        config.scan.dirs = Some(vec!["web".to_string()]);
        let options = config.scan_options(ScanDepth::Full);
        assert_eq!(options.dirs, vec!["web".to_string()]);
        assert_eq!(options.depth, ScanDepth::Full);
        // Extensions untouched by the override.
        assert!(options.extensions.iter().any(|e| e == "tsx"));
    }
}
