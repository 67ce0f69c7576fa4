//! Project theme registry.
//!
//! Themes live as YAML documents under `.themekit/themes/`, one file per
//! theme, resolved by id with `.yaml` taking priority over `.yml` when
//! both exist. Documents come back migrated to the extended schema so
//! callers never see the legacy shape.

use std::path::{Path, PathBuf};

use themekit_resolve::{migrate, DocumentError, ThemeDocument};

use crate::config::STATE_DIR;

/// Recognized theme file extensions, in priority order.
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml"];

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("theme '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Read-only view over a project's themes directory.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    dir: PathBuf,
}

impl ThemeRegistry {
    /// Registry rooted at a project's state directory.
    pub fn project(root: &Path) -> Self {
        Self {
            dir: root.join(STATE_DIR).join("themes"),
        }
    }

    /// Registry over an explicit directory (tests, shared theme packs).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads a theme by id, migrated to the extended schema.
    pub fn get(&self, id: &str) -> Result<ThemeDocument, RegistryError> {
        for ext in THEME_EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", id, ext));
            if path.is_file() {
                return Ok(migrate(ThemeDocument::from_file(&path)?));
            }
        }
        Err(RegistryError::NotFound(id.to_string()))
    }

    /// Lists available theme ids, sorted, without duplicates.
    pub fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return ids;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let recognized = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| THEME_EXTENSIONS.contains(&e))
                .unwrap_or(false);
            if recognized {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(dir: &Path, id: &str, yaml: &str) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(format!("{}.yaml", id)), yaml).unwrap();
    }

    #[test]
    fn test_get_migrates_legacy_theme() {
        let tmp = tempfile::tempdir().unwrap();
        seed(
            tmp.path(),
            "old-flat",
            "version: \"1\"\nid: old-flat\nname: Old\ncategory: classic\ncolors:\n  light:\n    primary: \"#2563eb\"\n",
        );
        let registry = ThemeRegistry::at(tmp.path());
        let doc = registry.get("old-flat").unwrap();
        assert_eq!(doc.version, "2");
        assert!(doc.semantic.light.contains_key("primary"));
    }

    #[test]
    fn test_missing_theme() {
        let registry = ThemeRegistry::at("/nonexistent/themes");
        assert!(matches!(
            registry.get("nope"),
            Err(RegistryError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_list_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        seed(tmp.path(), "zen", "version: \"2\"\nid: zen\n");
        seed(tmp.path(), "aqua", "version: \"2\"\nid: aqua\n");
        std::fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();
        let registry = ThemeRegistry::at(tmp.path());
        assert_eq!(registry.list(), vec!["aqua", "zen"]);
    }
}
