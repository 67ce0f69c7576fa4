//! Backup manifests.
//!
//! Every mutating rebuild captures the files it is about to touch into a
//! self-contained snapshot directory under `.themekit/backups/`, named
//! by a sortable timestamp + theme-id composite. Manifests form a
//! linear, independently restorable history: each snapshot carries full
//! file copies, never diffs against a prior manifest.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::STATE_DIR;

/// Manifest descriptor file name inside a backup directory.
const MANIFEST_FILE: &str = "manifest.yaml";

/// Subdirectory holding the captured file copies.
const FILES_DIR: &str = "files";

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup io failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid backup manifest at {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },
}

/// One rebuild operation's snapshot descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupManifest {
    /// Sortable composite id: `<yyyymmddHHMMSS>-<theme-id>`.
    pub id: String,
    /// Theme active before the rebuild.
    pub previous_theme: String,
    /// Theme the rebuild switched to.
    pub new_theme: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Captured files, relative to the project root.
    pub files: Vec<String>,
}

fn backups_dir(root: &Path) -> PathBuf {
    root.join(STATE_DIR).join("backups")
}

/// Captures the given files (those that exist) into a new backup.
///
/// Returns the manifest; its id is unique even for rebuilds within the
/// same second of the same theme.
pub fn create_backup(
    root: &Path,
    previous_theme: &str,
    new_theme: &str,
    files: &[String],
) -> Result<BackupManifest, BackupError> {
    let stamp = Local::now();
    let base_id = format!("{}-{}", stamp.format("%Y%m%d%H%M%S"), new_theme);

    let dir = backups_dir(root);
    let mut id = base_id.clone();
    let mut n = 1;
    while dir.join(&id).exists() {
        n += 1;
        id = format!("{}-{}", base_id, n);
    }

    let backup_dir = dir.join(&id);
    let files_dir = backup_dir.join(FILES_DIR);
    std::fs::create_dir_all(&files_dir).map_err(|e| BackupError::Io {
        path: files_dir.clone(),
        source: e,
    })?;

    let mut captured = Vec::new();
    for rel in files {
        let source = root.join(rel);
        if !source.is_file() {
            continue;
        }
        let target = files_dir.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BackupError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::copy(&source, &target).map_err(|e| BackupError::Io {
            path: source.clone(),
            source: e,
        })?;
        captured.push(rel.clone());
    }

    let manifest = BackupManifest {
        id: id.clone(),
        previous_theme: previous_theme.to_string(),
        new_theme: new_theme.to_string(),
        timestamp: stamp.to_rfc3339(),
        files: captured,
    };

    let manifest_path = backup_dir.join(MANIFEST_FILE);
    let content = serde_yaml::to_string(&manifest).map_err(|e| BackupError::Manifest {
        path: manifest_path.clone(),
        message: e.to_string(),
    })?;
    std::fs::write(&manifest_path, content).map_err(|e| BackupError::Io {
        path: manifest_path,
        source: e,
    })?;

    tracing::info!(id = %manifest.id, files = manifest.files.len(), "backup created");
    Ok(manifest)
}

/// Loads every manifest, newest first (ids sort chronologically).
pub fn list_backups(root: &Path) -> Result<Vec<BackupManifest>, BackupError> {
    let dir = backups_dir(root);
    let mut manifests = Vec::new();
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(manifests), // no backups yet
    };

    for entry in entries.flatten() {
        let manifest_path = entry.path().join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&manifest_path).map_err(|e| BackupError::Io {
            path: manifest_path.clone(),
            source: e,
        })?;
        let manifest: BackupManifest =
            serde_yaml::from_str(&content).map_err(|e| BackupError::Manifest {
                path: manifest_path,
                message: e.to_string(),
            })?;
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| b.id.cmp(&a.id));
    Ok(manifests)
}

/// Finds a manifest by id.
pub fn find_backup(root: &Path, id: &str) -> Result<Option<BackupManifest>, BackupError> {
    Ok(list_backups(root)?.into_iter().find(|m| m.id == id))
}

/// Restores every captured file of a manifest, byte for byte. Returns
/// the number of files written back.
pub fn restore_backup(root: &Path, manifest: &BackupManifest) -> Result<usize, BackupError> {
    let files_dir = backups_dir(root).join(&manifest.id).join(FILES_DIR);
    let mut restored = 0;

    for rel in &manifest.files {
        let source = files_dir.join(rel);
        let target = root.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BackupError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::copy(&source, &target).map_err(|e| BackupError::Io {
            path: source.clone(),
            source: e,
        })?;
        restored += 1;
    }

    tracing::info!(id = %manifest.id, restored, "backup restored");
    Ok(restored)
}
