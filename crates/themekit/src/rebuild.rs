//! The backup & rewrite engine.
//!
//! `rebuild` switches a project to a new theme: validate and resolve the
//! theme, snapshot the current artifacts, regenerate them, then scan the
//! source tree and rewrite every non-compliant color usage that has a
//! safe suggestion. `rollback` undoes a rebuild from its manifest.
//!
//! Failures here are expected, user-recoverable conditions (project not
//! initialized, unknown theme, no backups), so every operation returns a
//! typed [`RebuildError`] instead of panicking. Backups are taken before
//! any mutation: a failure mid-write leaves completed writes in place
//! and the snapshot is the recovery path. Concurrent rebuilds against
//! one project root are unsupported; serialize them per project.

use std::path::{Path, PathBuf};

use serde::Serialize;

use themekit_formats::{
    generate_css, generate_tailwind, GenerateError, GenerateOptions, GeneratorInput,
};
use themekit_resolve::validate;
use themekit_scan::{scan, ScanDepth, ScanError, ScanReport};

use crate::backup::{
    create_backup, find_backup, list_backups, restore_backup, BackupError, BackupManifest,
};
use crate::config::{ConfigError, ProjectConfig, CONFIG_FILE};
use crate::registry::{RegistryError, ThemeRegistry};

#[derive(Debug, thiserror::Error)]
pub enum RebuildError {
    #[error("project at {} is not initialized (no {})", .0.display(), CONFIG_FILE)]
    NotInitialized(PathBuf),
    #[error("theme '{0}' not found")]
    ThemeNotFound(String),
    #[error("theme '{id}' is invalid: {}", .errors.join("; "))]
    InvalidTheme { id: String, errors: Vec<String> },
    #[error("backup '{0}' not found")]
    BackupNotFound(String),
    #[error("no backups available")]
    NoBackups,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rebuild tuning.
#[derive(Debug, Clone, Default)]
pub struct RebuildOptions {
    /// Simulate: no filesystem mutation, no manifest.
    pub dry_run: bool,
    /// Scanner suggestion depth for the rewrite pass.
    pub depth: ScanDepth,
    /// Generator options for artifact regeneration.
    pub generate: GenerateOptions,
}

/// What a rebuild did (or would do, under dry-run).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildReport {
    pub previous_theme: String,
    pub new_theme: String,
    pub dry_run: bool,
    /// Manifest id, absent under dry-run.
    pub backup_id: Option<String>,
    /// Artifact files regenerated, relative to the project root.
    pub files_written: Vec<String>,
    /// Source files whose color usages were rewritten.
    pub files_rewritten: Vec<String>,
    /// Total occurrences fixed.
    pub fixed: usize,
    /// Findings with no safe mapping, left untouched.
    pub warnings: Vec<String>,
}

/// What a rollback restored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackReport {
    /// Manifest the files came from.
    pub restored_from: String,
    /// Theme active after the rollback.
    pub theme: String,
    pub files_restored: usize,
    /// Safety manifest capturing the pre-rollback state.
    pub safety_backup: String,
}

/// Switches `project_root` to `new_theme_id`.
///
/// Steps, each independently failable: initialized-project check, theme
/// lookup, backup capture, artifact regeneration, scan-driven rewrite.
/// Findings without a suggestion become warnings, never failures.
pub fn rebuild(
    project_root: &Path,
    new_theme_id: &str,
    options: &RebuildOptions,
) -> Result<RebuildReport, RebuildError> {
    if !ProjectConfig::exists(project_root) {
        return Err(RebuildError::NotInitialized(project_root.to_path_buf()));
    }
    let mut config = ProjectConfig::load(project_root)?;
    let previous_theme = config.theme.clone();

    let registry = ThemeRegistry::project(project_root);
    let doc = match registry.get(new_theme_id) {
        Ok(doc) => doc,
        Err(RegistryError::NotFound(id)) => return Err(RebuildError::ThemeNotFound(id)),
        Err(RegistryError::Document(e)) => {
            return Err(RebuildError::InvalidTheme {
                id: new_theme_id.to_string(),
                errors: vec![e.to_string()],
            })
        }
    };

    let validation = validate(Some(&doc));
    if !validation.valid {
        return Err(RebuildError::InvalidTheme {
            id: new_theme_id.to_string(),
            errors: validation.errors,
        });
    }

    let input = GeneratorInput::from_document(&doc);
    let artifacts: Vec<(String, String)> = vec![
        (
            config.artifacts.stylesheet.clone(),
            generate_css(&input, &options.generate)?,
        ),
        (
            config.artifacts.tailwind.clone(),
            generate_tailwind(&input, &options.generate)?,
        ),
    ];

    let mut report = RebuildReport {
        previous_theme: previous_theme.clone(),
        new_theme: new_theme_id.to_string(),
        dry_run: options.dry_run,
        backup_id: None,
        files_written: Vec::new(),
        files_rewritten: Vec::new(),
        fixed: 0,
        warnings: Vec::new(),
    };

    if !options.dry_run {
        let mut capture: Vec<String> = config.artifact_paths().iter().map(|p| p.to_string()).collect();
        capture.push(CONFIG_FILE.to_string());
        let manifest = create_backup(project_root, &previous_theme, new_theme_id, &capture)?;
        report.backup_id = Some(manifest.id);
    }

    for (rel, content) in &artifacts {
        report.files_written.push(rel.clone());
        if options.dry_run {
            continue;
        }
        let target = project_root.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RebuildError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&target, content).map_err(|e| RebuildError::Write {
            path: target,
            source: e,
        })?;
    }

    if !options.dry_run {
        config.theme = new_theme_id.to_string();
        config.save(project_root)?;
    }

    let scan_report = scan(project_root, &config.scan_options(options.depth))?;
    apply_rewrites(project_root, &scan_report, options.dry_run, &mut report)?;

    tracing::info!(
        theme = new_theme_id,
        fixed = report.fixed,
        dry_run = options.dry_run,
        "rebuild complete"
    );
    Ok(report)
}

/// Rewrites every finding with a replacement, in place. Dry-run tallies
/// without touching the filesystem.
fn apply_rewrites(
    project_root: &Path,
    scan_report: &ScanReport,
    dry_run: bool,
    report: &mut RebuildReport,
) -> Result<(), RebuildError> {
    for file in &scan_report.files {
        let mut fixed_here = 0;
        let path = project_root.join(&file.path);
        let mut content = std::fs::read_to_string(&path).map_err(|e| RebuildError::Write {
            path: path.clone(),
            source: e,
        })?;

        for entry in &file.matches {
            match &entry.replacement {
                Some(replacement) => {
                    // One occurrence per finding; repeated matches come as
                    // separate findings and consume earlier occurrences first.
                    content = content.replacen(&entry.matched, replacement, 1);
                    fixed_here += 1;
                }
                None => {
                    report.warnings.push(format!(
                        "{}:{}: no safe replacement for '{}'",
                        file.path, entry.line, entry.matched
                    ));
                }
            }
        }

        if fixed_here > 0 {
            report.fixed += fixed_here;
            report.files_rewritten.push(file.path.clone());
            if !dry_run {
                std::fs::write(&path, content).map_err(|e| RebuildError::Write {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }
    }
    Ok(())
}

/// Restores the most recent manifest, or a specific one by id.
///
/// A safety manifest of the current state is captured first, so a
/// rollback is itself reversible.
pub fn rollback(
    project_root: &Path,
    manifest_id: Option<&str>,
) -> Result<RollbackReport, RebuildError> {
    if !ProjectConfig::exists(project_root) {
        return Err(RebuildError::NotInitialized(project_root.to_path_buf()));
    }
    let mut config = ProjectConfig::load(project_root)?;

    let backups = list_backups(project_root)?;
    if backups.is_empty() {
        return Err(RebuildError::NoBackups);
    }
    let manifest: BackupManifest = match manifest_id {
        Some(id) => find_backup(project_root, id)?
            .ok_or_else(|| RebuildError::BackupNotFound(id.to_string()))?,
        None => backups[0].clone(),
    };

    let safety = create_backup(
        project_root,
        &config.theme,
        &manifest.previous_theme,
        &manifest.files,
    )?;

    let files_restored = restore_backup(project_root, &manifest)?;

    // The captured config carries the old theme id already; only fix it
    // up when the manifest predates config capture.
    if !manifest.files.iter().any(|f| f == CONFIG_FILE) {
        config.theme = manifest.previous_theme.clone();
        config.save(project_root)?;
    }

    Ok(RollbackReport {
        restored_from: manifest.id,
        theme: manifest.previous_theme,
        files_restored,
        safety_backup: safety.id,
    })
}
