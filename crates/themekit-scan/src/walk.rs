//! Source-tree walking.
//!
//! Collects candidate files from a project's configured source
//! directories, skipping dependency/version-control/tooling directories
//! and filtering by extension. Output is sorted so scans are
//! deterministic.

use std::path::{Path, PathBuf};

use crate::scan::{ScanError, ScanOptions};

/// Directory names never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    ".next",
    "coverage",
    ".themekit",
];

/// Collects every scannable file under the configured source dirs.
///
/// Missing source dirs are skipped silently — a project need not have
/// every conventional directory.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for dir in &options.dirs {
        let path = root.join(dir);
        if path.is_dir() {
            collect_recursive(&path, options, &mut files)?;
        }
    }
    files.sort();
    Ok(files)
}

fn collect_recursive(
    dir: &Path,
    options: &ScanOptions,
    files: &mut Vec<PathBuf>,
) -> Result<(), ScanError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            let name = entry.file_name();
            let skip = name
                .to_str()
                .map(|n| SKIP_DIRS.contains(&n))
                .unwrap_or(false);
            if !skip {
                collect_recursive(&path, options, files)?;
            }
        } else if has_scannable_extension(&path, &options.extensions) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_scannable_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|allowed| allowed == e))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ScanOptions;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_walk_filters_and_skips() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write(root, "src/app.tsx", "");
        write(root, "src/readme.md", "");
        write(root, "src/node_modules/dep/index.js", "");
        write(root, "components/button.jsx", "");
        write(root, "scripts/tool.js", ""); // not a configured dir

        let files = collect_files(root, &ScanOptions::default()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["components/button.jsx", "src/app.tsx"]);
    }

    #[test]
    fn test_missing_dirs_are_fine() {
        let tmp = tempfile::tempdir().unwrap();
        let files = collect_files(tmp.path(), &ScanOptions::default()).unwrap();
        assert!(files.is_empty());
    }
}
