//! The project color scanner.
//!
//! Walks a project's source tree and reports every hard-coded color
//! usage — literal hex values and utility-class color+shade pairs —
//! together with the semantic token that should replace it, when one
//! exists. Two suggestion stages compose: the static rule table always
//! runs; the dynamic hue classifier only runs in [`ScanDepth::Full`].

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::classify::{dynamic_suggestion, parse_candidate};
use crate::rules::static_rule;
use crate::walk::collect_files;

/// How aggressively the scanner suggests replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanDepth {
    /// Static rule table only.
    #[default]
    Standard,
    /// Static table plus the dynamic hue classifier, with
    /// assertion-context exclusion.
    Full,
}

/// Scanner configuration. Defaults cover a conventional web project.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Source directories relative to the project root.
    pub dirs: Vec<String>,
    /// File extensions considered source files.
    pub extensions: Vec<String>,
    pub depth: ScanDepth,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            dirs: ["src", "app", "components", "lib", "pages"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extensions: ["js", "jsx", "ts", "tsx", "css", "html", "vue", "svelte"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            depth: ScanDepth::Standard,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One occurrence within one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    /// One-based line number.
    pub line: usize,
    /// The matched text, e.g. `bg-blue-500` or `#2563eb`.
    #[serde(rename = "match")]
    pub matched: String,
    /// Recommended semantic token, or `None` when no safe mapping exists.
    pub suggestion: Option<String>,
    /// Full replacement for the matched text, when a suggestion exists.
    pub replacement: Option<String>,
}

/// All occurrences found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFindings {
    /// Path relative to the project root.
    pub path: String,
    pub matches: Vec<MatchEntry>,
}

/// A flattened finding, as surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanFinding {
    pub file: String,
    pub line: usize,
    #[serde(rename = "match")]
    pub matched: String,
    pub suggestion: Option<String>,
    pub replacement: Option<String>,
}

/// Scan output: per-file matches plus the flattened non-compliant list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub scanned_files: usize,
    pub files: Vec<FileFindings>,
    pub non_compliant: Vec<ScanFinding>,
}

/// Compiled match patterns, built once per scan.
struct Patterns {
    utility: Regex,
    hex: Regex,
}

impl Patterns {
    fn new() -> Result<Self, ScanError> {
        Ok(Self {
            utility: Regex::new(
                r"\b(?:bg|text|border|ring|fill|stroke|from|via|to)-([a-z]+-[0-9]{2,3})\b",
            )?,
            hex: Regex::new(r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b")?,
        })
    }
}

/// Scans a project tree for non-compliant color usages.
///
/// Unrecognized colors yield findings with no suggestion and never halt
/// the scan; unreadable files are skipped with a logged warning.
pub fn scan(project_root: &Path, options: &ScanOptions) -> Result<ScanReport, ScanError> {
    let patterns = Patterns::new()?;
    let files = collect_files(project_root, options)?;

    let mut report = ScanReport {
        scanned_files: files.len(),
        ..Default::default()
    };

    for path in &files {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        let matches = scan_content(&content, options.depth, &patterns);
        if matches.is_empty() {
            continue;
        }

        let rel = path
            .strip_prefix(project_root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        for entry in &matches {
            report.non_compliant.push(ScanFinding {
                file: rel.clone(),
                line: entry.line,
                matched: entry.matched.clone(),
                suggestion: entry.suggestion.clone(),
                replacement: entry.replacement.clone(),
            });
        }
        report.files.push(FileFindings { path: rel, matches });
    }

    Ok(report)
}

/// Scans one file's content against the compiled patterns.
fn scan_content(
    content: &str,
    depth: ScanDepth,
    patterns: &Patterns,
) -> Vec<MatchEntry> {
    let mut matches = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        // Test fixtures assert on literal values on purpose; mangling them
        // breaks the suite the rewrite is supposed to keep green. Markup
        // on the same line still counts.
        if depth == ScanDepth::Full && is_assertion_context(line) {
            continue;
        }

        for captures in patterns.utility.captures_iter(line) {
            let full = &captures[0];
            let pair = &captures[1];
            let Some(candidate) = parse_candidate(pair) else {
                continue;
            };

            let suggestion = match static_rule(&candidate.family, candidate.shade) {
                Some(rule) => rule.suggestion.map(str::to_string),
                None if depth == ScanDepth::Full => dynamic_suggestion(&candidate),
                None => None,
            };
            let replacement = suggestion.as_ref().map(|s| full.replace(pair, s));

            matches.push(MatchEntry {
                line: line_number,
                matched: full.to_string(),
                suggestion,
                replacement,
            });
        }

        for m in patterns.hex.find_iter(line) {
            matches.push(MatchEntry {
                line: line_number,
                matched: m.as_str().to_string(),
                suggestion: None,
                replacement: None,
            });
        }
    }

    matches
}

/// Textual heuristic for test-assertion lines. Rendered-markup
/// attributes override: a line that sets a class attribute is flagged
/// even inside a test file.
fn is_assertion_context(line: &str) -> bool {
    let looks_like_assertion = line.contains("expect(")
        || line.contains("assert")
        || line.contains(".toBe(")
        || line.contains(".toEqual(")
        || line.contains(".toContain(");
    let is_markup = line.contains("className=") || line.contains("class=");
    looks_like_assertion && !is_markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new().unwrap()
    }

    #[test]
    fn test_static_hit_reports_primary() {
        let matches = scan_content(
            "<div className=\"bg-blue-500 p-4\">",
            ScanDepth::Standard,
            &patterns(),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "bg-blue-500");
        assert_eq!(matches[0].suggestion.as_deref(), Some("primary"));
        assert_eq!(matches[0].replacement.as_deref(), Some("bg-primary"));
        assert_eq!(matches[0].line, 1);
    }

    #[test]
    fn test_unmapped_shade_standard_mode() {
        let matches = scan_content("text-blue-300", ScanDepth::Standard, &patterns());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].suggestion, None);
    }

    #[test]
    fn test_unmapped_shade_full_mode_classifies() {
        let matches = scan_content("text-blue-300", ScanDepth::Full, &patterns());
        assert_eq!(matches[0].suggestion.as_deref(), Some("primary/30"));
        assert_eq!(matches[0].replacement.as_deref(), Some("text-primary/30"));
    }

    #[test]
    fn test_hex_literal_flagged_without_suggestion() {
        let matches = scan_content(
            "const brand = \"#2563eb\";",
            ScanDepth::Standard,
            &patterns(),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "#2563eb");
        assert_eq!(matches[0].suggestion, None);
    }

    #[test]
    fn test_unknown_family_full_mode_still_reported() {
        let matches = scan_content("bg-mauve-500", ScanDepth::Full, &patterns());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].suggestion, None);
    }

    #[test]
    fn test_assertion_line_skipped_in_full_mode() {
        let content = "expect(el).toHaveClass(\"bg-blue-500\");";
        assert!(scan_content(content, ScanDepth::Full, &patterns()).is_empty());
        // Standard depth keeps the match.
        assert_eq!(
            scan_content(content, ScanDepth::Standard, &patterns()).len(),
            1
        );
    }

    #[test]
    fn test_markup_in_test_file_still_flagged() {
        let content = "expect(render(<div className=\"bg-blue-500\" />)).toBeTruthy();";
        let matches = scan_content(content, ScanDepth::Full, &patterns());
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let content = "const a = 1;\nconst b = \"bg-red-500\";\n";
        let matches = scan_content(content, ScanDepth::Standard, &patterns());
        assert_eq!(matches[0].line, 2);
        assert_eq!(matches[0].suggestion.as_deref(), Some("destructive"));
    }

    #[test]
    fn test_scan_walks_project() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("app.tsx"), "<p className=\"text-green-500\" />").unwrap();
        std::fs::write(src.join("clean.tsx"), "<p className=\"text-primary\" />").unwrap();

        let report = scan(tmp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(report.scanned_files, 2);
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.non_compliant.len(), 1);
        assert_eq!(report.non_compliant[0].file, "src/app.tsx");
        assert_eq!(
            report.non_compliant[0].suggestion.as_deref(),
            Some("success")
        );
    }
}
