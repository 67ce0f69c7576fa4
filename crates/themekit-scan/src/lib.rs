//! Project color scanner.
//!
//! Finds hard-coded color usages in a project's source tree and maps
//! each against the active theme's compliance rules:
//!
//! - [`walk`]: source-tree collection with skip-list and extension
//!   filtering.
//! - [`rules`]: the static table of well-known color+shade pairs.
//! - [`classify`]: the dynamic hue/shade classifier used in full depth.
//! - [`scan`](mod@scan): the scanner itself and its report types.
//!
//! The scanner only reads; rewriting matched occurrences is the backup &
//! rewrite engine's job, driven by the [`ScanReport`] this crate
//! produces.
//!
//! ```rust,no_run
//! use themekit_scan::{scan, ScanDepth, ScanOptions};
//!
//! let options = ScanOptions { depth: ScanDepth::Full, ..Default::default() };
//! let report = scan(std::path::Path::new("."), &options).unwrap();
//! for finding in &report.non_compliant {
//!     println!("{}:{} {} -> {:?}", finding.file, finding.line, finding.matched, finding.suggestion);
//! }
//! ```

pub mod classify;
pub mod rules;
pub mod scan;
pub mod walk;

pub use classify::{bucket, dynamic_suggestion, parse_candidate, ColorCandidate, FamilyBucket};
pub use rules::{static_rule, ComplianceRule, STATIC_RULES};
pub use scan::{
    scan, FileFindings, MatchEntry, ScanDepth, ScanError, ScanFinding, ScanOptions, ScanReport,
};
pub use walk::{collect_files, SKIP_DIRS};
