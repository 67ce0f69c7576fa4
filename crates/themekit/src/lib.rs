//! Project-level theming: configuration, theme registry, backups, and
//! the rebuild engine that ties them to the resolution and generation
//! crates.
//!
//! A themekit project is a directory with a `themekit.yaml` naming the
//! active theme and a `.themekit/` state directory holding themes and
//! backups. The central operation is [`rebuild`]: switch the project to
//! another theme, regenerate its artifacts, and rewrite hard-coded color
//! usages in the source tree — after snapshotting everything the
//! operation is about to touch, so [`rollback`] can always undo it.
//!
//! The pure machinery lives in the sibling crates and is re-exported
//! here for convenience:
//!
//! - `themekit_resolve`: document model, `$ref` resolution, migration,
//!   validation.
//! - `themekit_formats`: deterministic artifact generators.
//! - `themekit_scan`: the source-tree color scanner.

pub mod backup;
pub mod cli;
pub mod config;
pub mod rebuild;
pub mod registry;

pub use backup::{
    create_backup, find_backup, list_backups, restore_backup, BackupError, BackupManifest,
};
pub use config::{Artifacts, ConfigError, ProjectConfig, ScanSettings, CONFIG_FILE, STATE_DIR};
pub use rebuild::{
    rebuild, rollback, RebuildError, RebuildOptions, RebuildReport, RollbackReport,
};
pub use registry::{RegistryError, ThemeRegistry, THEME_EXTENSIONS};

pub use themekit_formats as formats;
pub use themekit_resolve as resolve;
pub use themekit_scan as scan;
