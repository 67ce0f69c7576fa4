//! Theme document resolution: the data core of themekit.
//!
//! This crate owns the theme document model and every pure transformation
//! over it:
//!
//! - [`document`]: the versioned [`ThemeDocument`] artifact, its
//!   mode-partitioned token groups and 12-step color scales.
//! - [`resolve`](mod@resolve): `$ref` dot-path resolution with cycle
//!   detection, an unsafe-segment guard, and a hard depth bound.
//! - [`scale`]: flat expansion of scale ladders and composition of
//!   per-mode [`ResolvedSnapshot`]s.
//! - [`migrate`](mod@migrate): the version-1 → version-2 schema upgrade.
//! - [`validate`](mod@validate): collect-all-errors structural and
//!   referential checking.
//!
//! Everything here is pure: documents are immutable once loaded, and a
//! new document is produced by migration rather than mutated in place.
//! Calls are safe to issue concurrently as long as each receives its own
//! document instance.
//!
//! # Quick start
//!
//! ```rust
//! use themekit_resolve::{migrate, snapshot, validate, Mode, ThemeDocument};
//!
//! let doc = ThemeDocument::from_yaml(r##"
//! version: "2"
//! id: ocean-glass
//! name: Ocean Glass
//! category: glass
//! semantic:
//!   light:
//!     background: "#fdfdfd"
//!     primary: "#12a594"
//! "##).unwrap();
//!
//! let doc = migrate(doc);           // identity for version 2
//! assert!(validate(Some(&doc)).valid);
//!
//! let snap = snapshot(&doc, Mode::Light);
//! assert_eq!(snap.vars["primary"], "#12a594");
//! ```

pub mod color;
pub mod document;
pub mod migrate;
pub mod resolve;
pub mod scale;
pub mod validate;

pub use document::{
    Animations, ColorScale, DocumentError, Keyframes, Mode, ModeColors, ModeTokens, ScaleLadders,
    ThemeDocument, TokenGroup, TokenValue,
};
pub use migrate::migrate;
pub use resolve::{
    resolve, resolve_group, resolve_path, ResolveError, ResolveWarning, ResolvedGroup,
    MAX_REF_DEPTH,
};
pub use scale::{expand_scales, snapshot, ResolvedSnapshot};
pub use validate::{validate, Validation};
