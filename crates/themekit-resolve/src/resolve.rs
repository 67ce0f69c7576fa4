//! Reference resolution for theme documents.
//!
//! Tokens may point at other locations in the same document via `$ref`
//! dot-paths. Because documents can self-reference, resolution is modeled
//! as an explicit chain walk with a visited set and a hard depth bound —
//! a cyclic document must produce an error, never a loop or stack
//! overflow.
//!
//! Addressable paths:
//!
//! | Path shape | Resolves to |
//! |------------|-------------|
//! | `scales.<name>.steps.<1..12>` | opaque scale step for the mode |
//! | `scales.<name>.alpha.<1..12>` | alpha scale step for the mode |
//! | `semantic.<token>` | semantic token (may chain further) |
//! | `status.<token>` | status token (may chain further) |
//! | `effects.<token>` | effect token (may chain further) |
//!
//! Reference paths originate from untrusted theme files, so segments
//! named after object-prototype machinery are rejected outright.

use std::collections::HashSet;

use crate::document::{Mode, ThemeDocument, TokenGroup, TokenValue};

/// Maximum number of hops a single resolution chain may take.
pub const MAX_REF_DEPTH: usize = 16;

/// Path segments rejected unconditionally. These names can reach
/// document-graph metaproperties in the systems these theme files are
/// shared with, so a path containing them is never looked up.
const UNSAFE_SEGMENTS: &[&str] = &["__proto__", "prototype", "constructor"];

/// Error raised while resolving one reference chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A path was revisited within a single resolution chain.
    #[error("circular reference: {}", chain.join(" -> "))]
    Circular { chain: Vec<String> },
    /// A dot-path does not name an existing node.
    #[error("reference path '{path}' does not resolve to a node")]
    InvalidPath { path: String },
    /// A path segment is one of the reserved metaproperty names.
    #[error("reference path '{path}' uses reserved segment '{segment}'")]
    UnsafePath { path: String, segment: String },
    /// The chain exceeded [`MAX_REF_DEPTH`] hops without reaching a literal.
    #[error("reference chain exceeded {limit} hops")]
    MaxDepth { limit: usize },
}

/// One entry of a bulk resolution that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveWarning {
    /// Token name within the group.
    pub token: String,
    pub error: ResolveError,
}

/// Result of resolving a token group: every entry resolved independently,
/// failures carried through rather than aborting siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGroup {
    /// Token name to concrete value. Entries that failed to resolve keep
    /// their raw reference path text so output stays greppable.
    pub values: std::collections::BTreeMap<String, String>,
    pub warnings: Vec<ResolveWarning>,
}

/// Resolves a single token value to a concrete string.
///
/// Literals pass through unchanged; references are chased through the
/// document until a literal is reached or an error is hit.
///
/// # Example
///
/// ```rust
/// use themekit_resolve::{resolve, Mode, ThemeDocument, TokenValue};
///
/// let doc = ThemeDocument::from_yaml(r##"
/// version: "2"
/// id: t
/// semantic:
///   light:
///     background: "#ffffff"
/// "##).unwrap();
///
/// let v = resolve(&TokenValue::reference("semantic.background"), &doc, Mode::Light);
/// assert_eq!(v.unwrap(), "#ffffff");
/// ```
pub fn resolve(
    value: &TokenValue,
    doc: &ThemeDocument,
    mode: Mode,
) -> Result<String, ResolveError> {
    match value {
        TokenValue::Literal(s) => Ok(s.clone()),
        TokenValue::Reference { path } => resolve_path(path, doc, mode),
    }
}

/// Resolves a dot-path to its concrete value, following chained references.
pub fn resolve_path(path: &str, doc: &ThemeDocument, mode: Mode) -> Result<String, ResolveError> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut chain: Vec<String> = Vec::new();
    let mut current = path.to_string();

    loop {
        if chain.len() >= MAX_REF_DEPTH {
            return Err(ResolveError::MaxDepth {
                limit: MAX_REF_DEPTH,
            });
        }
        if !visited.insert(current.clone()) {
            chain.push(current);
            return Err(ResolveError::Circular { chain });
        }
        chain.push(current.clone());

        match lookup(&current, doc, mode)? {
            Node::Literal(value) => return Ok(value),
            Node::Reference(next) => current = next,
        }
    }
}

/// Resolves every entry of a token group independently.
///
/// One entry's failure must not abort the others: failed entries keep
/// their reference path text and the error is recorded as a warning, so
/// callers decide strictness.
pub fn resolve_group(group: &TokenGroup, doc: &ThemeDocument, mode: Mode) -> ResolvedGroup {
    let mut resolved = ResolvedGroup::default();
    for (name, value) in group {
        match resolve(value, doc, mode) {
            Ok(concrete) => {
                resolved.values.insert(name.clone(), concrete);
            }
            Err(error) => {
                let as_is = match value {
                    TokenValue::Reference { path } => path.clone(),
                    TokenValue::Literal(s) => s.clone(),
                };
                resolved.values.insert(name.clone(), as_is);
                resolved.warnings.push(ResolveWarning {
                    token: name.clone(),
                    error,
                });
            }
        }
    }
    resolved
}

/// One hop of a resolution chain.
enum Node {
    Literal(String),
    Reference(String),
}

/// Looks up a single dot-path without following further references.
fn lookup(path: &str, doc: &ThemeDocument, mode: Mode) -> Result<Node, ResolveError> {
    let segments: Vec<&str> = path.split('.').collect();
    for segment in &segments {
        if UNSAFE_SEGMENTS.contains(segment) {
            return Err(ResolveError::UnsafePath {
                path: path.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    let invalid = || ResolveError::InvalidPath {
        path: path.to_string(),
    };

    match segments.as_slice() {
        ["scales", name, ladder, step] => {
            let scale = doc.scales.get(*name).ok_or_else(invalid)?;
            let ladders = scale.ladders(mode);
            let steps = match *ladder {
                "steps" => ladders.steps.as_ref(),
                "alpha" => ladders.alpha.as_ref(),
                _ => None,
            }
            .ok_or_else(invalid)?;
            let index: usize = step.parse().map_err(|_| invalid())?;
            if index < 1 || index > steps.len() {
                return Err(invalid());
            }
            Ok(Node::Literal(steps[index - 1].clone()))
        }
        [group, token] => {
            let tokens = doc.group(group).ok_or_else(invalid)?.get(mode);
            match tokens.get(*token).ok_or_else(invalid)? {
                TokenValue::Literal(s) => Ok(Node::Literal(s.clone())),
                TokenValue::Reference { path } => Ok(Node::Reference(path.clone())),
            }
        }
        _ => Err(invalid()),
    }
}
