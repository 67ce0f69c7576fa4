//! Structural and referential validation of theme documents.
//!
//! Validation collects every problem it finds instead of stopping at the
//! first, so a single invalid document yields a complete error list a
//! caller can fix in one pass.

use crate::document::{Mode, ThemeDocument, TokenValue};
use crate::resolve::resolve;

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks a theme document's structural and referential integrity.
///
/// A `None` document yields exactly one top-level error. Otherwise the
/// checks run in order — required fields, kebab-case id, and every
/// reference in every group and mode — with errors collected, never
/// thrown one at a time.
///
/// # Example
///
/// ```rust
/// use themekit_resolve::{validate, ThemeDocument};
///
/// let doc = ThemeDocument::from_yaml(r##"
/// version: "2"
/// id: Bad_Id
/// semantic:
///   light:
///     primary: { $ref: "semantic.missing" }
/// "##).unwrap();
///
/// let result = validate(Some(&doc));
/// assert!(!result.valid);
/// // Missing name, missing category, bad id, dangling ref.
/// assert_eq!(result.errors.len(), 4);
/// ```
pub fn validate(doc: Option<&ThemeDocument>) -> Validation {
    let Some(doc) = doc else {
        return Validation {
            valid: false,
            errors: vec!["theme document is missing".to_string()],
        };
    };

    let mut errors = Vec::new();

    for (field, value) in [
        ("name", &doc.name),
        ("id", &doc.id),
        ("category", &doc.category),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("missing required field '{}'", field));
        }
    }

    if !doc.id.trim().is_empty() && !is_kebab_case(&doc.id) {
        errors.push(format!(
            "id '{}' is not a kebab-case identifier",
            doc.id
        ));
    }

    for (group_name, group) in ThemeDocument::GROUPS
        .iter()
        .filter_map(|name| doc.group(name).map(|g| (*name, g)))
    {
        for mode in Mode::ALL {
            for (token, value) in group.get(mode) {
                if let TokenValue::Reference { .. } = value {
                    if let Err(e) = resolve(value, doc, mode) {
                        errors.push(format!(
                            "{}.{} ({} mode): {}",
                            group_name, token, mode, e
                        ));
                    }
                }
            }
        }
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Kebab-case: lowercase alphanumeric runs joined by single hyphens,
/// starting with a letter.
fn is_kebab_case(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    let mut prev_hyphen = false;
    for c in chars {
        match c {
            'a'..='z' | '0'..='9' => prev_hyphen = false,
            '-' if !prev_hyphen => prev_hyphen = true,
            _ => return false,
        }
    }
    !id.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_single_error() {
        let result = validate(None);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_valid_document() {
        let doc = ThemeDocument::from_yaml(
            r##"
version: "2"
id: ocean-glass
name: Ocean Glass
category: glass
semantic:
  light:
    primary: "#12a594"
"##,
        )
        .unwrap();
        let result = validate(Some(&doc));
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_all_errors_collected_in_one_call() {
        // Two missing required fields plus one invalid reference.
        let doc = ThemeDocument::from_yaml(
            r##"
version: "2"
id: has-id
semantic:
  light:
    primary: { $ref: "semantic.nope" }
"##,
        )
        .unwrap();
        let result = validate(Some(&doc));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(|e| e.contains("'name'")));
        assert!(result.errors.iter().any(|e| e.contains("'category'")));
        assert!(result.errors.iter().any(|e| e.contains("semantic.nope")));
    }

    #[test]
    fn test_kebab_case_enforced() {
        for bad in ["Bad", "snake_case", "-leading", "trailing-", "double--dash", "9to5"] {
            assert!(!is_kebab_case(bad), "{} should be rejected", bad);
        }
        for good in ["ocean", "ocean-glass", "mono2", "a-b-c"] {
            assert!(is_kebab_case(good), "{} should be accepted", good);
        }
    }

    #[test]
    fn test_cycle_reported_not_thrown() {
        let doc = ThemeDocument::from_yaml(
            r##"
version: "2"
id: cyclic
name: Cyclic
category: test
semantic:
  light:
    a: { $ref: "semantic.b" }
    b: { $ref: "semantic.a" }
"##,
        )
        .unwrap();
        let result = validate(Some(&doc));
        assert!(!result.valid);
        // Both tokens report their cycle; siblings don't mask each other.
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("circular"));
    }
}
