//! Schema migration from the legacy flat form to the extended form.
//!
//! Version-1 documents carry only flat `light`/`dark` color maps. The
//! migrator lifts those maps into semantic token groups, synthesizes the
//! extended tokens version 1 never had (hover/surface/overlay variants
//! derived from their base values), and injects a default status palette
//! when the source defines none. Typography and shape settings are
//! carried verbatim, and the legacy flat maps are retained on the new
//! document for backward-reading callers.
//!
//! Migration is idempotent: a version-2 document is returned unchanged
//! (identity, not a copy of different shape), so
//! `migrate(migrate(doc)) == migrate(doc)` always holds.

use crate::color::{darken, lighten, with_alpha};
use crate::document::{Mode, ThemeDocument, TokenValue};

/// Channel shift applied to hover variants: darken in light mode,
/// lighten in dark mode.
const HOVER_AMOUNT: f32 = 0.08;

/// How an extended token is derived from its base.
#[derive(Debug, Clone, Copy)]
enum Derive {
    /// Shift toward the mode's hover direction.
    Hover,
    /// Fixed two-digit hex alpha suffix on the base value.
    Alpha(&'static str),
}

/// Extended tokens synthesized during migration: target name, base token,
/// transform. Bases missing from the source are skipped.
const EXTENDED_TOKENS: &[(&str, &str, Derive)] = &[
    ("primary-hover", "primary", Derive::Hover),
    ("secondary-hover", "secondary", Derive::Hover),
    ("card-hover", "card", Derive::Hover),
    ("surface", "background", Derive::Alpha("1a")),
    ("overlay", "background", Derive::Alpha("cc")),
];

/// Default status palette injected when a legacy document has none.
const STATUS_DEFAULTS: &[(&str, &str, &str)] = &[
    // (token, light, dark)
    ("success", "#16a34a", "#4ade80"),
    ("warning", "#d97706", "#fbbf24"),
    ("info", "#0284c7", "#38bdf8"),
];

/// Upgrades a legacy document to the extended schema.
///
/// Version-2 input is returned unchanged.
///
/// # Example
///
/// ```rust
/// use themekit_resolve::{migrate, Mode, ThemeDocument};
///
/// let legacy = ThemeDocument::from_yaml(r##"
/// version: "1"
/// id: classic-blue
/// name: Classic Blue
/// category: classic
/// colors:
///   light:
///     primary: "#2563eb"
///     background: "#ffffff"
/// "##).unwrap();
///
/// let doc = migrate(legacy);
/// assert_eq!(doc.version, "2");
/// assert!(doc.semantic.light.contains_key("primary-hover"));
/// // Legacy flat map retained.
/// assert_eq!(doc.colors.light["primary"], "#2563eb");
/// ```
pub fn migrate(doc: ThemeDocument) -> ThemeDocument {
    if !doc.is_legacy() {
        return doc;
    }

    let mut out = ThemeDocument {
        version: "2".to_string(),
        id: doc.id,
        name: doc.name,
        category: doc.category,
        scales: doc.scales,
        semantic: Default::default(),
        status: doc.status,
        effects: doc.effects,
        animations: doc.animations,
        typography: doc.typography,
        shape: doc.shape,
        colors: doc.colors,
    };

    for mode in Mode::ALL {
        let flat = out.colors.get(mode).clone();
        let group = out.semantic.get_mut(mode);

        for (name, value) in &flat {
            group.insert(name.clone(), TokenValue::literal(value.clone()));
        }

        for (target, base, derive) in EXTENDED_TOKENS {
            if group.contains_key(*target) {
                continue;
            }
            let Some(base_value) = flat.get(*base) else {
                continue;
            };
            let derived = match (derive, mode) {
                (Derive::Hover, Mode::Light) => darken(base_value, HOVER_AMOUNT),
                (Derive::Hover, Mode::Dark) => lighten(base_value, HOVER_AMOUNT),
                (Derive::Alpha(alpha), _) => with_alpha(base_value, alpha),
            };
            group.insert(target.to_string(), TokenValue::literal(derived));
        }

        let status = out.status.get_mut(mode);
        if status.is_empty() {
            for (token, light, dark) in STATUS_DEFAULTS {
                // A legacy flat map may already name a status color; keep it.
                if let Some(existing) = flat.get(*token) {
                    status.insert(token.to_string(), TokenValue::literal(existing.clone()));
                } else {
                    let value = match mode {
                        Mode::Light => *light,
                        Mode::Dark => *dark,
                    };
                    status.insert(token.to_string(), TokenValue::literal(value));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> ThemeDocument {
        ThemeDocument::from_yaml(
            r##"
version: "1"
id: classic-blue
name: Classic Blue
category: classic
typography:
  font-sans: "Inter, sans-serif"
shape:
  radius: "0.5rem"
colors:
  light:
    primary: "#2563eb"
    secondary: "#64748b"
    background: "#ffffff"
  dark:
    primary: "#3b82f6"
    background: "#0a0a0a"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_version_2_is_identity() {
        let doc = ThemeDocument::from_yaml("version: \"2\"\nid: v2\n").unwrap();
        let before = doc.clone();
        assert_eq!(migrate(doc), before);
    }

    #[test]
    fn test_migration_is_idempotent() {
        let once = migrate(legacy());
        let twice = migrate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flat_colors_become_semantic_tokens() {
        let doc = migrate(legacy());
        assert_eq!(doc.version, "2");
        assert_eq!(
            doc.semantic.light["primary"],
            TokenValue::literal("#2563eb")
        );
        assert_eq!(doc.semantic.dark["primary"], TokenValue::literal("#3b82f6"));
    }

    #[test]
    fn test_hover_directions() {
        let doc = migrate(legacy());
        let TokenValue::Literal(light_hover) = doc.semantic.light["primary-hover"].clone() else {
            panic!("expected literal");
        };
        let TokenValue::Literal(dark_hover) = doc.semantic.dark["primary-hover"].clone() else {
            panic!("expected literal");
        };
        // #2563eb shifted down, #3b82f6 shifted up.
        assert_eq!(light_hover, "#114fd7");
        assert_eq!(dark_hover, "#4f96ff");
    }

    #[test]
    fn test_surface_and_overlay_get_alpha() {
        let doc = migrate(legacy());
        assert_eq!(
            doc.semantic.light["surface"],
            TokenValue::literal("#ffffff1a")
        );
        assert_eq!(
            doc.semantic.light["overlay"],
            TokenValue::literal("#ffffffcc")
        );
    }

    #[test]
    fn test_missing_base_skips_extended_token() {
        // Dark map has no "secondary", so no "secondary-hover" either.
        let doc = migrate(legacy());
        assert!(!doc.semantic.dark.contains_key("secondary-hover"));
        assert!(doc.semantic.light.contains_key("secondary-hover"));
    }

    #[test]
    fn test_status_defaults_injected() {
        let doc = migrate(legacy());
        assert_eq!(
            doc.status.light["success"],
            TokenValue::literal("#16a34a")
        );
        assert_eq!(doc.status.dark["info"], TokenValue::literal("#38bdf8"));
    }

    #[test]
    fn test_existing_status_palette_kept() {
        let mut legacy = legacy();
        legacy
            .status
            .light
            .insert("success".into(), TokenValue::literal("#00ff00"));
        let doc = migrate(legacy);
        assert_eq!(doc.status.light["success"], TokenValue::literal("#00ff00"));
        // Non-empty group means no injection at all for that mode.
        assert!(!doc.status.light.contains_key("warning"));
    }

    #[test]
    fn test_non_ascii_color_values_survive_migration() {
        // Theme files are untrusted input; a value that merely looks
        // hex-shaped must pass through the derivation untransformed.
        let doc = migrate(
            ThemeDocument::from_yaml(
                "version: \"1\"\nid: odd\nname: Odd\ncategory: test\ncolors:\n  light:\n    primary: \"#€abc\"\n    background: \"#丸丸\"\n",
            )
            .unwrap(),
        );
        assert_eq!(
            doc.semantic.light["primary-hover"],
            TokenValue::literal("#€abc")
        );
        assert_eq!(doc.semantic.light["surface"], TokenValue::literal("#丸丸"));
    }

    #[test]
    fn test_typography_and_shape_carried() {
        let doc = migrate(legacy());
        assert_eq!(doc.typography["font-sans"], "Inter, sans-serif");
        assert_eq!(doc.shape["radius"], "0.5rem");
    }
}
