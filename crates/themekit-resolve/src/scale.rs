//! Color scale expansion and snapshot composition.
//!
//! A [`ColorScale`](crate::document::ColorScale) defines up to two 12-step
//! ladders per mode. Expansion flattens every scale into `<name>-<step>` /
//! `<name>-a<step>` variables; a [`ResolvedSnapshot`] composes that with
//! group resolution and animation timing into the flat per-mode map the
//! generators consume.

use std::collections::BTreeMap;

use crate::document::{ColorScale, Mode, ThemeDocument};
use crate::resolve::{resolve_group, ResolveWarning};

/// Expands every scale into flat per-step variables for one mode.
///
/// Opaque steps emit `<name>-<step>`, alpha steps `<name>-a<step>`, both
/// indexed from 1. A missing ladder contributes nothing — that is not an
/// error. Expansion is pure and order-independent across scales (the
/// output map is sorted).
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use themekit_resolve::{expand_scales, ColorScale, Mode, ScaleLadders};
///
/// let mut scales = BTreeMap::new();
/// scales.insert("mint".to_string(), ColorScale {
///     hue: "160".into(),
///     light: ScaleLadders {
///         steps: Some(vec!["#f0fdf8".into(), "#dcfcef".into()]),
///         alpha: None,
///     },
///     dark: ScaleLadders::default(),
/// });
///
/// let flat = expand_scales(&scales, Mode::Light);
/// assert_eq!(flat["mint-1"], "#f0fdf8");
/// assert_eq!(flat["mint-2"], "#dcfcef");
/// assert!(flat.get("mint-a1").is_none());
/// ```
pub fn expand_scales(
    scales: &BTreeMap<String, ColorScale>,
    mode: Mode,
) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for (name, scale) in scales {
        let ladders = scale.ladders(mode);
        if let Some(steps) = &ladders.steps {
            for (i, value) in steps.iter().enumerate() {
                flat.insert(format!("{}-{}", name, i + 1), value.clone());
            }
        }
        if let Some(alpha) = &ladders.alpha {
            for (i, value) in alpha.iter().enumerate() {
                flat.insert(format!("{}-a{}", name, i + 1), value.clone());
            }
        }
    }
    flat
}

/// The output of resolution for one mode: a flat variable map with all
/// references eliminated, scale steps expanded, and effect/animation
/// definitions flattened.
///
/// Produced fresh on every call; never persisted as a source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSnapshot {
    pub mode: Mode,
    /// Variable name to concrete value.
    pub vars: BTreeMap<String, String>,
    /// Warnings from entries that failed to resolve (carried through
    /// as-is, see [`resolve_group`]).
    pub warnings: Vec<ResolveWarning>,
}

/// Resolves a full document into the flat variable map for one mode.
///
/// Composition order (later entries win on name collision): scale steps,
/// semantic tokens, status tokens, effect tokens, animation timing
/// (`animation-<name>`).
pub fn snapshot(doc: &ThemeDocument, mode: Mode) -> ResolvedSnapshot {
    let mut vars = expand_scales(&doc.scales, mode);
    let mut warnings = Vec::new();

    for group in [&doc.semantic, &doc.status, &doc.effects] {
        let resolved = resolve_group(group.get(mode), doc, mode);
        vars.extend(resolved.values);
        warnings.extend(resolved.warnings);
    }

    // Legacy flat colors fill gaps for not-yet-migrated callers; grouped
    // tokens take precedence.
    for (name, value) in doc.colors.get(mode) {
        vars.entry(name.clone()).or_insert_with(|| value.clone());
    }

    for (name, timing) in &doc.animations.timing {
        vars.insert(format!("animation-{}", name), timing.clone());
    }

    ResolvedSnapshot {
        mode,
        vars,
        warnings,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::document::ScaleLadders;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn expansion_emits_one_entry_per_step(
            steps in proptest::collection::vec("#[0-9a-f]{6}", 0..=12),
            alpha in proptest::collection::vec("#[0-9a-f]{8}", 0..=12),
        ) {
            let mut scales = BTreeMap::new();
            let (expected, steps_opt, alpha_opt) = (
                steps.len() + alpha.len(),
                (!steps.is_empty()).then_some(steps),
                (!alpha.is_empty()).then_some(alpha),
            );
            scales.insert("hue".to_string(), ColorScale {
                hue: "0".into(),
                light: ScaleLadders { steps: steps_opt, alpha: alpha_opt },
                dark: ScaleLadders::default(),
            });
            prop_assert_eq!(expand_scales(&scales, Mode::Light).len(), expected);
        }
    }
}
