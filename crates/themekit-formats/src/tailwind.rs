//! Utility-framework configuration generation.
//!
//! Produces a `module.exports` config extending the framework's theme
//! with the document's semantic color mapping, full per-step scale
//! exposure when the document defines scales, and keyframe/animation
//! passthrough. Every color is a `var(--token)` indirection into the
//! generated stylesheet so runtime mode switching keeps working.

use serde_json::{json, Map, Value};

use crate::input::{GenerateError, GenerateOptions, GeneratorInput};
use themekit_resolve::Mode;

pub fn generate_tailwind(
    input: &GeneratorInput,
    _options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let doc = input.doc;
    let mut colors = Map::new();

    for group in [&doc.semantic, &doc.status, &doc.effects] {
        // Union of both modes; values point at the custom property so the
        // generated stylesheet stays the single source of concrete colors.
        for mode in Mode::ALL {
            for name in group.get(mode).keys() {
                colors.insert(name.clone(), json!(format!("var(--{})", name)));
            }
        }
    }

    for (name, scale) in &doc.scales {
        // Steps also go through the custom property, union of both modes'
        // ladders, so a dark-only ladder still surfaces and mode
        // switching stays a stylesheet concern.
        let mut steps = Map::new();
        for ladders in [&scale.light, &scale.dark] {
            if let Some(ladder) = &ladders.steps {
                for i in 1..=ladder.len() {
                    steps.insert(format!("{}", i), json!(format!("var(--{}-{})", name, i)));
                }
            }
            if let Some(ladder) = &ladders.alpha {
                for i in 1..=ladder.len() {
                    steps.insert(format!("a{}", i), json!(format!("var(--{}-a{})", name, i)));
                }
            }
        }
        if !steps.is_empty() {
            colors.insert(name.clone(), Value::Object(steps));
        }
    }

    let mut extend = Map::new();
    extend.insert("colors".to_string(), Value::Object(colors));

    if !doc.animations.keyframes.is_empty() {
        extend.insert(
            "keyframes".to_string(),
            serde_json::to_value(&doc.animations.keyframes)?,
        );
    }
    if !doc.animations.timing.is_empty() {
        extend.insert(
            "animation".to_string(),
            serde_json::to_value(&doc.animations.timing)?,
        );
    }

    let config = json!({ "theme": { "extend": extend } });
    let body = serde_json::to_string_pretty(&config)?;
    Ok(format!("module.exports = {};\n", body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_resolve::ThemeDocument;

    fn doc() -> ThemeDocument {
        ThemeDocument::from_yaml(
            r##"
version: "2"
id: tw-fixture
scales:
  teal:
    hue: "185"
    light:
      steps: ["#a", "#b", "#c"]
      alpha: ["#a1", "#b1", "#c1"]
semantic:
  light:
    primary: { $ref: "scales.teal.steps.3" }
  dark:
    primary: "#0d9b8a"
status:
  light:
    success: "#16a34a"
animations:
  keyframes:
    shimmer:
      "0%": { opacity: "0.4" }
  timing:
    shimmer: "shimmer 1.5s linear infinite"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_semantic_colors_map_to_custom_properties() {
        let doc = doc();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tailwind(&input, &GenerateOptions::default()).unwrap();
        assert!(out.starts_with("module.exports = {"));
        assert!(out.contains("\"primary\": \"var(--primary)\""));
        assert!(out.contains("\"success\": \"var(--success)\""));
    }

    #[test]
    fn test_scales_exposed_per_step() {
        let doc = doc();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tailwind(&input, &GenerateOptions::default()).unwrap();
        let json_body = out
            .trim_start_matches("module.exports = ")
            .trim_end_matches(";\n");
        let value: Value = serde_json::from_str(json_body).unwrap();
        let teal = &value["theme"]["extend"]["colors"]["teal"];
        assert_eq!(teal["1"], "var(--teal-1)");
        assert_eq!(teal["3"], "var(--teal-3)");
        assert_eq!(teal["a2"], "var(--teal-a2)");
    }

    #[test]
    fn test_dark_only_ladder_still_exposed() {
        let doc = ThemeDocument::from_yaml(
            r##"
version: "2"
id: night
scales:
  ink:
    hue: "240"
    dark:
      steps: ["#0a0a14", "#11111f"]
"##,
        )
        .unwrap();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tailwind(&input, &GenerateOptions::default()).unwrap();
        assert!(out.contains("\"1\": \"var(--ink-1)\""));
        assert!(out.contains("\"2\": \"var(--ink-2)\""));
    }

    #[test]
    fn test_animation_passthrough() {
        let doc = doc();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tailwind(&input, &GenerateOptions::default()).unwrap();
        assert!(out.contains("\"shimmer\": \"shimmer 1.5s linear infinite\""));
        assert!(out.contains("\"keyframes\""));
    }

    #[test]
    fn test_no_scales_means_no_step_entries() {
        let doc = ThemeDocument::from_yaml(
            "version: \"2\"\nid: flat\nsemantic:\n  light:\n    primary: \"#123456\"\n",
        )
        .unwrap();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tailwind(&input, &GenerateOptions::default()).unwrap();
        assert!(!out.contains("\"1\":"));
    }
}
