//! Flat token-interchange generation.
//!
//! Emits a build-pipeline-friendly token document where every leaf is a
//! `{ value }` object. Color grouping is configurable: nested splits
//! names on their first hyphen into group objects (`teal: { "9": ... }`),
//! flat keeps the resolved variable names as-is. The companion
//! [`pipeline_config`] payload tells the build pipeline where to find
//! the token document and what platforms to emit.

use serde_json::{json, Map, Value};

use crate::input::{GenerateError, GenerateOptions, GeneratorInput};
use themekit_resolve::Mode;

pub fn generate_tokens(
    input: &GeneratorInput,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let mut modes = Map::new();

    for mode in Mode::ALL {
        let snap = input.snapshot(mode);
        let colors = if options.nested_colors {
            nested(snap.vars.iter())
        } else {
            flat(snap.vars.iter())
        };
        modes.insert(mode.as_str().to_string(), colors);
    }

    let mut root = Map::new();
    root.insert("color".to_string(), Value::Object(modes));

    if !input.doc.typography.is_empty() {
        root.insert("font".to_string(), flat(input.doc.typography.iter()));
    }
    if !input.doc.shape.is_empty() {
        root.insert("size".to_string(), flat(input.doc.shape.iter()));
    }

    let mut out = serde_json::to_string_pretty(&Value::Object(root))?;
    out.push('\n');
    Ok(out)
}

/// Companion build-pipeline configuration for the token document.
pub fn pipeline_config(options: &GenerateOptions) -> Result<String, GenerateError> {
    let config = json!({
        "source": ["tokens.json"],
        "platforms": {
            "css": {
                "transformGroup": "css",
                "prefix": options.prefix,
                "files": [{
                    "destination": "variables.css",
                    "format": "css/variables"
                }]
            },
            "js": {
                "transformGroup": "js",
                "files": [{
                    "destination": "tokens.js",
                    "format": "javascript/es6"
                }]
            }
        }
    });
    let mut out = serde_json::to_string_pretty(&config)?;
    out.push('\n');
    Ok(out)
}

fn flat<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> Value {
    let mut map = Map::new();
    for (name, value) in entries {
        map.insert(name.clone(), json!({ "value": value }));
    }
    Value::Object(map)
}

/// Groups `teal-9` under `teal.9`; names without a hyphen stay top-level.
fn nested<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> Value {
    let mut map = Map::new();
    for (name, value) in entries {
        match name.split_once('-') {
            Some((group, rest)) => {
                let slot = map
                    .entry(group.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(group_map) = slot {
                    group_map.insert(rest.to_string(), json!({ "value": value }));
                }
            }
            None => {
                map.insert(name.clone(), json!({ "value": value }));
            }
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_resolve::ThemeDocument;

    fn doc() -> ThemeDocument {
        ThemeDocument::from_yaml(
            r##"
version: "2"
id: tok-fixture
scales:
  teal:
    hue: "185"
    light:
      steps: ["#a", "#b"]
semantic:
  light:
    primary: { $ref: "scales.teal.steps.2" }
shape:
  radius: "0.5rem"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_nested_grouping() {
        let doc = doc();
        let input = GeneratorInput::from_document(&doc);
        let out = generate_tokens(&input, &GenerateOptions::default()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["color"]["light"]["teal"]["2"]["value"], "#b");
        assert_eq!(value["color"]["light"]["primary"]["value"], "#b");
        assert_eq!(value["size"]["radius"]["value"], "0.5rem");
    }

    #[test]
    fn test_flat_grouping() {
        let doc = doc();
        let input = GeneratorInput::from_document(&doc);
        let options = GenerateOptions {
            nested_colors: false,
            ..Default::default()
        };
        let out = generate_tokens(&input, &options).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["color"]["light"]["teal-2"]["value"], "#b");
        assert!(value["color"]["light"]["teal"].is_null());
    }

    #[test]
    fn test_pipeline_config_carries_prefix() {
        let out = pipeline_config(&GenerateOptions {
            prefix: "tk".into(),
            ..Default::default()
        })
        .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["platforms"]["css"]["prefix"], "tk");
    }
}
