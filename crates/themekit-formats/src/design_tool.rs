//! Design-tool interchange document generation.
//!
//! Emits the JSON shape design tools import: theme-set metadata plus
//! per-mode token groups, with typography and color groups kept
//! separate. Token leaves use `{ value, type }` objects.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::input::{GenerateError, GenerateOptions, GeneratorInput};
use themekit_resolve::Mode;

#[derive(Debug, Serialize)]
struct DesignToolDocument<'a> {
    #[serde(rename = "$metadata")]
    metadata: Metadata<'a>,
    #[serde(rename = "$themes")]
    themes: Vec<ThemeSet>,
    #[serde(flatten)]
    sets: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    #[serde(rename = "tokenSetOrder")]
    token_set_order: Vec<String>,
    name: &'a str,
    id: &'a str,
    category: &'a str,
}

#[derive(Debug, Serialize)]
struct ThemeSet {
    name: String,
    #[serde(rename = "selectedTokenSets")]
    selected_token_sets: BTreeMap<String, &'static str>,
}

pub fn generate_design_tool(
    input: &GeneratorInput,
    _options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let doc = input.doc;
    let mut sets = BTreeMap::new();
    let mut order = Vec::new();
    let mut themes = Vec::new();

    for mode in Mode::ALL {
        let set_name = mode.as_str().to_string();
        let snap = input.snapshot(mode);

        let mut colors = BTreeMap::new();
        for (name, value) in &snap.vars {
            colors.insert(
                name.clone(),
                json!({ "value": value, "type": "color" }),
            );
        }

        let mut typography = BTreeMap::new();
        for (name, value) in &doc.typography {
            typography.insert(
                name.clone(),
                json!({ "value": value, "type": "typography" }),
            );
        }

        sets.insert(
            set_name.clone(),
            json!({ "color": colors, "typography": typography }),
        );
        order.push(set_name.clone());
        themes.push(ThemeSet {
            name: set_name.clone(),
            selected_token_sets: BTreeMap::from([(set_name, "enabled")]),
        });
    }

    let document = DesignToolDocument {
        metadata: Metadata {
            token_set_order: order,
            name: &doc.name,
            id: &doc.id,
            category: &doc.category,
        },
        themes,
        sets,
    };

    let mut out = serde_json::to_string_pretty(&document)?;
    out.push('\n');
    Ok(out)
}
