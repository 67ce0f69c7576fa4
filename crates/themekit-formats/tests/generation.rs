//! Cross-format generation behavior.

use insta::assert_snapshot;
use themekit_formats::{generate, generate_all, GenerateOptions, GeneratorInput};
use themekit_resolve::ThemeDocument;

fn fixture() -> ThemeDocument {
    ThemeDocument::from_yaml(
        r##"
version: "2"
id: ocean-glass
name: Ocean Glass
category: glass
semantic:
  light:
    background: "#fdfdfd"
    primary: "#12a594"
  dark:
    background: "#101211"
"##,
    )
    .unwrap()
}

#[test]
fn css_output_shape() {
    let doc = fixture();
    let input = GeneratorInput::from_document(&doc);
    let css = generate("css", &input, &GenerateOptions::default()).unwrap();

    assert_snapshot!(css, @r##"
    :root {
      --background: #fdfdfd;
      --primary: #12a594;
    }

    .dark {
      --background: #101211;
    }
    "##);
}

#[test]
fn every_format_regenerates_byte_identical() {
    let doc = fixture();
    let options = GenerateOptions::default();
    let first = generate_all(&GeneratorInput::from_document(&doc), &options);
    let second = generate_all(&GeneratorInput::from_document(&doc), &options);

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.format, b.format);
        assert_eq!(
            a.output.as_ref().unwrap(),
            b.output.as_ref().unwrap(),
            "{} regeneration differs",
            a.format
        );
    }
}

#[test]
fn json_formats_parse() {
    let doc = fixture();
    let input = GeneratorInput::from_document(&doc);
    for name in ["design-tool", "tokens"] {
        let out = generate(name, &input, &GenerateOptions::default()).unwrap();
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&out);
        assert!(parsed.is_ok(), "{} output is not valid JSON", name);
    }
}
