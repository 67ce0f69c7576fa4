//! Preprocessor variable and map generation.
//!
//! Emits `$<prefix>-<name>` variables for the light snapshot plus two
//! maps (`$<prefix>-colors`, `$<prefix>-dark-colors`) for mode-aware
//! consumers. The prefix is configurable via
//! [`GenerateOptions::prefix`](crate::GenerateOptions).

use std::fmt::Write;

use crate::input::{GenerateError, GenerateOptions, GeneratorInput};

pub fn generate_scss(
    input: &GeneratorInput,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let prefix = &options.prefix;
    let mut out = String::new();

    for (name, value) in &input.light.vars {
        let _ = writeln!(out, "${}-{}: {};", prefix, name, value);
    }

    for (suffix, vars) in [("colors", &input.light.vars), ("dark-colors", &input.dark.vars)] {
        let _ = write!(out, "\n${}-{}: (\n", prefix, suffix);
        for (name, value) in vars {
            let _ = writeln!(out, "  \"{}\": {},", name, value);
        }
        out.push_str(");\n");
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_resolve::ThemeDocument;

    fn input_doc() -> ThemeDocument {
        ThemeDocument::from_yaml(
            r##"
version: "2"
id: scss-fixture
semantic:
  light:
    primary: "#12a594"
  dark:
    primary: "#0d9b8a"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_default_prefix() {
        let doc = input_doc();
        let input = GeneratorInput::from_document(&doc);
        let scss = generate_scss(&input, &GenerateOptions::default()).unwrap();
        assert!(scss.contains("$theme-primary: #12a594;\n"));
        assert!(scss.contains("$theme-colors: (\n"));
        assert!(scss.contains("$theme-dark-colors: (\n"));
        assert!(scss.contains("  \"primary\": #0d9b8a,\n"));
    }

    #[test]
    fn test_custom_prefix() {
        let doc = input_doc();
        let input = GeneratorInput::from_document(&doc);
        let options = GenerateOptions {
            prefix: "tk".to_string(),
            ..Default::default()
        };
        let scss = generate_scss(&input, &options).unwrap();
        assert!(scss.contains("$tk-primary: #12a594;\n"));
        assert!(!scss.contains("$theme-"));
    }
}
