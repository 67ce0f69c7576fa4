//! CLI surface behavior that goes beyond a single library call.

use clap::Parser;
use themekit::cli::{run, Cli};

#[test]
fn generate_all_writes_every_format_plus_pipeline_config() {
    let tmp = tempfile::tempdir().unwrap();
    let theme = tmp.path().join("theme.yaml");
    std::fs::write(
        &theme,
        "version: \"2\"\nid: t\nname: T\ncategory: test\nsemantic:\n  light:\n    primary: \"#12a594\"\n",
    )
    .unwrap();
    let out = tmp.path().join("out");

    let cli = Cli::try_parse_from([
        "themekit",
        "generate",
        theme.to_str().unwrap(),
        "--all",
        out.to_str().unwrap(),
    ])
    .unwrap();
    run(cli).unwrap();

    for file in [
        "css.css",
        "scss.scss",
        "tailwind.js",
        "design-tool.json",
        "tokens.json",
        "tokens.config.json",
    ] {
        assert!(out.join(file).is_file(), "{} missing", file);
    }

    let config: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.join("tokens.config.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(config["source"][0], "tokens.json");
    assert_eq!(config["platforms"]["css"]["prefix"], "theme");
}
