//! Command-line surface.
//!
//! Each subcommand maps onto one library operation; this module only
//! parses arguments, loads documents, and shapes output. Anything worth
//! testing lives behind the library API.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use themekit_formats::{
    generate, generate_all, pipeline_config, GenerateOptions, GeneratorInput, FORMATS,
};
use themekit_resolve::{migrate, snapshot, validate, Mode, ThemeDocument};
use themekit_scan::{scan, ScanDepth};

use crate::config::ProjectConfig;
use crate::rebuild::{rebuild, rollback, RebuildOptions};
use crate::registry::ThemeRegistry;

/// Design-token resolution, migration, and project-rewrite engine.
#[derive(Parser)]
#[command(name = "themekit", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a project with an active theme
    Init(InitArgs),

    /// Check a theme document for structural and reference errors
    Validate(ValidateArgs),

    /// Upgrade a legacy theme document to the extended schema
    Migrate(MigrateArgs),

    /// Resolve a theme into its flat variable set
    Resolve(ResolveArgs),

    /// Generate an output artifact from a theme document
    Generate(GenerateArgs),

    /// Scan a project tree for hard-coded color usages
    Scan(ScanArgs),

    /// Switch the project to another theme, regenerating and rewriting
    Rebuild(RebuildArgs),

    /// Restore a previous rebuild from its backup
    Rollback(RollbackArgs),

    /// List available backups, newest first
    Backups(RootArg),

    /// List the themes registered in this project
    Themes(RootArg),
}

#[derive(Args)]
struct RootArg {
    /// Project root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Args)]
struct InitArgs {
    /// Theme id to activate
    theme: String,

    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Args)]
struct ValidateArgs {
    /// Theme document (YAML)
    file: PathBuf,
}

#[derive(Args)]
struct MigrateArgs {
    /// Theme document (YAML)
    file: PathBuf,

    /// Write the migrated document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ResolveArgs {
    /// Theme document (YAML)
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = ModeArg::Light)]
    mode: ModeArg,
}

#[derive(Args)]
struct GenerateArgs {
    /// Theme document (YAML)
    file: PathBuf,

    /// Output format; see `--list` for the registered set
    #[arg(short, long, default_value = "css")]
    format: String,

    /// Generate every registered format into a directory
    #[arg(long, conflicts_with = "format")]
    all: Option<PathBuf>,

    /// Variable name prefix for preprocessor output
    #[arg(long, default_value = "theme")]
    prefix: String,

    /// Write the artifact here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List registered formats and exit
    #[arg(long)]
    list: bool,
}

#[derive(Args)]
struct ScanArgs {
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Also run the dynamic hue classifier on unmapped colors
    #[arg(long)]
    full: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RebuildArgs {
    /// Theme id to switch to
    theme: String,

    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Report what would change without touching any file
    #[arg(long)]
    dry_run: bool,

    /// Use full scan depth for the rewrite pass
    #[arg(long)]
    full: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RollbackArgs {
    /// Backup id to restore; defaults to the most recent
    #[arg(long)]
    id: Option<String>,

    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Light => Mode::Light,
            ModeArg::Dark => Mode::Dark,
        }
    }
}

fn load_document(path: &Path) -> anyhow::Result<ThemeDocument> {
    ThemeDocument::from_file(path)
        .with_context(|| format!("failed to load theme document {}", path.display()))
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => {
            if ProjectConfig::exists(&args.root) {
                anyhow::bail!("project at {} is already initialized", args.root.display());
            }
            ProjectConfig::new(&args.theme).save(&args.root)?;
            println!("initialized project with theme '{}'", args.theme);
            Ok(())
        }

        Command::Validate(args) => {
            let doc = load_document(&args.file)?;
            let validation = validate(Some(&doc));
            if validation.valid {
                println!("{}: valid", args.file.display());
                return Ok(());
            }
            for error in &validation.errors {
                eprintln!("error: {}", error);
            }
            anyhow::bail!(
                "{}: {} validation error(s)",
                args.file.display(),
                validation.errors.len()
            );
        }

        Command::Migrate(args) => {
            let doc = load_document(&args.file)?;
            let migrated = migrate(doc);
            let yaml = migrated.to_yaml()?;
            match args.output {
                Some(path) => {
                    std::fs::write(&path, yaml)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("migrated document written to {}", path.display());
                }
                None => print!("{}", yaml),
            }
            Ok(())
        }

        Command::Resolve(args) => {
            let doc = migrate(load_document(&args.file)?);
            let snap = snapshot(&doc, args.mode.into());
            let warnings: Vec<String> = snap
                .warnings
                .iter()
                .map(|w| format!("{}: {}", w.token, w.error))
                .collect();
            let out = serde_json::json!({
                "mode": match snap.mode { Mode::Light => "light", Mode::Dark => "dark" },
                "vars": snap.vars,
                "warnings": warnings,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }

        Command::Generate(args) => {
            if args.list {
                for spec in FORMATS {
                    println!("{:<12} {}  {}", spec.name, spec.extension, spec.display_name);
                }
                return Ok(());
            }
            let doc = migrate(load_document(&args.file)?);
            let input = GeneratorInput::from_document(&doc);
            let options = GenerateOptions {
                prefix: args.prefix,
                ..Default::default()
            };

            if let Some(dir) = args.all {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
                for result in generate_all(&input, &options) {
                    let content = result
                        .output
                        .with_context(|| format!("format '{}' failed", result.format))?;
                    let path = dir.join(format!("{}{}", result.format, result.extension));
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                // The token document's companion build-pipeline config.
                let path = dir.join("tokens.config.json");
                std::fs::write(&path, pipeline_config(&options)?)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {}", path.display());
                return Ok(());
            }

            let content = generate(&args.format, &input, &options)?;
            match args.output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }

        Command::Scan(args) => {
            let options = if ProjectConfig::exists(&args.root) {
                ProjectConfig::load(&args.root)?.scan_options(depth(args.full))
            } else {
                themekit_scan::ScanOptions {
                    depth: depth(args.full),
                    ..Default::default()
                }
            };
            let report = scan(&args.root, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            for finding in &report.non_compliant {
                match &finding.suggestion {
                    Some(suggestion) => println!(
                        "{}:{}: {} -> {}",
                        finding.file, finding.line, finding.matched, suggestion
                    ),
                    None => println!(
                        "{}:{}: {} (no suggestion)",
                        finding.file, finding.line, finding.matched
                    ),
                }
            }
            println!(
                "{} file(s) scanned, {} non-compliant usage(s)",
                report.scanned_files,
                report.non_compliant.len()
            );
            Ok(())
        }

        Command::Rebuild(args) => {
            let options = RebuildOptions {
                dry_run: args.dry_run,
                depth: depth(args.full),
                ..Default::default()
            };
            let report = rebuild(&args.root, &args.theme, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            if report.dry_run {
                println!("dry run: no files changed");
            }
            println!("theme: {} -> {}", report.previous_theme, report.new_theme);
            for file in &report.files_written {
                println!("regenerated {}", file);
            }
            println!(
                "fixed {} usage(s) across {} file(s)",
                report.fixed,
                report.files_rewritten.len()
            );
            for warning in &report.warnings {
                eprintln!("warning: {}", warning);
            }
            if let Some(id) = &report.backup_id {
                println!("backup: {}", id);
            }
            Ok(())
        }

        Command::Rollback(args) => {
            let report = rollback(&args.root, args.id.as_deref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!(
                "restored {} file(s) from {} (theme: {})",
                report.files_restored, report.restored_from, report.theme
            );
            println!("pre-rollback state saved as {}", report.safety_backup);
            Ok(())
        }

        Command::Backups(args) => {
            for manifest in crate::backup::list_backups(&args.root)? {
                println!(
                    "{}  {} -> {}  ({} file(s))",
                    manifest.id,
                    manifest.previous_theme,
                    manifest.new_theme,
                    manifest.files.len()
                );
            }
            Ok(())
        }

        Command::Themes(args) => {
            for id in ThemeRegistry::project(&args.root).list() {
                println!("{}", id);
            }
            Ok(())
        }
    }
}

fn depth(full: bool) -> ScanDepth {
    if full {
        ScanDepth::Full
    } else {
        ScanDepth::Standard
    }
}
