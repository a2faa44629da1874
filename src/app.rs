//! Subcommand implementations behind the `boardscope` binary

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::catalog::{validate, DirectorySource, Severity};
use crate::cli::{CliArgs, Command, SiteArgs};
use crate::config::SiteConfig;
use crate::explore::Explorer;
use crate::fs_watcher::FileSystemWatcher;
use crate::model::device::DEFAULT_CODE_LANGUAGE;
use crate::render::RenderOptions;
use crate::runtime::SystemClipboard;
use crate::site::{self, BuildReport};
use crate::syntax::{highlight, highlight_html, LanguageId};
use crate::theme::{list_available_themes, load_theme, load_theme_or_default, ThemeSource};

/// How a subcommand finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found errors
    ValidationFailed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::ValidationFailed => ExitCode::from(1),
        }
    }
}

/// Run the parsed command line, reporting errors on stderr
pub fn run(args: CliArgs) -> ExitCode {
    match execute(args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

pub fn execute(args: CliArgs) -> Result<Outcome> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load(),
    };

    match args.command {
        Command::Build { site, open } => {
            site.apply(&mut config);
            let report = build(&config)?;
            print_report(&report, &config.out_dir);
            if open {
                let index = config.out_dir.join("index.html");
                open::that(&index)
                    .with_context(|| format!("Failed to open {}", index.display()))?;
            }
            Ok(Outcome::Success)
        }
        Command::Watch { site } => {
            watch(&mut config, &site)?;
            Ok(Outcome::Success)
        }
        Command::Check { public } => {
            if let Some(public) = public {
                config.public_dir = public;
            }
            check(&config.public_dir)
        }
        Command::Highlight { file, lang, html } => {
            highlight_command(file.as_deref(), lang.as_deref(), html)?;
            Ok(Outcome::Success)
        }
        Command::Explore { key, public } => {
            if let Some(public) = public {
                config.public_dir = public;
            }
            let source = DirectorySource::new(&config.public_dir);
            let mut explorer = Explorer::new(source, SystemClipboard, &key);
            explorer.run(io::stdin().lock(), io::stdout().lock())?;
            Ok(Outcome::Success)
        }
        Command::Themes { set: Some(id) } => {
            load_theme(&id).map_err(|e| anyhow!(e))?;
            config
                .set_theme(&id, args.config.as_deref())
                .map_err(|e| anyhow!(e))?;
            println!("Default theme set to {}", id);
            Ok(Outcome::Success)
        }
        Command::Themes { set: None } => {
            for info in list_available_themes() {
                let marker = if info.id == config.theme { "*" } else { " " };
                let source = match info.source {
                    ThemeSource::User => "user",
                    ThemeSource::Builtin => "builtin",
                };
                println!("{} {:<20} {:<24} ({})", marker, info.id, info.name, source);
            }
            Ok(Outcome::Success)
        }
    }
}

fn build(config: &SiteConfig) -> Result<BuildReport> {
    let theme = load_theme_or_default(&config.theme);
    site::build(
        &config.public_dir,
        &config.out_dir,
        &theme,
        &RenderOptions::from_config(config),
    )
}

fn print_report(report: &BuildReport, out_dir: &Path) {
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    println!(
        "Wrote {} pages and {} assets to {}",
        report.pages_written.len(),
        report.assets_copied,
        out_dir.display()
    );
}

fn watch(config: &mut SiteConfig, site: &SiteArgs) -> Result<()> {
    site.apply(config);
    let report = build(config)?;
    print_report(&report, &config.out_dir);

    let public = fs::canonicalize(&config.public_dir)
        .with_context(|| format!("Failed to resolve {}", config.public_dir.display()))?;
    let exclude = fs::canonicalize(&config.out_dir).ok();
    let watcher = FileSystemWatcher::new(public, exclude)
        .with_context(|| format!("Failed to watch {}", config.public_dir.display()))?;
    println!("Watching {} (Ctrl+C to stop)", watcher.root().display());

    while let Some(changed) = watcher.wait_for_changes(Duration::from_secs(1)) {
        if changed.is_empty() {
            continue;
        }
        tracing::info!("{} paths changed, rebuilding", changed.len());
        match build(config) {
            Ok(report) => print_report(&report, &config.out_dir),
            Err(e) => eprintln!("error: {:#}", e),
        }
    }
    Ok(())
}

fn check(public_dir: &Path) -> Result<Outcome> {
    let source = DirectorySource::new(public_dir);
    let mut errors = 0;
    let mut warnings = 0;

    for (key, result) in source.load_all()? {
        match result {
            Ok(device) => {
                for issue in validate(&key, &device, Some(public_dir)) {
                    match issue.severity {
                        Severity::Error => errors += 1,
                        Severity::Warning => warnings += 1,
                    }
                    println!("{}", issue);
                }
            }
            Err(e) => {
                errors += 1;
                println!("error: {}: {:#}", key, e);
            }
        }
    }

    println!("{} errors, {} warnings", errors, warnings);
    Ok(if errors > 0 {
        Outcome::ValidationFailed
    } else {
        Outcome::Success
    })
}

fn highlight_command(file: Option<&Path>, lang: Option<&str>, html: bool) -> Result<()> {
    let (code, tag) = match file {
        Some(path) => {
            let code = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let tag = lang.unwrap_or_else(|| LanguageId::from_path(path).tag());
            (code, tag.to_string())
        }
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            (code, lang.unwrap_or(DEFAULT_CODE_LANGUAGE).to_string())
        }
    };

    let markup = if html {
        highlight_html(&code, &tag)
    } else {
        highlight(&code, &tag)
    };
    print!("{}", markup);
    Ok(())
}

