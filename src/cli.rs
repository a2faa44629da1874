//! Command-line argument parsing
//!
//! Supports:
//! - Building the static site (optionally opening it)
//! - Rebuilding on changes
//! - Validating documents
//! - Highlighting a file or stdin
//! - Exploring a device page headlessly
//! - Listing themes

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SiteConfig;

/// Documentation site generator for development boards
#[derive(Parser, Debug)]
#[command(
    name = "boardscope",
    version,
    about = "Documentation site generator for development boards"
)]
pub struct CliArgs {
    /// Use this config file instead of the one in the config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the site into the output directory
    Build {
        #[command(flatten)]
        site: SiteArgs,
        /// Open the home page in the default browser afterwards
        #[arg(long)]
        open: bool,
    },
    /// Build, then rebuild whenever the public directory changes
    Watch {
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Validate every device document
    Check {
        /// Directory holding data/*.json and the site assets
        #[arg(long, value_name = "DIR")]
        public: Option<PathBuf>,
    },
    /// Print highlight markup for a file (or stdin)
    Highlight {
        /// Source file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Language tag; guessed from the file extension when omitted
        #[arg(long, value_name = "TAG")]
        lang: Option<String>,
        /// Escape text for embedding in HTML
        #[arg(long)]
        html: bool,
    },
    /// Drive a device page interactively from stdin
    Explore {
        /// Device key (document file stem)
        key: String,
        #[arg(long, value_name = "DIR")]
        public: Option<PathBuf>,
    },
    /// List available themes, or pick the default one
    Themes {
        /// Store this theme id in the config file
        #[arg(long, value_name = "ID")]
        set: Option<String>,
    },
}

/// Flags shared by `build` and `watch`
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Directory holding data/*.json and the site assets
    #[arg(long, value_name = "DIR")]
    pub public: Option<PathBuf>,
    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
    /// Theme id
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

impl SiteArgs {
    /// Apply the flags that were given on top of `config`
    pub fn apply(&self, config: &mut SiteConfig) {
        if let Some(public) = &self.public {
            config.public_dir = public.clone();
        }
        if let Some(out) = &self.out {
            config.out_dir = out.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("boardscope").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_build_flags() {
        let args = parse(&["build", "--public", "site", "--theme", "default-dark", "--open"]);
        let Command::Build { site, open } = args.command else {
            panic!("expected build");
        };
        assert!(open);
        assert_eq!(site.public, Some(PathBuf::from("site")));
        assert_eq!(site.out, None);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = SiteConfig::default();
        SiteArgs {
            public: None,
            out: Some(PathBuf::from("build")),
            theme: Some("circuit-green".to_string()),
        }
        .apply(&mut config);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.out_dir, PathBuf::from("build"));
        assert_eq!(config.theme, "circuit-green");
    }

    #[test]
    fn test_highlight_reads_stdin_by_default() {
        let args = parse(&["highlight", "--lang", "c", "--html"]);
        let Command::Highlight { file, lang, html } = args.command else {
            panic!("expected highlight");
        };
        assert!(file.is_none());
        assert_eq!(lang.as_deref(), Some("c"));
        assert!(html);
    }

    #[test]
    fn test_global_config_flag() {
        let args = parse(&["themes", "--config", "alt.yaml"]);
        assert_eq!(args.config, Some(PathBuf::from("alt.yaml")));
        assert!(matches!(args.command, Command::Themes { set: None }));
    }

    #[test]
    fn test_themes_set() {
        let args = parse(&["themes", "--set", "default-dark"]);
        let Command::Themes { set } = args.command else {
            panic!("expected themes");
        };
        assert_eq!(set.as_deref(), Some("default-dark"));
    }

    #[test]
    fn test_explore_requires_key() {
        assert!(CliArgs::try_parse_from(["boardscope", "explore"]).is_err());
    }
}
