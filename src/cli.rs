//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::SectionConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Splice page bodies into templates and keep shared sections in sync
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; relative paths in the config resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: splice.toml)
    #[arg(short = 'C', long, default_value = "splice.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default config file into the project root
    Init,

    /// Extract each page's <body> and inject it into the page template
    Rebuild {
        /// Pages to rebuild, relative to the source directory (default: from config)
        pages: Vec<PathBuf>,

        /// Template file containing the placeholder
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Placeholder token replaced by the page body
        #[arg(short, long)]
        placeholder: Option<String>,

        /// Directory holding the rendered source pages
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        /// Directory the rebuilt pages are written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Report stale pages without writing; fail if any
        #[arg(long)]
        check: bool,
    },

    /// Replace named comment sections in HTML files with fragment files
    Retemplate {
        /// Files (or directories of .html files) to rewrite in place
        targets: Vec<PathBuf>,

        /// Section as NAME=FRAGMENT; repeat to replace the configured list
        #[arg(short, long = "section", value_parser = parse_section)]
        sections: Vec<SectionConfig>,

        /// Report stale files without writing; fail if any
        #[arg(long)]
        check: bool,
    },
}

/// Parse `NAME=PATH` into a section entry.
fn parse_section(s: &str) -> Result<SectionConfig, String> {
    let (name, fragment) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FRAGMENT, got `{s}`"))?;
    if name.is_empty() || fragment.is_empty() {
        return Err(format!("expected NAME=FRAGMENT, got `{s}`"));
    }
    Ok(SectionConfig {
        name: name.to_owned(),
        fragment: fragment.into(),
    })
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
}
