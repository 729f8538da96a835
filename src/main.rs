//! Splicer - static-site page plumbing.
//!
//! `rebuild` splices rendered page bodies into a template; `retemplate`
//! keeps named header/footer sections in sync with fragment files.

mod cli;
mod config;
mod init;
mod logger;
mod rebuild;
mod retemplate;
mod splice;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SpliceConfig;
use init::new_config;
use rebuild::rebuild_pages;
use retemplate::retemplate_files;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Init => {
            new_config(&config.config_path)?;
            log!("init"; "wrote {}", config.config_path.display());
            Ok(())
        }
        Commands::Rebuild { check, .. } => {
            let report = rebuild_pages(&config, *check)?;
            log!(
                "rebuild";
                "done: {} written, {} up-to-date",
                report.written.len(),
                report.up_to_date.len()
            );
            fail_if_stale(report.stale.len())
        }
        Commands::Retemplate { targets, check, .. } => {
            let report = retemplate_files(&config, targets, *check)?;
            log!(
                "retemplate";
                "done: {} rewritten, {} up-to-date",
                report.rewritten.len(),
                report.up_to_date.len()
            );
            fail_if_stale(report.stale.len())
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: the defaults apply.
fn load_config(cli: &Cli) -> Result<SpliceConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() && !cli.is_init() {
        SpliceConfig::from_path(&config_path)?
    } else {
        SpliceConfig::default()
    };
    config.update_with_cli(cli);

    if !cli.is_init() {
        config.validate()?;
    }
    config.resolve_paths(root);

    Ok(config)
}

fn fail_if_stale(stale: usize) -> Result<()> {
    if stale > 0 {
        bail!("{stale} file(s) out of date");
    }
    Ok(())
}
