//! In-place section replacement.
//!
//! Every configured fragment is loaded before any target is touched. Each
//! target then gets all sections applied in order and is rewritten only
//! when its content actually changed.

use crate::{
    config::SpliceConfig,
    log,
    splice::{Section, apply_sections},
    utils::fs::{Freshness, expand_targets, read_text, write_text},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What happened to each target of a retemplate run.
#[derive(Debug, Default)]
pub struct RetemplateReport {
    pub rewritten: Vec<PathBuf>,
    pub up_to_date: Vec<PathBuf>,
    /// Files that would change (check mode only)
    pub stale: Vec<PathBuf>,
}

/// Compile markers and read fragments for every configured section.
pub fn load_sections(config: &SpliceConfig) -> Result<Vec<Section>> {
    config
        .retemplate
        .sections
        .iter()
        .map(|entry| -> Result<Section> {
            let fragment = read_text(&entry.fragment)
                .with_context(|| format!("Failed to load fragment for section `{}`", entry.name))?;
            Ok(Section::new(&entry.name, fragment)?)
        })
        .collect()
}

/// Retemplate `targets` in order, halting at the first failure.
///
/// Directory targets expand to the HTML files below them, minus the
/// fragment files themselves.
pub fn retemplate_files(
    config: &SpliceConfig,
    targets: &[PathBuf],
    check: bool,
) -> Result<RetemplateReport> {
    let sections = load_sections(config)?;
    let names: Vec<_> = sections.iter().map(|s| s.markers.name()).collect();
    log!("retemplate"; "sections: {}", names.join(", "));

    let files = expand_targets(targets, &config.fragment_paths())?;

    let mut report = RetemplateReport::default();

    for file in files {
        let content = read_text(&file).inspect_err(|_| {
            log!("error"; "Error in file {}", file.display());
        })?;

        let new_content = apply_sections(&content, &sections)
            .inspect_err(|_| log!("error"; "Error in file {}", file.display()))
            .with_context(|| format!("Failed to retemplate {}", file.display()))?;

        match (Freshness::of(Some(content.as_bytes()), new_content.as_bytes()), check) {
            (Freshness::UpToDate, _) => {
                log!("retemplate"; "File {} up-to-date", file.display());
                report.up_to_date.push(file);
            }
            (Freshness::Stale, true) => {
                log!("check"; "{} is out of date", file.display());
                report.stale.push(file);
            }
            (Freshness::Stale, false) => {
                log!("retemplate"; "Rewriting {}", file.display());
                write_text(&file, &new_content)?;
                report.rewritten.push(file);
            }
        }
    }

    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
