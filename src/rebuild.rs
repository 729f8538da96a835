//! Page rebuilding.
//!
//! Splices the body of each rendered page into the shared template.
//!
//! ```text
//! rebuild_pages()
//!     │
//!     ├── read template (once)
//!     │
//!     └── for each page, in order:
//!             source_dir/<page> ──► extract_body() ──► inject_body()
//!                                                          │
//!                                  output_dir/<page> ◄─────┘ (only if changed)
//! ```
//!
//! The first failing page stops the batch; pages already written stay written.

use crate::{
    config::SpliceConfig,
    log,
    splice::{extract_body, inject_body},
    utils::fs::{Freshness, read_existing, read_text, write_text},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What happened to each page of a rebuild run.
#[derive(Debug, Default)]
pub struct RebuildReport {
    pub written: Vec<PathBuf>,
    pub up_to_date: Vec<PathBuf>,
    /// Pages that would change (check mode only)
    pub stale: Vec<PathBuf>,
}

/// Rebuild every configured page.
///
/// With `check` set nothing is written; stale outputs are collected instead.
pub fn rebuild_pages(config: &SpliceConfig, check: bool) -> Result<RebuildReport> {
    let template_path = &config.rebuild.template;
    let placeholder = &config.rebuild.placeholder;
    let template = read_text(template_path)?;

    let mut report = RebuildReport::default();

    for page in &config.rebuild.pages {
        let source = config.source_page(page);
        let output = config.output_page(page);

        let content = read_text(&source)?;
        let body = extract_body(&content)
            .with_context(|| format!("Failed to extract body from {}", source.display()))?;
        let html = inject_body(&template, placeholder, body)
            .with_context(|| format!("Failed to fill template {}", template_path.display()))?;

        let current = read_existing(&output)?;
        match (Freshness::of(current.as_deref(), html.as_bytes()), check) {
            (Freshness::UpToDate, _) => {
                log!("rebuild"; "File {} up-to-date", output.display());
                report.up_to_date.push(output);
            }
            (Freshness::Stale, true) => {
                log!("check"; "{} is out of date", output.display());
                report.stale.push(output);
            }
            (Freshness::Stale, false) => {
                log!("rebuild"; "Writing {}", output.display());
                write_text(&output, &html)?;
                report.written.push(output);
            }
        }
    }

    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
