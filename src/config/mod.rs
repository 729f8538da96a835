//! Project configuration management for `splice.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[rebuild]`    | Template, placeholder, source/output dirs, pages |
//! | `[retemplate]` | Ordered list of named sections and fragments   |
//!
//! The file is optional. Without it the defaults reproduce the classic
//! layout (`docs/index.html` → `index.html`, `header.html`/`footer.html`).
//!
//! # Example
//!
//! ```toml
//! [rebuild]
//! template = "index_template.html"
//! placeholder = "__BODY__"
//! pages = ["index.html", "examples.html"]
//!
//! [[retemplate.sections]]
//! name = "HEADER"
//! fragment = "header.html"
//! ```

pub mod defaults;
mod error;
mod rebuild;
mod retemplate;

pub use error::ConfigError;
pub use retemplate::SectionConfig;

use rebuild::RebuildConfig;
use retemplate::RetemplateConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing splice.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SpliceConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Body extraction/injection settings
    #[serde(default)]
    pub rebuild: RebuildConfig,

    /// Section replacement settings
    #[serde(default)]
    pub retemplate: RetemplateConfig,
}

impl SpliceConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SpliceConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Update configuration with CLI arguments.
    ///
    /// Paths are left as written; call `resolve_paths` once validated.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));

        match &cli.command {
            Commands::Rebuild {
                pages,
                template,
                placeholder,
                source_dir,
                output_dir,
                ..
            } => {
                Self::update_option(&mut self.rebuild.template, template.as_ref());
                Self::update_option(&mut self.rebuild.placeholder, placeholder.as_ref());
                Self::update_option(&mut self.rebuild.source_dir, source_dir.as_ref());
                Self::update_option(&mut self.rebuild.output_dir, output_dir.as_ref());
                if !pages.is_empty() {
                    self.rebuild.pages = pages.clone();
                }
            }
            Commands::Retemplate { sections, .. } if !sections.is_empty() => {
                self.retemplate.sections = sections.clone();
            }
            _ => {}
        }

        self.config_path = Self::normalize_path(&root.join(&cli.config));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve every configured path against `root` and make it absolute.
    ///
    /// Page names stay relative: they are joined onto the source and
    /// output directories per page.
    pub fn resolve_paths(&mut self, root: &Path) {
        let root = Self::normalize_path(root);

        self.rebuild.template = Self::resolve(&root, &self.rebuild.template);
        self.rebuild.source_dir = Self::resolve(&root, &self.rebuild.source_dir);
        self.rebuild.output_dir = Self::resolve(&root, &self.rebuild.output_dir);
        for section in &mut self.retemplate.sections {
            section.fragment = Self::resolve(&root, &section.fragment);
        }
    }

    /// Expand `~` and join relative paths onto root
    fn resolve(root: &Path, path: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        Self::normalize_path(&root.join(expanded))
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Source page path for a page name
    pub fn source_page(&self, page: &Path) -> PathBuf {
        self.rebuild.source_dir.join(page)
    }

    /// Output page path for a page name
    pub fn output_page(&self, page: &Path) -> PathBuf {
        self.rebuild.output_dir.join(page)
    }

    /// Fragment paths of all configured sections, in order
    pub fn fragment_paths(&self) -> Vec<PathBuf> {
        self.retemplate
            .sections
            .iter()
            .map(|s| s.fragment.clone())
            .collect()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.rebuild.placeholder.is_empty() {
            bail!(ConfigError::Validation(
                "[rebuild.placeholder] must not be empty".into()
            ));
        }

        if self.rebuild.pages.iter().any(|p| p.as_os_str().is_empty()) {
            bail!(ConfigError::Validation(
                "[rebuild.pages] must not contain empty names".into()
            ));
        }

        let mut seen = HashSet::new();
        for section in &self.retemplate.sections {
            let name = &section.name;
            if name.trim().is_empty() || name.trim() != name {
                bail!(ConfigError::Validation(format!(
                    "[retemplate.sections] invalid name `{name}`"
                )));
            }
            if !seen.insert(name.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "[retemplate.sections] duplicate name `{name}`"
                )));
            }
            if section.fragment.as_os_str().is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[retemplate.sections] `{name}` has an empty fragment path"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
