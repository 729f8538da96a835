//! `[rebuild]` section configuration.
//!
//! Controls which rendered pages get their body spliced into the template.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[rebuild]` section in splice.toml.
///
/// # Example
/// ```toml
/// [rebuild]
/// template = "index_template.html"
/// placeholder = "__BODY__"
/// source_dir = "docs"              # rendered pages are read from here
/// output_dir = ""                  # rebuilt pages land in the root
/// pages = ["index.html", "examples.html"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RebuildConfig {
    /// Template file holding the placeholder (relative to root)
    #[serde(default = "defaults::rebuild::template")]
    #[educe(Default = defaults::rebuild::template())]
    pub template: PathBuf,

    /// Literal token replaced by each page's body
    #[serde(default = "defaults::rebuild::placeholder")]
    #[educe(Default = defaults::rebuild::placeholder())]
    pub placeholder: String,

    /// Directory of rendered source pages (relative to root)
    #[serde(default = "defaults::rebuild::source_dir")]
    #[educe(Default = defaults::rebuild::source_dir())]
    pub source_dir: PathBuf,

    /// Directory rebuilt pages are written to (relative to root)
    #[serde(default = "defaults::rebuild::output_dir")]
    #[educe(Default = defaults::rebuild::output_dir())]
    pub output_dir: PathBuf,

    /// Page file names, processed in order
    #[serde(default = "defaults::rebuild::pages")]
    #[educe(Default = defaults::rebuild::pages())]
    pub pages: Vec<PathBuf>,
}
