//! `[retemplate]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[retemplate]` section in splice.toml.
///
/// Sections are applied in the order listed.
///
/// # Example
/// ```toml
/// [[retemplate.sections]]
/// name = "HEADER"
/// fragment = "header.html"
///
/// [[retemplate.sections]]
/// name = "FOOTER"
/// fragment = "footer.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RetemplateConfig {
    #[serde(default = "defaults::retemplate::sections")]
    #[educe(Default = defaults::retemplate::sections())]
    pub sections: Vec<SectionConfig>,
}

/// One `[[retemplate.sections]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    /// Marker name, as in `<!-- NAME -->`
    pub name: String,

    /// Fragment file whose content fills the section (relative to root)
    pub fragment: PathBuf,
}
