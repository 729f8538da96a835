//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. Together
//! they describe the classic layout: `docs/index.html` rendered into
//! `index_template.html`, with `header.html` and `footer.html` fragments.

// ============================================================================
// [rebuild] Section Defaults
// ============================================================================

pub mod rebuild {
    use std::path::PathBuf;

    pub fn template() -> PathBuf {
        "index_template.html".into()
    }

    pub fn placeholder() -> String {
        "__BODY__".into()
    }

    pub fn source_dir() -> PathBuf {
        "docs".into()
    }

    pub fn output_dir() -> PathBuf {
        "".into()
    }

    pub fn pages() -> Vec<PathBuf> {
        vec!["index.html".into()]
    }
}

// ============================================================================
// [retemplate] Section Defaults
// ============================================================================

pub mod retemplate {
    use crate::config::SectionConfig;

    pub fn sections() -> Vec<SectionConfig> {
        vec![
            SectionConfig {
                name: "HEADER".into(),
                fragment: "header.html".into(),
            },
            SectionConfig {
                name: "FOOTER".into(),
                fragment: "footer.html".into(),
            },
        ]
    }
}
