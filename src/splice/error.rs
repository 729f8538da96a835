//! Splicing error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting, injecting or replacing page content.
#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("delimiter `{0}` not found")]
    DelimiterNotFound(String),

    #[error("section `{name}`: end marker comes before the start marker")]
    MarkersOutOfOrder { name: String },

    #[error("placeholder `{0}` not found in template")]
    PlaceholderNotFound(String),

    #[error("invalid section name `{0}`")]
    InvalidSectionName(String),

    #[error("IO error when reading `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error when writing `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("cannot walk `{0}`")]
    Walk(PathBuf, #[source] walkdir::Error),
}
