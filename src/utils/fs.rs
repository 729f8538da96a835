//! File helpers shared by `rebuild` and `retemplate`.

use crate::splice::SpliceError;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Extensions picked up when a retemplate target is a directory
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Whether freshly generated content matches what is on disk.
///
/// Compared byte-for-byte, so an old file in any encoding is simply stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
}

impl Freshness {
    pub fn of(current: Option<&[u8]>, generated: &[u8]) -> Self {
        match current {
            Some(current) if current == generated => Self::UpToDate,
            _ => Self::Stale,
        }
    }
}

pub fn read_text(path: &Path) -> Result<String, SpliceError> {
    fs::read_to_string(path).map_err(|err| SpliceError::Read(path.to_path_buf(), err))
}

/// Read the raw bytes of a file that may not exist yet.
pub fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, SpliceError> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(SpliceError::Read(path.to_path_buf(), err)),
    }
}

/// Write `content`, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) -> Result<(), SpliceError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| SpliceError::Write(parent.to_path_buf(), err))?;
    }
    fs::write(path, content).map_err(|err| SpliceError::Write(path.to_path_buf(), err))
}

/// Expand directories into the HTML files below them, sorted by name.
///
/// Plain file targets are kept as given, in order. Paths listed in
/// `exclude` are dropped from directory expansions only.
///
/// An unreadable entry anywhere below a directory target is an error.
pub fn expand_targets(
    targets: &[PathBuf],
    exclude: &[PathBuf],
) -> Result<Vec<PathBuf>, SpliceError> {
    let excluded: Vec<PathBuf> = exclude.iter().map(|p| canonical(p)).collect();

    let mut files = Vec::new();
    for target in targets {
        if target.is_dir() {
            files.extend(
                collect_html_files(target)?
                    .into_iter()
                    .filter(|p| !excluded.contains(&canonical(p))),
            );
        } else {
            files.push(target.clone());
        }
    }
    Ok(files)
}

fn collect_html_files(dir: &Path) -> Result<Vec<PathBuf>, SpliceError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            SpliceError::Walk(path, err)
        })?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| HTML_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
