//! Document discovery in the posts directory.
//!
//! Lists the directory (non-recursive), drops reserved names and drafts,
//! and orders what is left newest first by creation time.

use super::ExtractError;
use crate::{config::BuildConfig, debug};
use anyhow::{Context, Result};
use std::{
    cmp::Reverse,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// A directory entry that passed the inclusion rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// File name, used as the relative URL and the item id.
    pub name: String,
    pub path: PathBuf,
    /// Creation (birth) time, the document's publish date.
    pub created: SystemTime,
}

/// List documents in `dir`, newest first.
///
/// Directories are listed like files; they are not expected to be present.
pub fn scan_documents(dir: &Path, build: &BuildConfig) -> Result<Vec<ScannedFile>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("invalid entry in {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if !build.should_include(&name) {
            debug!("scan"; "skip {}", name);
            continue;
        }

        let path = entry.path();
        let created = created_time(&path)?;
        files.push(ScannedFile {
            name,
            path,
            created,
        });
    }

    order_newest_first(&mut files);
    debug!("scan"; "{} documents in {}", files.len(), dir.display());
    Ok(files)
}

/// Sort by descending creation time; equal times fall back to file name.
pub fn order_newest_first(files: &mut [ScannedFile]) {
    files.sort_by(|a, b| {
        Reverse(a.created)
            .cmp(&Reverse(b.created))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Creation time of a file.
///
/// Fails with [`ExtractError::Timestamp`] where the platform or filesystem
/// does not record birth time.
pub fn created_time(path: &Path) -> Result<SystemTime, ExtractError> {
    fs::metadata(path)
        .and_then(|meta| meta.created())
        .map_err(|source| ExtractError::Timestamp {
            path: path.to_path_buf(),
            source,
        })
}
