//! Documents and the records extracted from them.
//!
//! A document is one HTML file in the posts directory. Each run reads every
//! document fresh and turns it into an [`ExtractedRecord`]:
//!
//! - `meta` - title, description and keywords from the head
//! - `content` - the raw `<main>` block used as the feed body
//! - `scan` - which files are documents, and in what order

mod content;
mod error;
mod meta;
pub mod scan;

pub use content::extract_main;
pub use error::ExtractError;
pub use meta::{CATEGORY_SEPARATOR, PageMeta};
pub use scan::{ScannedFile, scan_documents};

use crate::{
    config::SiteConfig,
    debug,
    utils::{date::DateTimeUtc, html::normalize_newlines},
};
use anyhow::Result;
use std::{fs, path::Path, time::SystemTime};

/// Everything the renderers need from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    /// File name; relative URL and unique id.
    pub file_name: String,
    pub meta: PageMeta,
    /// Raw `<main>` content.
    pub body: String,
    /// Creation time of the file, in UTC.
    pub published: DateTimeUtc,
}

impl ExtractedRecord {
    /// Build a record from document text.
    ///
    /// `path` is only used for error reporting.
    pub fn from_text(
        file_name: &str,
        path: &Path,
        text: &str,
        created: SystemTime,
    ) -> Result<Self, ExtractError> {
        let text = normalize_newlines(text);
        let body = extract_main(&text).ok_or_else(|| ExtractError::MissingMain {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            file_name: file_name.to_string(),
            meta: PageMeta::extract(&text),
            body: body.to_string(),
            published: DateTimeUtc::from_system_time(created),
        })
    }

    /// Read and extract a scanned document.
    pub fn load(file: &ScannedFile) -> Result<Self, ExtractError> {
        let text = fs::read_to_string(&file.path).map_err(|source| ExtractError::Read {
            path: file.path.clone(),
            source,
        })?;
        Self::from_text(&file.name, &file.path, &text, file.created)
    }

    /// Keywords split into categories.
    pub fn categories(&self) -> Vec<&str> {
        self.meta.categories()
    }
}

/// Scan the posts directory and extract every document, newest first.
///
/// Stops at the first document that cannot be extracted.
pub fn load_records(config: &SiteConfig) -> Result<Vec<ExtractedRecord>> {
    let files = scan_documents(config.get_root(), &config.build)?;

    let records = files
        .iter()
        .map(|file| -> Result<ExtractedRecord> {
            let record = ExtractedRecord::load(file)?;
            debug!("scan"; "{} ({})", record.file_name, record.published.to_ymd());
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(records)
}
