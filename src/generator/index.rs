//! HTML index page generation.
//!
//! One list item per record, linking to the document by file name.

use crate::{
    config::{IndexConfig, SiteConfig},
    debug,
    embed::index::{INDEX_ITEM, INDEX_PAGE, IndexItemVars, IndexPageVars},
    page::ExtractedRecord,
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Render one `<li>` fragment.
pub fn render_item(record: &ExtractedRecord) -> String {
    let date = record.published.to_ymd();
    INDEX_ITEM.render(&IndexItemVars {
        file: &record.file_name,
        title: &record.meta.title,
        description: &record.meta.description,
        keywords: &record.meta.keywords,
        date: &date,
    })
}

/// Render the complete index page, items in the given order.
pub fn render_page(records: &[ExtractedRecord], index: &IndexConfig) -> String {
    let items: String = records.iter().map(render_item).collect();
    INDEX_PAGE.render(&IndexPageVars {
        title: &index.title,
        favicon: &index.favicon,
        heading: &index.heading,
        intro: &index.intro,
        feed_link: &index.feed_link,
        home_link: &index.home_link,
        items: &items,
    })
}

/// Render the index page and write it, returning the written path.
pub fn build_index(records: &[ExtractedRecord], config: &SiteConfig) -> Result<PathBuf> {
    let html = render_page(records, &config.index);

    let path = config.index_output();
    fs::write(&path, &html)
        .with_context(|| format!("failed to write index page {}", path.display()))?;

    debug!("index"; "{} ({} items)", path.display(), records.len());
    Ok(path)
}
