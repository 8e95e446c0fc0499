//! Feed generation.
//!
//! Renders the RSS 2.0 feed from extracted records and writes it to the
//! configured output path.

use crate::{config::SiteConfig, debug, log, page::ExtractedRecord, utils::date::DateTimeUtc};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub mod rss;

/// Render the feed and write it, returning the written path.
///
/// The parent directory must already exist; it is not created.
pub fn build_feed(records: &[ExtractedRecord], config: &SiteConfig) -> Result<PathBuf> {
    let xml = rss::render_channel(records, &config.site, DateTimeUtc::now());

    // Renderers never escape, so a post can produce a feed readers reject
    if config.build.validate_feed
        && let Err(e) = rss::validate_feed(&xml)
    {
        log!("warning"; "feed did not validate: {:#}", e);
    }

    let path = config.feed_output();
    fs::write(&path, &xml).with_context(|| format!("failed to write feed {}", path.display()))?;

    debug!("feed"; "{} ({} items)", path.display(), records.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_feed_writes_one_level_up() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("stuff");
        fs::create_dir(&posts).unwrap();

        let path = build_feed(&[], &SiteConfig::with_root(&posts)).unwrap();

        assert_eq!(path, posts.join("../feed"));
        let xml = fs::read_to_string(dir.path().join("feed")).unwrap();
        assert!(xml.contains("<channel>"));
    }

    #[test]
    fn test_build_feed_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::with_root(dir.path());
        config.build.feed_output = "missing/feed".into();

        let err = build_feed(&[], &config).unwrap_err();
        assert!(err.to_string().contains("failed to write feed"));
        assert!(!dir.path().join("missing").exists());
    }
}
