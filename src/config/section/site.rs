//! `[site]` configuration.
//!
//! Channel metadata for the RSS feed and the base URL that document file
//! names are joined onto.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Site metadata for feed generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Channel title (also used as the image title).
    pub title: String,

    /// Canonical site URL, used for the channel and image links.
    pub url: String,

    /// Self link of the feed (`<atom:link rel="self">`).
    pub feed_url: String,

    /// Channel image URL.
    pub icon: String,

    /// Language code (e.g., "en-us").
    pub language: String,

    /// Copyright holder, rendered as `© {year} {author}`.
    pub author: String,

    /// Channel description.
    pub description: String,

    /// Prefix for item links and guids; the document file name is appended.
    pub base_url: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "Eleanor Olson".into(),
            url: "https://eleanorkolson.com".into(),
            feed_url: "http://eleanorkolson.com/feed".into(),
            icon: "https://eleanorkolson.com/public/icon.png".into(),
            language: "en-us".into(),
            author: "Eleanor Olson".into(),
            description: "Eleanor's personal blog about various things. Probably mostly transit."
                .into(),
            base_url: "https://eleanorkolson.com/stuff/".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url`, `feed_url` and `base_url` are absolute URLs
    /// - `base_url` ends with `/` so file names join onto it cleanly
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("site.url", &self.url),
            ("site.feed_url", &self.feed_url),
            ("site.base_url", &self.base_url),
        ] {
            url::Url::parse(value).map_err(|e| {
                ConfigError::Validation(format!("{field} is not a valid URL ({value}): {e}"))
            })?;
        }

        if !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must end with '/' (got {})",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Full link for a document file name.
    pub fn link_for(&self, file_name: &str) -> String {
        format!("{}{}", self.base_url, file_name)
    }
}
