//! `[build]` configuration.
//!
//! Which files count as documents and where the two outputs are written.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Feed output path, relative to the scanned directory.
    pub feed_output: PathBuf,

    /// Index page output path, relative to the scanned directory.
    pub index_output: PathBuf,

    /// File names that are never treated as documents (exact match).
    pub reserved: Vec<String>,

    /// Any file name containing this substring is a draft and is skipped.
    pub draft_marker: String,

    /// Parse and validate the assembled feed, warning on failure.
    pub validate_feed: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            feed_output: "../feed".into(),
            index_output: "index.html".into(),
            reserved: ["index.html", "generator.py", "feed.xml", "feed"]
                .into_iter()
                .map(String::from)
                .collect(),
            draft_marker: "_draft".into(),
            validate_feed: true,
        }
    }
}

impl BuildConfig {
    /// Whether a directory entry with this name is a document.
    ///
    /// Reserved names and drafts are excluded; everything else is included.
    pub fn should_include(&self, file_name: &str) -> bool {
        !self.reserved.iter().any(|name| name == file_name)
            && !file_name.contains(self.draft_marker.as_str())
    }

    /// Add a name to the reserved list unless it is already there.
    pub fn reserve(&mut self, file_name: &str) {
        if !self.reserved.iter().any(|name| name == file_name) {
            self.reserved.push(file_name.to_string());
        }
    }

    /// Reserve the file names of outputs written into the scanned directory,
    /// so a later run never reads its own output back as a document.
    pub fn reserve_outputs(&mut self) {
        let names: Vec<String> = [&self.index_output, &self.feed_output]
            .into_iter()
            .filter_map(|path| local_file_name(path))
            .collect();
        for name in names {
            self.reserve(&name);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty marker is contained in every name and would exclude everything
        if self.draft_marker.is_empty() {
            return Err(ConfigError::Validation(
                "build.draft_marker must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// File name of a relative output path that lands directly in the scanned
/// directory (`name` or `./name`).
fn local_file_name(path: &Path) -> Option<String> {
    let mut components = path.components().filter(|c| *c != Component::CurDir);
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.feed_output, PathBuf::from("../feed"));
        assert_eq!(config.build.index_output, PathBuf::from("index.html"));
        assert_eq!(config.build.draft_marker, "_draft");
        assert!(config.build.validate_feed);
    }

    #[test]
    fn test_should_include_excludes_reserved_names() {
        let build = BuildConfig::default();
        for name in ["index.html", "generator.py", "feed.xml", "feed"] {
            assert!(!build.should_include(name), "{name} should be reserved");
        }
    }

    #[test]
    fn test_should_include_excludes_drafts() {
        let build = BuildConfig::default();
        assert!(!build.should_include("draft_draft.html"));
        assert!(!build.should_include("_draft-notes.html"));
        assert!(!build.should_include("post_draft"));
    }

    #[test]
    fn test_should_include_regular_files() {
        let build = BuildConfig::default();
        assert!(build.should_include("post1.html"));
        assert!(build.should_include("draft.html"));
        // Exact match only: names that merely contain a reserved name are kept
        assert!(build.should_include("index.html.bak"));
        assert!(build.should_include("feeds.html"));
    }

    #[test]
    fn test_reserve_is_idempotent() {
        let mut build = BuildConfig::default();
        build.reserve("stuff.toml");
        build.reserve("stuff.toml");
        assert_eq!(
            build.reserved.iter().filter(|n| *n == "stuff.toml").count(),
            1
        );
        assert!(!build.should_include("stuff.toml"));
    }

    #[test]
    fn test_reserve_outputs_in_scanned_directory() {
        let mut build = BuildConfig {
            index_output: "posts.html".into(),
            feed_output: "./rss.xml".into(),
            ..BuildConfig::default()
        };
        build.reserve_outputs();
        assert!(!build.should_include("posts.html"));
        assert!(!build.should_include("rss.xml"));
    }

    #[test]
    fn test_reserve_outputs_skips_other_directories() {
        let mut build = BuildConfig {
            index_output: "out/list.html".into(),
            ..BuildConfig::default()
        };
        build.reserve_outputs();
        // Default feed path is one level up
        assert!(build.should_include("list.html"));
        assert_eq!(build.reserved, BuildConfig::default().reserved);
    }

    #[test]
    fn test_validate_empty_draft_marker() {
        let build = BuildConfig {
            draft_marker: String::new(),
            ..BuildConfig::default()
        };
        assert!(build.validate().is_err());
    }

    #[test]
    fn test_custom_reserved() {
        let config = test_parse_config("[build]\nreserved = [\"README.md\"]");
        assert_eq!(config.build.reserved, vec!["README.md".to_string()]);
        assert!(config.build.should_include("index.html"));
    }
}
