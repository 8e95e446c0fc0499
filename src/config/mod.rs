//! Generator configuration, optionally loaded from `stuff.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── index      # [index]
//! │   └── site       # [site]
//! ├── error          # ConfigError
//! ├── util           # Config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field has a default, and the defaults are the values the generator
//! has always used, so running without a config file needs no setup.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildConfig, IndexConfig, SiteInfoConfig};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `stuff.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Config file the values were loaded from, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory scanned for documents; output paths resolve against it
    /// (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Channel metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Index page text and links
    #[serde(default)]
    pub index: IndexConfig,

    /// Inclusion rules and output paths
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from the scanned directory for the config file and
    /// falls back to defaults when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let root = match &cli.dir {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };

        let mut config = match find_config_file(&root, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => Self::default(),
        };

        // The config file may sit next to the documents; it is never one of them
        if let Some(name) = cli.config.file_name().and_then(|n| n.to_str()) {
            config.build.reserve(name);
        }
        config.build.reserve_outputs();

        config.root = root;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.site.validate()?;
        self.build.validate()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Where the feed is written.
    pub fn feed_output(&self) -> PathBuf {
        self.root_join(&self.build.feed_output)
    }

    /// Where the index page is written.
    pub fn index_output(&self) -> PathBuf {
        self.root_join(&self.build.index_output)
    }

    /// Default configuration rooted at `root`, as used by tests and embedders.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// Parse a config snippet, panicking on error. Test helper.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    SiteConfig::from_str(content).expect("config should parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli_for(dir: &Path) -> Cli {
        Cli::parse_from(["stuff-feed", "--dir", dir.to_str().unwrap()])
    }

    #[test]
    fn test_from_str_rejects_wrong_type() {
        assert!(SiteConfig::from_str("[build]\nvalidate_feed = \"yes\"").is_err());
    }

    #[test]
    fn test_parse_with_ignored_collects_unknown_fields() {
        let (config, ignored) =
            SiteConfig::parse_with_ignored("[site]\ntitle = \"T\"\nsubtitle = \"S\"").unwrap();
        assert_eq!(config.site.title, "T");
        assert_eq!(ignored, vec!["site.subtitle".to_string()]);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&cli_for(dir.path())).unwrap();

        assert!(config.config_path.is_none());
        assert_eq!(config.site, SiteInfoConfig::default());
        assert_eq!(config.feed_output(), dir.path().join("../feed"));
        assert_eq!(config.index_output(), dir.path().join("index.html"));
        assert!(!config.build.should_include("stuff.toml"));
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("stuff.toml"),
            "[site]\ntitle = \"Elsewhere\"\n\n[build]\nfeed_output = \"feed.xml\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(&cli_for(dir.path())).unwrap();

        assert_eq!(config.config_path, Some(dir.path().join("stuff.toml")));
        assert_eq!(config.site.title, "Elsewhere");
        assert_eq!(config.feed_output(), dir.path().join("feed.xml"));
        assert!(!config.build.should_include("stuff.toml"));
    }

    #[test]
    fn test_load_finds_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("stuff");
        fs::create_dir(&posts).unwrap();
        fs::write(dir.path().join("stuff.toml"), "[index]\nheading = \"Up\"\n").unwrap();

        let config = SiteConfig::load(&cli_for(&posts)).unwrap();

        assert_eq!(config.index.heading, "Up");
        assert_eq!(config.get_root(), posts.as_path());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("stuff.toml"),
            "[build]\ndraft_marker = \"\"\n",
        )
        .unwrap();

        assert!(SiteConfig::load(&cli_for(dir.path())).is_err());
    }
}
