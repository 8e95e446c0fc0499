//! `[index]` configuration: the fixed parts of the HTML index page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    /// Document `<title>`.
    pub title: String,
    /// Page heading (`<h1>`).
    pub heading: String,
    /// Intro paragraph, inserted as raw HTML before the feed link sentence.
    pub intro: String,
    pub favicon: String,
    /// Where the "RSS" link in the intro points.
    pub feed_link: String,
    /// Footer "back home" link.
    pub home_link: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Eleanor Olson's Stuff!".into(),
            heading: "My Stuff! (and my Thoughts)".into(),
            intro: "I like working on Stuff and writing about my Thoughts. Here's some Stuff I've worked on and some Thoughts that I've had.".into(),
            favicon: "/public/favicon.ico".into(),
            feed_link: "/feed".into(),
            home_link: "/".into(),
        }
    }
}
