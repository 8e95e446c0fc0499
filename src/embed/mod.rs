//! Embedded output templates.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `feed` - RSS channel envelope and item fragment
//! - `index` - HTML index page shell and list item fragment
//!
//! Templates are filled verbatim: no value is escaped on the way in.
//!
//! # Usage
//!
//! ```ignore
//! use embed::feed::{RSS_ITEM, RssItemVars};
//!
//! let xml = RSS_ITEM.render(&RssItemVars { title: "Hello", .. });
//! ```

mod template;

pub use template::{Template, TemplateVars, fill};

pub mod feed {
    use super::{Template, TemplateVars, fill};

    /// Variables for channel.xml.
    pub struct RssChannelVars<'a> {
        pub feed_url: &'a str,
        pub title: &'a str,
        pub url: &'a str,
        pub icon: &'a str,
        pub pub_date: &'a str,
        pub language: &'a str,
        pub year: &'a str,
        pub author: &'a str,
        pub description: &'a str,
        /// Concatenated item fragments.
        pub items: &'a str,
    }

    impl TemplateVars for RssChannelVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("FEED_URL", self.feed_url),
                    ("TITLE", self.title),
                    ("URL", self.url),
                    ("ICON", self.icon),
                    ("PUB_DATE", self.pub_date),
                    ("LANGUAGE", self.language),
                    ("YEAR", self.year),
                    ("AUTHOR", self.author),
                    ("DESCRIPTION", self.description),
                    ("ITEMS", self.items),
                ],
            )
        }
    }

    /// Variables for item.xml.
    pub struct RssItemVars<'a> {
        pub title: &'a str,
        pub body: &'a str,
        /// `<category>` lines, each indented and newline-terminated.
        pub categories: &'a str,
        pub link: &'a str,
        pub pub_date: &'a str,
    }

    impl TemplateVars for RssItemVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("TITLE", self.title),
                    ("BODY", self.body),
                    ("CATEGORIES", self.categories),
                    ("LINK", self.link),
                    ("PUB_DATE", self.pub_date),
                ],
            )
        }
    }

    /// RSS 2.0 document with a single channel.
    pub const RSS_CHANNEL: Template<RssChannelVars<'static>> =
        Template::new(include_str!("feed/channel.xml"));

    /// One `<item>` of the channel.
    pub const RSS_ITEM: Template<RssItemVars<'static>> =
        Template::new(include_str!("feed/item.xml"));
}

pub mod index {
    use super::{Template, TemplateVars, fill};

    /// Variables for page.html.
    pub struct IndexPageVars<'a> {
        pub title: &'a str,
        pub favicon: &'a str,
        pub heading: &'a str,
        pub intro: &'a str,
        pub feed_link: &'a str,
        pub home_link: &'a str,
        /// Concatenated list item fragments.
        pub items: &'a str,
    }

    impl TemplateVars for IndexPageVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("TITLE", self.title),
                    ("FAVICON", self.favicon),
                    ("HEADING", self.heading),
                    ("INTRO", self.intro),
                    ("FEED_LINK", self.feed_link),
                    ("HOME_LINK", self.home_link),
                    ("ITEMS", self.items),
                ],
            )
        }
    }

    /// Variables for item.html.
    pub struct IndexItemVars<'a> {
        pub file: &'a str,
        pub title: &'a str,
        pub description: &'a str,
        pub keywords: &'a str,
        pub date: &'a str,
    }

    impl TemplateVars for IndexItemVars<'_> {
        fn apply(&self, content: &str) -> String {
            fill(
                content,
                &[
                    ("FILE", self.file),
                    ("TITLE", self.title),
                    ("DESCRIPTION", self.description),
                    ("KEYWORDS", self.keywords),
                    ("DATE", self.date),
                ],
            )
        }
    }

    /// Index page shell around a single `<ul>`.
    pub const INDEX_PAGE: Template<IndexPageVars<'static>> =
        Template::new(include_str!("index/page.html"));

    /// One `<li>` of the index list.
    pub const INDEX_ITEM: Template<IndexItemVars<'static>> =
        Template::new(include_str!("index/item.html"));
}
