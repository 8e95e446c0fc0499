//! Document metadata from `<title>` and `<meta name=...>` tags.
//!
//! The scanner walks the document as a stream of tag events and keeps a
//! single piece of state: which tag is currently open. Text seen while the
//! state is `Title`, `Description` or `Keywords` is captured into the
//! matching field.
//!
//! `<meta>` tags are read positionally: when the first attribute is `name`,
//! its value is treated as the current tag and the second attribute's value
//! is fed through the text path. The usual layout
//! `<meta name="keywords" content="a, b">` therefore works, while reordered
//! attributes silently yield nothing.

use crate::utils::html::{unescape, unescape_ref};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::borrow::Cow;

/// Separator between entries of the keywords list.
pub const CATEGORY_SEPARATOR: &str = ", ";

/// Metadata captured from one document. Absent fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Raw keywords string, e.g. `"travel, trains"`.
    pub keywords: String,
}

impl PageMeta {
    /// Scan document text for metadata.
    pub fn extract(text: &str) -> Self {
        MetaScanner::default().run(text)
    }

    /// Keywords split on `", "`, in document order. Empty when absent.
    pub fn categories(&self) -> Vec<&str> {
        if self.keywords.is_empty() {
            return Vec::new();
        }
        self.keywords.split(CATEGORY_SEPARATOR).collect()
    }
}

/// The tag whose text is currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CurrentTag {
    #[default]
    None,
    Title,
    Description,
    Keywords,
    Other,
}

impl CurrentTag {
    fn from_name(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "description" => Self::Description,
            "keywords" => Self::Keywords,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Default)]
struct MetaScanner {
    state: CurrentTag,
    meta: PageMeta,
    /// Text accumulated since the last tag event.
    pending: String,
}

impl MetaScanner {
    fn run(mut self, text: &str) -> PageMeta {
        let mut reader = Reader::from_str(text);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;

        loop {
            match reader.read_event() {
                Ok(Event::Text(t)) => {
                    let text = String::from_utf8_lossy(&t);
                    self.pending.push_str(&unescape(&text));
                }
                Ok(Event::GeneralRef(r)) => {
                    let name = String::from_utf8_lossy(&r);
                    self.pending.push_str(&unescape_ref(&name));
                }
                Ok(Event::Start(tag)) => {
                    self.flush();
                    self.start(&tag);
                }
                Ok(Event::Empty(tag)) => {
                    self.flush();
                    self.start(&tag);
                    self.end();
                }
                Ok(Event::End(_)) => {
                    self.flush();
                    self.end();
                }
                Ok(Event::Eof) => {
                    self.flush();
                    break;
                }
                Ok(_) => self.flush(),
                // Malformed markup ends the scan with what has been read so far
                Err(_) => break,
            }
        }

        self.meta
    }

    /// Deliver accumulated text as one chunk.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.handle_text(text);
        }
    }

    fn start(&mut self, tag: &BytesStart<'_>) {
        let name = lowercase(tag.name().as_ref());

        if name == "meta" {
            let mut attrs = tag.html_attributes().flatten();
            let Some(first) = attrs.next() else {
                return;
            };
            if lowercase(first.key.as_ref()) != "name" {
                return;
            }
            let Some(second) = attrs.next() else {
                return;
            };
            self.state = CurrentTag::from_name(&attr_text(&first.value));
            self.handle_text(attr_text(&second.value).into_owned());
        }

        self.state = CurrentTag::from_name(&name);
    }

    fn end(&mut self) {
        self.state = CurrentTag::None;
    }

    /// Later chunks replace earlier ones.
    fn handle_text(&mut self, text: String) {
        match self.state {
            CurrentTag::Title => self.meta.title = text,
            CurrentTag::Description => self.meta.description = text,
            CurrentTag::Keywords => self.meta.keywords = text,
            CurrentTag::None | CurrentTag::Other => {}
        }
    }
}

fn lowercase(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_lowercase()
}

fn attr_text(value: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(value) {
        Cow::Borrowed(s) => unescape(s),
        Cow::Owned(s) => Cow::Owned(unescape(&s).into_owned()),
    }
}
