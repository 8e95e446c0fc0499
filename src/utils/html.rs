//! HTML text helpers.
//!
//! - `unescape()` - resolve entity and character references in text
//! - `unescape_ref()` - resolve a single reference name (`amp`, `#39`)
//! - `normalize_newlines()` - fold `\r\n` and `\r` into `\n`

use std::borrow::Cow;

/// Unescape HTML entities back to characters.
///
/// Every HTML5 named entity and numeric reference is decoded. Unknown
/// references and stray `&` are kept verbatim.
pub fn unescape(s: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(s)
}

/// Resolve one reference name (without `&` and `;`), e.g. `mdash` or `#39`.
///
/// An unknown name comes back as the original `&name;` text.
pub fn unescape_ref(name: &str) -> String {
    unescape(&format!("&{name};")).into_owned()
}

/// Fold Windows and old Mac line endings into `\n`.
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}
