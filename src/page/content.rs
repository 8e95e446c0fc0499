//! Feed body: the raw text of a document's `<main>` block.

use regex::Regex;
use std::sync::LazyLock;

/// `<main>` followed by a newline, then everything up to the last `</main>`.
static RE_MAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<main>\n(.*)</main>").expect("main block pattern is valid"));

/// Text strictly between `<main>\n` and the final `</main>`, byte for byte.
///
/// Returns `None` when the document has no such block.
pub fn extract_main(text: &str) -> Option<&str> {
    RE_MAIN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
