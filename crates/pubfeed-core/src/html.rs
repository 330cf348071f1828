//! Markup helpers

use std::borrow::Cow;

/// Replace the named `&apos;` entity with its numeric form.
///
/// Feed text exported from arXiv carries `&apos;`, which older HTML
/// renderers do not recognize; `&#39;` works everywhere.
pub fn html_fix(text: &str) -> Cow<'_, str> {
    if text.contains("&apos;") {
        Cow::Owned(text.replace("&apos;", "&#39;"))
    } else {
        Cow::Borrowed(text)
    }
}
