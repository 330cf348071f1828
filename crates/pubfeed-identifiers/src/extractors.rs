//! Identifier extraction from entry fields

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Path segment after arxiv.org/abs/, up to the next /, ? or #
    static ref ARXIV_ABS_REGEX: Regex =
        Regex::new(r"(?i)arxiv\.org/abs/(?P<id>[^/?#]+)").unwrap();

    // Version suffix on new- and old-style ids (1234.5678v2, hep-th/9901001v1)
    static ref ARXIV_VERSION_REGEX: Regex = Regex::new(r"v[0-9]+$").unwrap();

    static ref LEADING_YEAR_REGEX: Regex = Regex::new(r"^(?P<year>[0-9]{4})").unwrap();
}

/// Extract the versionless arXiv id from an abstract-page URL.
///
/// Returns `None` when the URL does not point at `arxiv.org/abs/` or
/// nothing remains after the version suffix is removed.
pub fn arxiv_id_from_url(url: &str) -> Option<String> {
    let id = ARXIV_ABS_REGEX.captures(url)?.name("id")?.as_str();
    let id = ARXIV_VERSION_REGEX.replace(id, "");
    if id.is_empty() {
        None
    } else {
        Some(id.into_owned())
    }
}

/// Leading 4-digit year of a date such as `2024-06-01T12:00:00Z`
pub fn leading_year(date: &str) -> Option<&str> {
    LEADING_YEAR_REGEX
        .captures(date)
        .and_then(|cap| cap.name("year"))
        .map(|m| m.as_str())
}
