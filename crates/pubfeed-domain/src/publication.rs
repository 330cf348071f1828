//! Publication entry model

use serde::{Deserialize, Serialize};

use crate::lenient;

/// One record of a publications feed (`jsonarXivFeed`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationEntry {
    /// Abstract-page URL; doubles as the preprint link
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Comma-separated author names
    #[serde(default, deserialize_with = "lenient::text")]
    pub authors: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_ref: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub doi: Option<String>,
    /// Last update date, expected to start with a 4-digit year
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
}

impl PublicationEntry {
    /// Create a new entry with the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, authors: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            ..Default::default()
        }
    }

    /// Builder method to add a journal reference
    pub fn with_journal_ref(mut self, journal_ref: impl Into<String>) -> Self {
        self.journal_ref = Some(journal_ref.into());
        self
    }

    /// Builder method to add a DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Builder method to add the update date
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    /// Builder method to add a summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// The journal reference, if it is long enough to count as one.
    ///
    /// Single-character placeholders (a lone `-` or space left by an
    /// export) are treated as "not published yet".
    pub fn journal_reference(&self) -> Option<&str> {
        self.journal_ref
            .as_deref()
            .filter(|jr| jr.chars().count() > 1)
    }

    /// Whether this entry belongs with the published journal articles
    pub fn is_published(&self) -> bool {
        self.journal_reference().is_some()
    }

    /// The DOI, when present
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    /// DOI to link the title to: only published entries resolve via DOI
    pub fn title_doi(&self) -> Option<&str> {
        if self.is_published() {
            self.doi()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_reference_needs_two_chars() {
        let entry = PublicationEntry::new("x", "t", "a").with_journal_ref("-");
        assert!(!entry.is_published());
        assert_eq!(entry.journal_reference(), None);

        let entry = entry.with_journal_ref("PRL");
        assert!(entry.is_published());
    }

    #[test]
    fn test_title_doi_requires_journal_ref() {
        let preprint = PublicationEntry::new("x", "t", "a").with_doi("10.1/abc");
        assert_eq!(preprint.title_doi(), None);

        let article = preprint.with_journal_ref("Nature 1, 2 (2024)");
        assert_eq!(article.title_doi(), Some("10.1/abc"));
    }

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "id": "https://arxiv.org/abs/1234.5678v1",
            "title": "Sample arXiv Preprint",
            "authors": "Alice Smith, Bob Jones",
            "journal_ref": "",
            "doi": "",
            "updated": "2024-06-01",
            "summary": "This is a sample summary."
        }"#;
        let entry: PublicationEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "Sample arXiv Preprint");
        assert_eq!(entry.journal_ref, None);
        assert_eq!(entry.doi, None);
        assert_eq!(entry.updated.as_deref(), Some("2024-06-01"));
    }
}
