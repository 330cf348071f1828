//! Talk and event entry model

use serde::{Deserialize, Serialize};

use crate::category::TalkCategory;
use crate::lenient;

/// One record of a talks feed (`tableFeed`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Raw category discriminant as written in the feed
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub talk_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url_slug: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub talk_url: Option<String>,
    /// Title of the contribution given at the event
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cont_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_url: Option<String>,
    /// Site-relative path to a references page
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub references: Option<String>,
}

impl TalkEntry {
    /// Create a new entry with a title and type
    pub fn new(title: impl Into<String>, talk_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            talk_type: talk_type.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder method to set venue and location
    pub fn with_place(mut self, venue: impl Into<String>, location: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the slug
    pub fn with_slug(mut self, url_slug: impl Into<String>) -> Self {
        self.url_slug = url_slug.into();
        self
    }

    /// Display category, or `None` when the type is not one we list
    pub fn category(&self) -> Option<TalkCategory> {
        TalkCategory::from_type(&self.talk_type)
    }

    /// Date, venue and location in display order, skipping empty parts
    pub fn details(&self) -> Vec<&str> {
        [
            Some(self.date.as_str()).filter(|d| !d.is_empty()),
            self.venue.as_deref(),
            self.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_type() {
        assert_eq!(
            TalkEntry::new("t", "Invited").category(),
            Some(TalkCategory::Invited)
        );
        assert_eq!(TalkEntry::new("t", "seminar").category(), None);
        assert_eq!(TalkEntry::new("t", "").category(), None);
    }

    #[test]
    fn test_details_skip_missing_parts() {
        let talk = TalkEntry::new("t", "poster").with_date("March 2022");
        assert_eq!(talk.details(), vec!["March 2022"]);

        let talk = talk.with_place("Grand Amphitheater", "Paris, France");
        assert_eq!(
            talk.details(),
            vec!["March 2022", "Grand Amphitheater", "Paris, France"]
        );
    }

    #[test]
    fn test_type_key_round_trip() {
        let json = r#"{"title": "Exploring the Cosmos", "type": "poster", "url_slug": "xy7k2p"}"#;
        let talk: TalkEntry = serde_json::from_str(json).unwrap();
        assert_eq!(talk.talk_type, "poster");
        assert_eq!(talk.url_slug, "xy7k2p");

        let out = serde_json::to_value(&talk).unwrap();
        assert_eq!(out["type"], "poster");
        assert!(out.get("pdf_url").is_none());
    }
}
