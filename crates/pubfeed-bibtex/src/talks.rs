//! Talks feed to BibTeX
//!
//! Each talk becomes an `@unpublished` record so a CV tool can list talks
//! next to publications.

use std::str::FromStr;

use chrono::Month;
use pubfeed_domain::TalkEntry;

use crate::entry::{BibTeXEntry, BibTeXEntryType};

/// Types that carry a contribution title and slides
const TITLED_TYPES: [&str; 3] = ["Poster", "Oral", "Contributed"];

/// Types that describe a role rather than a talk
const ROLE_TYPES: [&str; 2] = ["Workshopper", "Logistics"];

/// Convert one talk into an `@unpublished` entry keyed by its slug
pub fn talk_to_bibtex(talk: &TalkEntry) -> BibTeXEntry {
    let cite_key: String = talk.url_slug.split(' ').collect();
    let mut entry = BibTeXEntry::new(cite_key, BibTeXEntryType::Unpublished);

    entry.add_field("title", talk.title.as_str());
    entry.add_field(
        "venue",
        format!(
            "{}, {}",
            talk.venue.as_deref().unwrap_or_default(),
            talk.location.as_deref().unwrap_or_default()
        ),
    );

    if let Some((month, year)) = month_and_year(&talk.date) {
        entry.add_field("month", format!("{:02}", month));
        entry.add_field("year", year);
    }

    let talk_type = talk.talk_type.as_str();
    entry.add_field("keywords", talk_type);

    if TITLED_TYPES.contains(&talk_type) {
        entry.add_field("type", format!(" {} title:", talk_type));
        entry.add_field("note", talk.cont_title.as_deref().unwrap_or_default());
        entry.add_field("url", talk.pdf_url.as_deref().unwrap_or_default());
    } else if ROLE_TYPES.contains(&talk_type) {
        entry.add_field("type", " Role:");
        entry.add_field("note", talk_type.to_lowercase());
        entry.add_field("url", talk.talk_url.as_deref().unwrap_or_default());
    }

    entry
}

/// Convert every talk, in feed order
pub fn talks_to_bibtex<'a>(talks: impl IntoIterator<Item = &'a TalkEntry>) -> Vec<BibTeXEntry> {
    talks.into_iter().map(talk_to_bibtex).collect()
}

/// Month number and year from a `"<Month name> <year>"` date
fn month_and_year(date: &str) -> Option<(u32, &str)> {
    let mut parts = date.split(' ');
    let (month, year) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    // `Month::from_str` also takes abbreviations; only full names count
    match Month::from_str(month) {
        Ok(parsed) if parsed.name().eq_ignore_ascii_case(month) => {
            Some((parsed.number_from_month(), year))
        }
        _ => {
            tracing::debug!("Date '{}' has no month name, leaving it out", date);
            None
        }
    }
}
