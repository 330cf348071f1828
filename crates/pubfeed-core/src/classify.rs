//! Classification and ordering of feed entries
//!
//! Entries are borrowed from the feed, never copied or modified. Talks are
//! bucketed by their `type` and each bucket is reversed, because talk feeds
//! are kept newest-first while the page lists them oldest-first. Publication
//! feeds keep their own order; they are cut to the configured maximum and
//! split on whether a journal reference is present.

use pubfeed_domain::{Feed, PublicationCategory, PublicationEntry, TalkCategory, TalkEntry};

/// A category together with the entries listed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a, C, E> {
    pub category: C,
    pub entries: Vec<&'a E>,
}

impl<'a, C, E> Section<'a, C, E> {
    pub fn new(category: C) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Talk entries grouped by category, in declared category order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkSections<'a> {
    pub sections: Vec<Section<'a, TalkCategory, TalkEntry>>,
    /// Entries whose type matched no category
    pub dropped: usize,
}

impl<'a> TalkSections<'a> {
    /// Number of entries that will be rendered
    pub fn total(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Section for one category
    pub fn get(&self, category: TalkCategory) -> Option<&Section<'a, TalkCategory, TalkEntry>> {
        self.sections.iter().find(|s| s.category == category)
    }
}

/// Publication entries split into preprints and journal articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationSections<'a> {
    pub preprints: Section<'a, PublicationCategory, PublicationEntry>,
    pub journals: Section<'a, PublicationCategory, PublicationEntry>,
    /// Entries left after the cutoff
    pub selected: usize,
    /// Whether the cutoff hid some entries
    pub extra_entries: bool,
}

impl<'a> PublicationSections<'a> {
    /// Sections in display order: preprints, then journals
    pub fn in_display_order(&self) -> [&Section<'a, PublicationCategory, PublicationEntry>; 2] {
        [&self.preprints, &self.journals]
    }
}

/// Bucket talks by category, keeping feed order inside each bucket
pub fn partition_talks(feed: &Feed<TalkEntry>) -> TalkSections<'_> {
    let mut sections: Vec<_> = TalkCategory::ALL.iter().map(|&c| Section::new(c)).collect();
    let mut dropped = 0;

    for entry in feed.iter() {
        match entry.category() {
            Some(category) => {
                if let Some(section) = sections.iter_mut().find(|s| s.category == category) {
                    section.entries.push(entry);
                }
            }
            None => {
                dropped += 1;
                tracing::debug!(
                    "Skipping talk '{}' with unrecognized type '{}'",
                    entry.title,
                    entry.talk_type
                );
            }
        }
    }

    TalkSections { sections, dropped }
}

/// Reverse every section in place (newest-first feed, oldest-first page)
pub fn order_oldest_first<C, E>(sections: &mut [Section<'_, C, E>]) {
    for section in sections.iter_mut() {
        section.entries.reverse();
    }
}

/// Classify talks for display: bucket, then order oldest-first
pub fn classify_talks(feed: &Feed<TalkEntry>) -> TalkSections<'_> {
    let mut talks = partition_talks(feed);
    order_oldest_first(&mut talks.sections);
    tracing::debug!(
        "Classified {} talks ({} dropped)",
        talks.total(),
        talks.dropped
    );
    talks
}

/// Number of feed entries to consider and whether some were cut.
///
/// A `max_entries` of 0 means no limit.
pub fn cutoff(feed_len: usize, max_entries: usize) -> (usize, bool) {
    if max_entries == 0 || max_entries >= feed_len {
        (feed_len, false)
    } else {
        (max_entries, true)
    }
}

/// Select the first `max_entries` publications and split them by journal reference
pub fn select_publications(
    feed: &Feed<PublicationEntry>,
    max_entries: usize,
) -> PublicationSections<'_> {
    let (selected, extra_entries) = cutoff(feed.len(), max_entries);
    if extra_entries {
        tracing::debug!(
            "Showing {} of {} publications",
            selected,
            feed.len()
        );
    }

    let mut preprints = Section::new(PublicationCategory::Preprints);
    let mut journals = Section::new(PublicationCategory::Journals);
    for entry in feed.entries.iter().take(selected) {
        if entry.is_published() {
            journals.entries.push(entry);
        } else {
            preprints.entries.push(entry);
        }
    }

    PublicationSections {
        preprints,
        journals,
        selected,
        extra_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk(title: &str, talk_type: &str) -> TalkEntry {
        TalkEntry::new(title, talk_type)
    }

    fn titles<'a, C>(section: &Section<'a, C, TalkEntry>) -> Vec<&'a str> {
        section.entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_partition_keeps_feed_order() {
        let feed = Feed::new(vec![
            talk("new poster", "poster"),
            talk("old poster", "Poster"),
            talk("workshop", "attended"),
        ]);
        let talks = partition_talks(&feed);
        assert_eq!(
            titles(talks.get(TalkCategory::Poster).unwrap()),
            vec!["new poster", "old poster"]
        );
        assert_eq!(talks.total(), 3);
    }

    #[test]
    fn test_classify_reverses_each_category() {
        let feed = Feed::new(vec![
            talk("c2", "contributed"),
            talk("i2", "invited"),
            talk("c1", "contributed"),
            talk("i1", "invited"),
        ]);
        let talks = classify_talks(&feed);
        assert_eq!(
            titles(talks.get(TalkCategory::Invited).unwrap()),
            vec!["i1", "i2"]
        );
        assert_eq!(
            titles(talks.get(TalkCategory::Contributed).unwrap()),
            vec!["c1", "c2"]
        );
        // feed untouched
        assert_eq!(feed.entries[0].title, "c2");
    }

    #[test]
    fn test_unknown_types_dropped() {
        let feed = Feed::new(vec![talk("a", "seminar"), talk("b", ""), talk("c", "invited")]);
        let talks = classify_talks(&feed);
        assert_eq!(talks.dropped, 2);
        assert_eq!(talks.total(), 1);
    }

    #[test]
    fn test_sections_in_declared_order() {
        let feed = Feed::new(vec![talk("a", "attended"), talk("i", "invited")]);
        let order: Vec<_> = classify_talks(&feed)
            .sections
            .iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(order, TalkCategory::ALL.to_vec());
    }

    #[test]
    fn test_cutoff() {
        assert_eq!(cutoff(5, 0), (5, false));
        assert_eq!(cutoff(5, 10), (5, false));
        assert_eq!(cutoff(5, 5), (5, false));
        assert_eq!(cutoff(5, 3), (3, true));
        assert_eq!(cutoff(0, 3), (0, false));
    }

    #[test]
    fn test_select_publications_splits_and_keeps_order() {
        let feed = Feed::new(vec![
            PublicationEntry::new("a", "A", "X").with_journal_ref("PRL 1"),
            PublicationEntry::new("b", "B", "X"),
            PublicationEntry::new("c", "C", "X").with_journal_ref("PRD 2"),
            PublicationEntry::new("d", "D", "X").with_journal_ref("-"),
        ]);
        let pubs = select_publications(&feed, 0);
        let journals: Vec<_> = pubs.journals.entries.iter().map(|e| e.id.as_str()).collect();
        let preprints: Vec<_> = pubs.preprints.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(journals, vec!["a", "c"]);
        assert_eq!(preprints, vec!["b", "d"]);
        assert!(!pubs.extra_entries);
    }

    #[test]
    fn test_select_publications_applies_cutoff_first() {
        let feed = Feed::new(vec![
            PublicationEntry::new("a", "A", "X"),
            PublicationEntry::new("b", "B", "X"),
            PublicationEntry::new("c", "C", "X").with_journal_ref("PRD 2"),
        ]);
        let pubs = select_publications(&feed, 2);
        assert_eq!(pubs.selected, 2);
        assert!(pubs.extra_entries);
        assert!(pubs.journals.is_empty());
        assert_eq!(pubs.preprints.len(), 2);
    }
}
