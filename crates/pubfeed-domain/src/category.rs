//! Fixed display categories for both feed variants

use serde::{Deserialize, Serialize};

/// Talk categories, in the order they are listed on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkCategory {
    Invited,
    Contributed,
    Poster,
    Attended,
}

impl TalkCategory {
    /// All categories in display order
    pub const ALL: [TalkCategory; 4] = [
        TalkCategory::Invited,
        TalkCategory::Contributed,
        TalkCategory::Poster,
        TalkCategory::Attended,
    ];

    /// Map a feed `type` value (case-insensitive) onto a category
    pub fn from_type(talk_type: &str) -> Option<Self> {
        match talk_type.to_lowercase().as_str() {
            "invited" => Some(Self::Invited),
            "contributed" => Some(Self::Contributed),
            "poster" => Some(Self::Poster),
            "attended" => Some(Self::Attended),
            _ => None,
        }
    }

    /// Section heading shown above the category
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Invited => "Invited Talks",
            Self::Contributed => "Contributed Talks",
            Self::Poster => "Poster Presentations",
            Self::Attended => "Attended Conferences/Workshops",
        }
    }
}

/// Publication categories, in the order they are listed on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationCategory {
    /// No journal reference yet
    Preprints,
    /// Carries a journal reference
    Journals,
}

impl PublicationCategory {
    pub const ALL: [PublicationCategory; 2] =
        [PublicationCategory::Preprints, PublicationCategory::Journals];

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Preprints => "Preprints",
            Self::Journals => "Journals",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_is_case_insensitive() {
        assert_eq!(TalkCategory::from_type("POSTER"), Some(TalkCategory::Poster));
        assert_eq!(
            TalkCategory::from_type("Attended"),
            Some(TalkCategory::Attended)
        );
        assert_eq!(TalkCategory::from_type("oral"), None);
    }

    #[test]
    fn test_declared_order() {
        let headings: Vec<_> = TalkCategory::ALL.iter().map(|c| c.heading()).collect();
        assert_eq!(
            headings,
            vec![
                "Invited Talks",
                "Contributed Talks",
                "Poster Presentations",
                "Attended Conferences/Workshops"
            ]
        );
        assert_eq!(PublicationCategory::ALL[0], PublicationCategory::Preprints);
    }
}
