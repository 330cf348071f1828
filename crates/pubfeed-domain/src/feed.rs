//! Feed wrapper and variant tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::publication::PublicationEntry;
use crate::talk::TalkEntry;

/// An ordered list of entries, serialized as `{ "entries": [...] }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed<E> {
    #[serde(default = "Vec::new")]
    pub entries: Vec<E>,
}

impl<E> Feed<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }
}

impl<E> Default for Feed<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> FromIterator<E> for Feed<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Which record shape a feed carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Publications,
    Talks,
}

impl FeedKind {
    /// Handler name the feed script calls
    pub fn callback_name(&self) -> &'static str {
        match self {
            Self::Publications => "jsonarXivFeed",
            Self::Talks => "tableFeed",
        }
    }

    /// Element id the rendered list is placed into
    pub fn container_id(&self) -> &'static str {
        match self {
            Self::Publications => "arxivfeed",
            Self::Talks => "tablefeed",
        }
    }

    /// Recognize a feed variant from the handler its script calls
    pub fn from_callback(name: &str) -> Option<Self> {
        match name {
            "jsonarXivFeed" => Some(Self::Publications),
            "tableFeed" => Some(Self::Talks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publications => "publications",
            Self::Talks => "talks",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publications" | "arxiv" => Ok(Self::Publications),
            "talks" | "table" => Ok(Self::Talks),
            other => Err(format!(
                "unknown feed kind '{}' (expected publications or talks)",
                other
            )),
        }
    }
}

/// A single record of either feed variant
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Publication(PublicationEntry),
    Talk(TalkEntry),
}

impl Entry {
    pub fn kind(&self) -> FeedKind {
        match self {
            Self::Publication(_) => FeedKind::Publications,
            Self::Talk(_) => FeedKind::Talks,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Publication(p) => &p.title,
            Self::Talk(t) => &t.title,
        }
    }
}

impl From<PublicationEntry> for Entry {
    fn from(entry: PublicationEntry) -> Self {
        Self::Publication(entry)
    }
}

impl From<TalkEntry> for Entry {
    fn from(entry: TalkEntry) -> Self {
        Self::Talk(entry)
    }
}
