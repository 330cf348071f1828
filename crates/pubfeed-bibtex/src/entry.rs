//! BibTeX entry data structures

/// BibTeX entry type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BibTeXEntryType {
    Article,
    Book,
    InCollection,
    InProceedings,
    Misc,
    PhdThesis,
    TechReport,
    Unpublished,
    Online,
    /// Any other type, with its name as written
    Other(String),
}

impl BibTeXEntryType {
    /// Parse an entry type from a string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "misc" => Self::Misc,
            "phdthesis" => Self::PhdThesis,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            "online" | "electronic" | "www" => Self::Online,
            _ => Self::Other(s.to_string()),
        }
    }

    /// Entry type as written after `@`
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Online => "online",
            Self::Other(name) => name,
        }
    }
}

/// A single BibTeX field (key-value pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXField {
    pub key: String,
    pub value: String,
}

/// A parsed BibTeX entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXEntry {
    pub cite_key: String,
    pub entry_type: BibTeXEntryType,
    pub fields: Vec<BibTeXField>,
}

impl BibTeXEntry {
    /// Create a new BibTeX entry
    pub fn new(cite_key: impl Into<String>, entry_type: BibTeXEntryType) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type,
            fields: Vec::new(),
        }
    }

    /// Add a field to the entry
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push(BibTeXField {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Get a field value by key (case-insensitive)
    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key.eq_ignore_ascii_case(key))
            .map(|f| f.value.as_str())
    }

    /// Replace the value of an existing field, or append it
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|f| f.key.eq_ignore_ascii_case(key)) {
            Some(field) => field.value = value.into(),
            None => self.add_field(key, value),
        }
    }

    /// Remove every field with this key (case-insensitive); returns how many went
    pub fn remove_field(&mut self, key: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|f| !f.key.eq_ignore_ascii_case(key));
        before - self.fields.len()
    }

    pub fn title(&self) -> Option<&str> {
        self.get_field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.get_field("author")
    }

    pub fn note(&self) -> Option<&str> {
        self.get_field("note")
    }

    /// Authors split on ` and `, with line breaks folded and names trimmed
    pub fn authors(&self) -> Vec<String> {
        self.author()
            .map(|authors| {
                authors
                    .replace('\n', " ")
                    .split(" and ")
                    .map(|name| name.trim().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_parsing() {
        assert_eq!(
            BibTeXEntryType::from_str("ARTICLE"),
            BibTeXEntryType::Article
        );
        assert_eq!(
            BibTeXEntryType::from_str("conference"),
            BibTeXEntryType::InProceedings
        );
        assert_eq!(
            BibTeXEntryType::from_str("patent"),
            BibTeXEntryType::Other("patent".to_string())
        );
        assert_eq!(BibTeXEntryType::from_str("patent").as_str(), "patent");
    }

    #[test]
    fn test_field_access() {
        let mut entry = BibTeXEntry::new("Smith2024", BibTeXEntryType::Article);
        entry.add_field("Title", "A Great Paper");
        entry.add_field("author", "Smith, John and\n  Doe, Jane");

        assert_eq!(entry.title(), Some("A Great Paper"));
        assert_eq!(entry.authors(), vec!["Smith, John", "Doe, Jane"]);

        entry.set_field("title", "Renamed");
        assert_eq!(entry.fields.len(), 2);
        assert_eq!(entry.title(), Some("Renamed"));

        entry.set_field("year", "2024");
        assert_eq!(entry.fields.last().map(|f| f.key.as_str()), Some("year"));
    }

    #[test]
    fn test_remove_field() {
        let mut entry = BibTeXEntry::new("k", BibTeXEntryType::Misc);
        entry.add_field("URL", "https://example.org");
        entry.add_field("url", "https://example.com");
        entry.add_field("note", "n");
        assert_eq!(entry.remove_field("url"), 2);
        assert_eq!(entry.remove_field("url"), 0);
        assert_eq!(entry.note(), Some("n"));
    }

    #[test]
    fn test_no_authors() {
        let entry = BibTeXEntry::new("k", BibTeXEntryType::Misc);
        assert!(entry.authors().is_empty());
    }
}
