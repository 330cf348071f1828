//! Clean-up pass for BibTeX exported from a reference manager
//!
//! Prepares a library export for a CV style that highlights one author:
//! bulky or private fields are dropped, preprint notes are cut to the arXiv
//! id, and articles and preprints get a biblatex `author+an` annotation plus
//! a `journal` or `preprint` keyword.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::entry::{BibTeXEntry, BibTeXEntryType, BibTeXField};

/// Fields removed from every entry
pub const REMOVED_FIELDS: [&str; 6] = ["copyright", "issn", "shorttitle", "abstract", "urldate", "url"];

const AUTHOR_ANNOTATION: &str = "author+an";

lazy_static! {
    static ref ARXIV_NOTE_REGEX: Regex = Regex::new(r"arXiv:[^\s,;}\]]+").unwrap();
    static ref FIRST_AUTHOR_MARKER_REGEX: Regex = Regex::new(r"FTheory:(\d+)").unwrap();
}

/// Tidy every entry, keeping their order
pub fn tidy_entries(entries: Vec<BibTeXEntry>, author_name: &str) -> Vec<BibTeXEntry> {
    entries
        .into_iter()
        .map(|entry| tidy_entry(entry, author_name))
        .collect()
}

/// Tidy one entry
pub fn tidy_entry(mut entry: BibTeXEntry, author_name: &str) -> BibTeXEntry {
    for field in REMOVED_FIELDS {
        entry.remove_field(field);
    }

    let keyword = match entry.entry_type {
        BibTeXEntryType::Article => "journal",
        BibTeXEntryType::Misc => "preprint",
        _ => return entry,
    };

    // Reads the FTheory marker from the untrimmed note
    annotate_author(&mut entry, author_name);
    if entry.entry_type == BibTeXEntryType::Misc {
        trim_note_to_arxiv_id(&mut entry);
    }
    add_keyword(&mut entry, keyword);
    entry
}

/// Keep only the first `arXiv:<id>` token of the note, if there is one
fn trim_note_to_arxiv_id(entry: &mut BibTeXEntry) {
    let arxiv_id = entry
        .note()
        .and_then(|note| ARXIV_NOTE_REGEX.find(note))
        .map(|m| m.as_str().to_string());
    if let Some(arxiv_id) = arxiv_id {
        entry.set_field("note", arxiv_id);
    }
}

/// Build the `author+an` value: `<pos>=highlight` for the highlighted
/// author, `<n>=first` for a `FTheory:<n>` marker in the note, merged per
/// position and sorted
pub fn author_annotation(entry: &BibTeXEntry, author_name: &str) -> Option<String> {
    let mut annotations: BTreeMap<usize, Vec<&str>> = BTreeMap::new();

    let wanted = strip_braces(author_name);
    if let Some(index) = entry
        .authors()
        .iter()
        .position(|name| strip_braces(name) == wanted)
    {
        annotations.entry(index + 1).or_default().push("highlight");
    }

    let first_author = entry
        .note()
        .and_then(|note| FIRST_AUTHOR_MARKER_REGEX.captures(note))
        .and_then(|caps| caps[1].parse::<usize>().ok());
    if let Some(position) = first_author {
        annotations.entry(position).or_default().push("first");
    }

    if annotations.is_empty() {
        return None;
    }
    Some(
        annotations
            .iter()
            .map(|(position, labels)| format!("{}={}", position, labels.join(",")))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn annotate_author(entry: &mut BibTeXEntry, author_name: &str) {
    if entry.author().is_none() {
        return;
    }
    let annotation = author_annotation(entry, author_name);

    // A replaced annotation keeps its place
    let existing = entry
        .fields
        .iter()
        .position(|f| f.key.eq_ignore_ascii_case(AUTHOR_ANNOTATION));
    entry.remove_field(AUTHOR_ANNOTATION);

    match annotation {
        Some(value) => {
            let field = BibTeXField {
                key: AUTHOR_ANNOTATION.to_string(),
                value,
            };
            match existing {
                Some(index) => entry.fields.insert(index, field),
                None => entry.fields.push(field),
            }
        }
        None => tracing::debug!("{} does not list {}", entry.cite_key, author_name),
    }
}

/// Append `keyword` to the `keywords` (or `keyword`) field unless present
fn add_keyword(entry: &mut BibTeXEntry, keyword: &str) {
    let key = if entry.get_field("keywords").is_some() || entry.get_field("keyword").is_none() {
        "keywords"
    } else {
        "keyword"
    };

    let mut keywords: Vec<String> = entry
        .get_field(key)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    if !keywords.iter().any(|k| k == keyword) {
        keywords.push(keyword.to_string());
    }
    entry.set_field(key, keywords.join(", "));
}

fn strip_braces(name: &str) -> String {
    name.chars().filter(|c| *c != '{' && *c != '}').collect()
}
