//! BibTeX formatting module
//!
//! Converts BibTeXEntry structures back to BibTeX string format.

use super::entry::BibTeXEntry;
use super::parser::BibTeXParseResult;

/// Format a single BibTeX entry to string
pub fn format_entry(entry: &BibTeXEntry) -> String {
    let mut result = String::new();

    result.push('@');
    result.push_str(entry.entry_type.as_str());
    result.push('{');
    result.push_str(&entry.cite_key);
    result.push_str(",\n");

    for field in &entry.fields {
        result.push_str("    ");
        result.push_str(&field.key);
        result.push_str(" = ");
        result.push_str(&format_field_value(&field.value));
        result.push_str(",\n");
    }

    result.push('}');
    result
}

/// Format entries separated by blank lines, with a trailing newline
pub fn format_entries(entries: &[BibTeXEntry]) -> String {
    let mut result = entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

/// Rewrite a parsed document: `@string`, `@preamble` and `@comment` blocks
/// first, then the entries with every unparsed chunk written back as it was,
/// at its original place among them
pub fn format_document(document: &BibTeXParseResult) -> String {
    let mut blocks: Vec<String> = document.verbatim.clone();
    let mut unparsed = document.errors.iter().peekable();

    for (index, entry) in document.entries.iter().enumerate() {
        while let Some(error) = unparsed.next_if(|e| e.entry_index <= index) {
            blocks.push(error.text.clone());
        }
        blocks.push(format_entry(entry));
    }
    blocks.extend(unparsed.map(|e| e.text.clone()));

    let mut result = blocks.join("\n\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

/// Numbers go bare, everything else in braces so LaTeX markup survives
fn format_field_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }
    format!("{{{}}}", value)
}
