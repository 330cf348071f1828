//! TSV to feed script conversion
//!
//! The first line of the table names the columns; every following line
//! becomes one entry keyed by those names, with all values kept as strings.
//! The result is written as a feed script calling `<output stem>Feed`.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ConvertError;
use crate::feed_script::write_feed_script;

/// One table row as ordered `column -> value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsvRecord {
    fields: Vec<(String, String)>,
}

impl TsvRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Set a column. A repeated column keeps its first position and takes
    /// the new value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Columns in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for TsvRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Trim a cell and drop one leading and one trailing double quote
fn clean_value(raw: &str) -> String {
    let value = raw.trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.to_string()
}

/// Split one line into cells. Only `\n` ends a record, so a stray `\r`
/// stays inside its cell.
fn split_cells(line: &str) -> Result<csv::StringRecord, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(row) => Ok(row?),
        None => Ok(csv::StringRecord::new()),
    }
}

/// Parse tab-separated text into records.
///
/// Every line after the header is one record: short rows get `""` for the
/// missing columns, extra cells are ignored, and a blank line becomes a
/// record of empty values. Quotes carry no meaning to the tokenizer, so a
/// cell may contain `"` freely.
pub fn tsv_to_records(tsv: &str) -> Result<Vec<TsvRecord>, ConvertError> {
    let mut lines = tsv.trim().split('\n');

    let headers: Vec<String> = match lines.next() {
        Some(line) => split_cells(line)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let mut records = Vec::new();
    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            tracing::warn!(
                "Line {} of TSV input is blank, writing an empty entry",
                offset + 2
            );
        }
        let row = split_cells(line)?;
        let mut record = TsvRecord::new();
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).map(clean_value).unwrap_or_default();
            record.insert(header.as_str(), value);
        }
        records.push(record);
    }

    tracing::debug!(
        "Parsed {} rows with {} columns",
        records.len(),
        headers.len()
    );
    Ok(records)
}

/// Handler name for an output file: stem plus `Feed` (`talks.js` -> `talksFeed`)
pub fn callback_name_for(output: &Path) -> String {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}Feed", stem)
}

/// Convert TSV text to a feed script calling `callback`
pub fn convert_str(tsv: &str, callback: &str) -> Result<String, ConvertError> {
    let records = tsv_to_records(tsv)?;
    Ok(write_feed_script(callback, &records)?)
}

/// Convert a TSV file into a feed script file; returns the number of entries written
pub fn convert_file(input: &Path, output: &Path) -> Result<usize, ConvertError> {
    let tsv = std::fs::read_to_string(input)?;
    let records = tsv_to_records(&tsv)?;
    let callback = callback_name_for(output);
    let script = write_feed_script(&callback, &records)?;
    std::fs::write(output, script)?;

    tracing::info!(
        "Wrote {} entries from {} to {} ({})",
        records.len(),
        input.display(),
        output.display(),
        callback
    );
    Ok(records.len())
}
