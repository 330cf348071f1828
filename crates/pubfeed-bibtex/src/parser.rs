//! BibTeX parser implementation using nom
//!
//! Handles what reference managers export:
//! - @string definitions (expanded in later values)
//! - @preamble declarations
//! - @comment sections
//! - Braced, quoted, numeric and macro field values, joined with #
//! - Nested braces in field values
//! - Field names with `+`, as in biblatex `author+an`
//!
//! A malformed entry is recorded in [`BibTeXParseResult::errors`] with its
//! raw text and skipped; parsing resumes at the next `@`. The raw text of
//! `@string`, `@preamble` and `@comment` blocks is kept in
//! [`BibTeXParseResult::verbatim`] so a rewrite can carry them over.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};
use std::collections::HashMap;

use super::entry::{BibTeXEntry, BibTeXEntryType};

/// Parse error information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibTeXParseError {
    pub line: u32,
    pub message: String,
    /// Source text from the failing `@` up to the next one
    pub text: String,
    /// Number of entries parsed before this one
    pub entry_index: usize,
}

/// Result of parsing a BibTeX file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibTeXParseResult {
    pub entries: Vec<BibTeXEntry>,
    pub preambles: Vec<String>,
    pub strings: HashMap<String, String>,
    /// Raw `@string`, `@preamble` and `@comment` blocks in source order
    pub verbatim: Vec<String>,
    pub errors: Vec<BibTeXParseError>,
}

/// Error type for parsing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no BibTeX entry found")]
    NoEntry,
    #[error("invalid BibTeX syntax at line {line}")]
    InvalidSyntax { line: u32 },
}

/// Parse a BibTeX document
pub fn parse(input: &str) -> BibTeXParseResult {
    let mut result = BibTeXParseResult::default();
    let mut remaining = input;

    while !remaining.is_empty() {
        remaining = skip_whitespace_and_comments(remaining);
        if remaining.is_empty() {
            break;
        }

        if !remaining.starts_with('@') {
            // Text between entries is ignored
            match remaining.find('@') {
                Some(pos) => {
                    remaining = &remaining[pos..];
                    continue;
                }
                None => break,
            }
        }

        match parse_at_entry(remaining, &result.strings) {
            Ok((rest, at_entry)) => {
                let raw = &remaining[..remaining.len() - rest.len()];
                match at_entry {
                    AtEntry::Entry(entry) => result.entries.push(entry),
                    AtEntry::String(key, value) => {
                        result.strings.insert(key, value);
                        result.verbatim.push(raw.to_string());
                    }
                    AtEntry::Preamble(text) => {
                        result.preambles.push(text);
                        result.verbatim.push(raw.to_string());
                    }
                    AtEntry::Comment => result.verbatim.push(raw.trim_end().to_string()),
                }
                remaining = rest;
            }
            Err(_) => {
                let line = line_at(input, remaining);
                tracing::debug!("Skipping malformed BibTeX entry at line {}", line);
                let end = remaining[1..]
                    .find('@')
                    .map_or(remaining.len(), |pos| pos + 1);
                result.errors.push(BibTeXParseError {
                    line,
                    message: "Failed to parse entry".to_string(),
                    text: remaining[..end].trim_end().to_string(),
                    entry_index: result.entries.len(),
                });
                if end == remaining.len() {
                    break;
                }
                remaining = &remaining[end..];
            }
        }
    }

    result
}

/// Parse the first entry of a document
pub fn parse_entry(input: &str) -> Result<BibTeXEntry, ParseError> {
    let result = parse(input);
    if let Some(entry) = result.entries.into_iter().next() {
        return Ok(entry);
    }
    match result.errors.first() {
        Some(error) => Err(ParseError::InvalidSyntax { line: error.line }),
        None => Err(ParseError::NoEntry),
    }
}

/// 1-based line of `rest` within `input`
fn line_at(input: &str, rest: &str) -> u32 {
    let offset = input.len() - rest.len();
    input[..offset].matches('\n').count() as u32 + 1
}

/// Result of parsing an @ entry
enum AtEntry {
    Entry(BibTeXEntry),
    String(String, String),
    Preamble(String),
    Comment,
}

/// Skip whitespace and `%` line comments
fn skip_whitespace_and_comments(input: &str) -> &str {
    let mut rest = input;
    loop {
        rest = rest.trim_start();
        if rest.starts_with('%') {
            let end = rest.find('\n').unwrap_or(rest.len());
            rest = &rest[end..];
        } else {
            return rest;
        }
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-+".contains(c)
}

/// Parse an @ entry (entry, string, preamble, or comment)
fn parse_at_entry<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, AtEntry> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, entry_type) = take_while1(|c: char| c.is_ascii_alphanumeric())(rest)?;

    match entry_type.to_lowercase().as_str() {
        "string" => {
            let (rest, (key, value)) = parse_string_definition(rest, strings)?;
            Ok((rest, AtEntry::String(key, value)))
        }
        "preamble" => {
            let (rest, text) = parse_preamble(rest, strings)?;
            Ok((rest, AtEntry::Preamble(text)))
        }
        "comment" => {
            let (rest, _) = parse_comment_body(rest)?;
            Ok((rest, AtEntry::Comment))
        }
        _ => {
            let (rest, entry) = parse_entry_body(rest, entry_type, strings)?;
            Ok((rest, AtEntry::Entry(entry)))
        }
    }
}

/// Parse a @string definition
fn parse_string_definition<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, (key, value)) = parse_single_field(rest, strings)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, (key, value)))
}

/// Parse a @preamble
fn parse_preamble<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, String> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, value) = parse_field_value(rest, strings)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, value))
}

/// Parse a @comment body (braced, or to end of line)
fn parse_comment_body(input: &str) -> IResult<&str, ()> {
    let (rest, _) = multispace0(input)?;
    if rest.starts_with('{') {
        let (rest, _) = parse_braced_content(rest)?;
        Ok((rest, ()))
    } else {
        let pos = rest.find('\n').unwrap_or(rest.len());
        Ok((&rest[pos..], ()))
    }
}

/// Parse an entry body
fn parse_entry_body<'a>(
    input: &'a str,
    entry_type: &str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, BibTeXEntry> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;

    let (rest, cite_key) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:./+".contains(c))(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char(',')(rest)?;

    let (rest, fields) = parse_fields(rest, strings)?;

    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    let mut entry = BibTeXEntry::new(cite_key, BibTeXEntryType::from_str(entry_type));
    for (key, value) in fields {
        entry.add_field(key, value);
    }

    Ok((rest, entry))
}

/// Parse fields within an entry
fn parse_fields<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, Vec<(String, String)>> {
    let mut fields = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;
        if rest.starts_with('}') {
            return Ok((rest, fields));
        }

        match parse_single_field(rest, strings) {
            Ok((rest, field)) => {
                fields.push(field);
                let (rest, _) = multispace0(rest)?;
                remaining = rest.strip_prefix(',').unwrap_or(rest);
            }
            // The caller expects the closing brace next
            Err(_) => return Ok((remaining, fields)),
        }
    }
}

/// Parse a single field (key = value)
fn parse_single_field<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, key) = take_while1(is_key_char)(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = parse_field_value(rest, strings)?;

    Ok((rest, (key.to_string(), value)))
}

/// Parse a field value (braced, quoted, number, or string reference)
fn parse_field_value<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, String> {
    let mut result = String::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;

        let (rest, part) = alt((
            parse_braced_value,
            parse_quoted_value,
            map(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
                s.to_string()
            }),
            map(
                take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                // Undefined macros such as month abbreviations stay as written
                |s: &str| strings.get(s).cloned().unwrap_or_else(|| s.to_string()),
            ),
        ))(rest)?;

        result.push_str(&part);
        remaining = rest;

        let (rest, _) = multispace0(remaining)?;
        match rest.strip_prefix('#') {
            Some(stripped) => remaining = stripped,
            None => return Ok((rest, result)),
        }
    }
}

/// Parse a braced value {content}
fn parse_braced_value(input: &str) -> IResult<&str, String> {
    let (rest, content) = parse_braced_content(input)?;
    let inner = &content[1..content.len() - 1];
    Ok((rest, inner.to_string()))
}

/// Parse braced content including nested braces
fn parse_braced_content(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut depth = 0;
    let mut escaped = false;
    for (pos, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[..pos + 1]));
                }
            }
            '\\' => escaped = true,
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Parse a quoted value "content"
fn parse_quoted_value(input: &str) -> IResult<&str, String> {
    if !input.starts_with('"') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut result = String::new();
    let mut brace_depth = 0;
    let mut chars = input.char_indices().skip(1);

    while let Some((pos, c)) = chars.next() {
        match c {
            '"' if brace_depth == 0 => return Ok((&input[pos + 1..], result)),
            '{' => brace_depth += 1,
            '}' => brace_depth -= 1,
            '\\' => {
                result.push('\\');
                if let Some((_, next)) = chars.next() {
                    result.push(next);
                }
                continue;
            }
            _ => {}
        }
        result.push(c);
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_entry() {
        let input = r#"
@article{Smith2024,
    author = {John Smith},
    title = {A Great Paper},
    year = {2024},
    journal = {Nature},
}
"#;
        let result = parse(input);
        assert_eq!(result.entries.len(), 1);
        assert!(result.errors.is_empty());

        let entry = &result.entries[0];
        assert_eq!(entry.cite_key, "Smith2024");
        assert_eq!(entry.entry_type, BibTeXEntryType::Article);
        assert_eq!(entry.author(), Some("John Smith"));
        assert_eq!(entry.get_field("year"), Some("2024"));
    }

    #[test]
    fn test_parse_quoted_values() {
        let input = "@misc{Test2024,\n    author = \"Jos\u{e9} M\u{fc}ller\",\n    title = \"Testing {\"}Quotes{\"}\",\n}";
        let entry = parse_entry(input).unwrap();
        assert_eq!(entry.author(), Some("Jos\u{e9} M\u{fc}ller"));
        assert_eq!(entry.title(), Some("Testing {\"}Quotes{\"}"));
    }

    #[test]
    fn test_parse_nested_braces() {
        let entry = parse_entry("@article{T, title = {A {B}ook about {LaTeX}}}").unwrap();
        assert_eq!(entry.title(), Some("A {B}ook about {LaTeX}"));
    }

    #[test]
    fn test_parse_string_definitions_and_macros() {
        let input = r#"
@string{nature = "Nature"}
@article{Test2024,
    journal = nature,
    month = jun,
    pages = 1 # "--" # 10,
}
"#;
        let result = parse(input);
        assert_eq!(result.strings.get("nature"), Some(&"Nature".to_string()));
        let entry = &result.entries[0];
        assert_eq!(entry.get_field("journal"), Some("Nature"));
        assert_eq!(entry.get_field("month"), Some("jun"));
        assert_eq!(entry.get_field("pages"), Some("1--10"));
    }

    #[test]
    fn test_parse_plus_in_field_name() {
        let entry = parse_entry("@misc{k,\n  author+an = {1=highlight},\n  title = {T}\n}").unwrap();
        assert_eq!(entry.get_field("author+an"), Some("1=highlight"));
        assert_eq!(entry.title(), Some("T"));
    }

    #[test]
    fn test_recovers_after_malformed_entry() {
        let input = "% exported\n@article{Broken\n  title = {x}\n}\n\n@book{Good, title = {Fine}}\n";
        let result = parse(input);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].cite_key, "Good");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 2);
        assert_eq!(result.errors[0].text, "@article{Broken\n  title = {x}\n}");
        assert_eq!(result.errors[0].entry_index, 0);
    }

    #[test]
    fn test_unclosed_entry_keeps_raw_text() {
        let input = "@article{a, title = {A}}\n@book{broken, title = {unclosed\n\n@misc{m, note = {n}}\n";
        let result = parse(input);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].text, "@book{broken, title = {unclosed");
        assert_eq!(result.errors[0].entry_index, 1);
    }

    #[test]
    fn test_comments_and_preambles() {
        let input = "@comment{ignore me}\n@preamble{\"\\newcommand{\\x}{y}\"}\n@misc{a, note = {n}}";
        let result = parse(input);
        assert_eq!(result.preambles.len(), 1);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(
            result.verbatim,
            vec![
                "@comment{ignore me}".to_string(),
                "@preamble{\"\\newcommand{\\x}{y}\"}".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_entry_errors() {
        assert_eq!(parse_entry("no entries here"), Err(ParseError::NoEntry));
        assert_eq!(
            parse_entry("\n@article{oops title}"),
            Err(ParseError::InvalidSyntax { line: 2 })
        );
    }
}
