//! Feed scripts: `handler({ entries: [...] });`
//!
//! A feed is published as a script that calls a named handler with the feed
//! object, so a page can load it with a plain `<script>` tag. Here the call
//! is parsed back into data instead of executed. The object may be strict
//! JSON (as written by [`write_feed_script`]) or a hand-written JavaScript
//! object literal with bare keys, single-quoted strings, trailing commas and
//! comments.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use pubfeed_domain::{Feed, FeedKind, PublicationEntry, TalkEntry};

use crate::error::FeedScriptError;

lazy_static! {
    static ref HANDLER_CALL_REGEX: Regex = Regex::new(
        r"(?s)(?P<callback>[A-Za-z_$][A-Za-z0-9_$]*)\s*\(\s*(?P<body>\{.*\})\s*\)\s*;?"
    )
    .unwrap();
}

/// A parsed handler call
#[derive(Debug, Clone, PartialEq)]
pub struct FeedScript {
    /// Name of the handler the script calls
    pub callback: String,
    /// The feed object passed to it
    pub body: serde_json::Value,
}

impl FeedScript {
    /// Feed variant implied by the handler name, if it is a known one
    pub fn kind(&self) -> Option<FeedKind> {
        FeedKind::from_callback(&self.callback)
    }

    /// Deserialize the body as a feed of `E`
    pub fn into_feed<E: DeserializeOwned>(self) -> Result<Feed<E>, FeedScriptError> {
        Ok(serde_json::from_value(self.body)?)
    }

    /// Deserialize the body as the given variant
    pub fn into_loaded(self, kind: FeedKind) -> Result<LoadedFeed, FeedScriptError> {
        Ok(match kind {
            FeedKind::Publications => LoadedFeed::Publications(self.into_feed()?),
            FeedKind::Talks => LoadedFeed::Talks(self.into_feed()?),
        })
    }
}

/// A feed of either variant, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedFeed {
    Publications(Feed<PublicationEntry>),
    Talks(Feed<TalkEntry>),
}

impl LoadedFeed {
    pub fn kind(&self) -> FeedKind {
        match self {
            Self::Publications(_) => FeedKind::Publications,
            Self::Talks(_) => FeedKind::Talks,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Publications(feed) => feed.len(),
            Self::Talks(feed) => feed.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a feed script
pub fn parse_feed_script(script: &str) -> Result<FeedScript, FeedScriptError> {
    let captures = HANDLER_CALL_REGEX
        .captures(script)
        .ok_or(FeedScriptError::MissingCallback)?;
    let callback = captures["callback"].to_string();
    let body = &captures["body"];

    let body = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(&object_literal_to_json(body))?,
    };

    Ok(FeedScript { callback, body })
}

/// Read and parse a feed script from disk
pub fn load_feed_file(path: &Path) -> Result<FeedScript, FeedScriptError> {
    let script = std::fs::read_to_string(path).map_err(|e| FeedScriptError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let parsed = parse_feed_script(&script)?;
    tracing::debug!(
        "Loaded feed script {} calling {}",
        path.display(),
        parsed.callback
    );
    Ok(parsed)
}

#[derive(Serialize)]
struct FeedBody<'a, T> {
    entries: &'a [T],
}

/// Write `callback({ "entries": [...] });` with two-space indented JSON
pub fn write_feed_script<T: Serialize>(
    callback: &str,
    entries: &[T],
) -> Result<String, serde_json::Error> {
    let body = serde_json::to_string_pretty(&FeedBody { entries })?;
    Ok(format!("{}({});", callback, body))
}

/// Rewrite a JavaScript object literal as JSON.
///
/// Handles what hand-written feeds use: bare identifier keys, single-quoted
/// strings, trailing commas and comments. Anything else is passed through
/// for the JSON parser to judge.
fn object_literal_to_json(literal: &str) -> String {
    let chars: Vec<char> = literal.chars().collect();
    let mut out = String::with_capacity(literal.len() + 32);
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        match c {
            '"' | '\'' => {
                pos = copy_string(&chars, pos, &mut out);
                continue;
            }
            '/' if chars.get(pos + 1) == Some(&'/') => {
                while pos < chars.len() && chars[pos] != '\n' {
                    pos += 1;
                }
                continue;
            }
            '/' if chars.get(pos + 1) == Some(&'*') => {
                pos += 2;
                while pos < chars.len() && !(chars[pos] == '*' && chars.get(pos + 1) == Some(&'/'))
                {
                    pos += 1;
                }
                pos += 2;
                continue;
            }
            '}' | ']' => {
                // Trailing comma
                let trimmed_len = out.trim_end().len();
                if out[..trimmed_len].ends_with(',') {
                    out.truncate(trimmed_len - 1);
                }
                out.push(c);
            }
            c if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
                let start = pos;
                while pos < chars.len()
                    && (chars[pos].is_ascii_alphanumeric() || chars[pos] == '_' || chars[pos] == '$')
                {
                    pos += 1;
                }
                let ident: String = chars[start..pos].iter().collect();
                let mut look = pos;
                while look < chars.len() && chars[look].is_whitespace() {
                    look += 1;
                }
                if chars.get(look) == Some(&':') {
                    out.push('"');
                    out.push_str(&ident);
                    out.push('"');
                } else {
                    out.push_str(&ident);
                }
                continue;
            }
            _ => out.push(c),
        }
        pos += 1;
    }

    out
}

/// Copy a quoted string starting at `start` as a JSON string; returns the
/// position after the closing quote
fn copy_string(chars: &[char], start: usize, out: &mut String) -> usize {
    let quote = chars[start];
    let mut pos = start + 1;
    out.push('"');

    while pos < chars.len() {
        let c = chars[pos];
        if c == '\\' && pos + 1 < chars.len() {
            let next = chars[pos + 1];
            if next == '\'' {
                out.push('\'');
            } else {
                out.push('\\');
                out.push(next);
            }
            pos += 2;
            continue;
        }
        if c == quote {
            out.push('"');
            return pos + 1;
        }
        if c == '"' {
            out.push_str("\\\"");
        } else {
            out.push(c);
        }
        pos += 1;
    }

    out.push('"');
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_JS: &str = r#"tableFeed({
  "entries": [
    {
      "title": "Exploring the Cosmos",
      "type": "poster",
      "date": "March 2022",
      "location": "Paris, France",
      "venue": "Grand Amphitheater",
      "url_slug": "xy7k2p"
    }
  ]
});
"#;

    const PUBLICATIONS_JS: &str = r#"jsonarXivFeed({
  entries: [
    {
      id: "https://arxiv.org/abs/1234.5678v1",
      title: 'A preprint: "quoted", isn\'t it',
      authors: "Alice Smith, Bob Jones", // first author
      journal_ref: "",
      updated: "2024-06-01",
    },
  ]
});"#;

    #[test]
    fn test_parse_json_body() {
        let script = parse_feed_script(TABLE_JS).unwrap();
        assert_eq!(script.callback, "tableFeed");
        assert_eq!(script.kind(), Some(FeedKind::Talks));

        let feed: Feed<TalkEntry> = script.into_feed().unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.entries[0].venue.as_deref(), Some("Grand Amphitheater"));
    }

    #[test]
    fn test_parse_object_literal_body() {
        let script = parse_feed_script(PUBLICATIONS_JS).unwrap();
        assert_eq!(script.kind(), Some(FeedKind::Publications));

        let feed: Feed<PublicationEntry> = script.into_feed().unwrap();
        let entry = &feed.entries[0];
        assert_eq!(entry.title, "A preprint: \"quoted\", isn't it");
        assert_eq!(entry.authors, "Alice Smith, Bob Jones");
        assert_eq!(entry.journal_ref, None);
    }

    #[test]
    fn test_missing_handler_call() {
        assert!(matches!(
            parse_feed_script("var feed = 1;"),
            Err(FeedScriptError::MissingCallback)
        ));
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            parse_feed_script("tableFeed({ entries: [ oops ] });"),
            Err(FeedScriptError::Json(_))
        ));
    }

    #[test]
    fn test_write_feed_script_format() {
        let entries = vec![TalkEntry::new("demo", "poster")];
        let script = write_feed_script("talksFeed", &entries).unwrap();
        assert!(script.starts_with("talksFeed({\n  \"entries\": [\n    {\n"));
        assert!(script.ends_with("}\n  ]\n});"));

        let reparsed: Feed<TalkEntry> = parse_feed_script(&script).unwrap().into_feed().unwrap();
        assert_eq!(reparsed.entries, entries);
    }

    #[test]
    fn test_into_loaded() {
        let loaded = parse_feed_script(TABLE_JS)
            .unwrap()
            .into_loaded(FeedKind::Talks)
            .unwrap();
        assert_eq!(loaded.kind(), FeedKind::Talks);
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_literal_normalization() {
        assert_eq!(
            object_literal_to_json("{ a: 1, b_2: [true, null,], /* c */ }"),
            "{ \"a\": 1, \"b_2\": [true, null]}"
        );
    }
}
