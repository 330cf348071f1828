//! BibTeX parsing, formatting and export
//!
//! Features:
//! - Nom-based parser that tolerates and reports malformed entries
//! - Formatter producing one field per line, and a document rewrite that
//!   keeps declarations and unparsed entries
//! - Talks feed to `@unpublished` records
//! - Tidy pass for reference-manager exports (field pruning, arXiv notes,
//!   `author+an` highlighting, entry keywords)

mod entry;
mod formatter;
pub mod parser;
mod talks;
mod tidy;

pub use entry::{BibTeXEntry, BibTeXEntryType, BibTeXField};
pub use formatter::{format_document, format_entries, format_entry};
pub use parser::{parse, parse_entry, BibTeXParseError, BibTeXParseResult, ParseError};
pub use talks::{talk_to_bibtex, talks_to_bibtex};
pub use tidy::{author_annotation, tidy_entries, tidy_entry, REMOVED_FIELDS};
