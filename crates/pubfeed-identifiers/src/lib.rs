//! Identifier extraction and link building for feed entries
//!
//! - arXiv id extraction from abstract-page URLs
//! - Year extraction from update timestamps
//! - DOI resolver and arXiv author-search links

pub mod extractors;
pub mod links;

pub use extractors::*;
pub use links::*;
