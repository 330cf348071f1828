//! Domain types for publication and talk feeds
//!
//! This crate provides the records a feed script carries and the
//! buckets they are displayed under:
//! - PublicationEntry: an arXiv preprint or published paper
//! - TalkEntry: an invited/contributed talk, poster, or attended event
//! - Entry: sum type over both record shapes
//! - Feed: the `{ entries: [...] }` wrapper
//! - TalkCategory, PublicationCategory: fixed display categories

pub mod category;
pub mod feed;
pub mod lenient;
pub mod publication;
pub mod talk;

pub use category::*;
pub use feed::*;
pub use publication::*;
pub use talk::*;
