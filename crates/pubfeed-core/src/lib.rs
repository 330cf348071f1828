//! Publication and talk list rendering
//!
//! Two pipelines share the same shape:
//! - feed script → [`classify`] → [`numbering`] → [`render`] → HTML fragment
//! - TSV table → [`convert`] → feed script
//!
//! Rendering is a pure function of the feed and a [`RenderConfig`]; loading
//! the feed script ([`feed_script`]) is a separate step so the render call
//! never waits on I/O.

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod feed_script;
pub mod html;
pub mod numbering;
pub mod render;

pub use classify::{
    classify_talks, order_oldest_first, partition_talks, select_publications,
    PublicationSections, Section, TalkSections,
};
pub use config::{ConfigError, PublicationConfig, RenderConfig, TalkConfig};
pub use convert::{callback_name_for, convert_file, convert_str, tsv_to_records, TsvRecord};
pub use error::{ConvertError, FeedScriptError, PubfeedError, Result};
pub use feed_script::{
    load_feed_file, parse_feed_script, write_feed_script, FeedScript, LoadedFeed,
};
pub use html::html_fix;
pub use numbering::DisplayCounter;
pub use render::{
    render_entry, render_feed, render_publication, render_publications_feed, render_talk,
    render_talks_feed, RenderedFeed,
};

pub use pubfeed_domain::{
    Entry, Feed, FeedKind, PublicationCategory, PublicationEntry, TalkCategory, TalkEntry,
};
