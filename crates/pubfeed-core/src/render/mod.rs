//! HTML rendering of classified feeds
//!
//! Each entry becomes a `<dt>`/`<dd>` pair inside one `<dl>`; the
//! orchestration functions add the container, the section headings and the
//! shared display counter. Output is plain strings with inline styles so the
//! fragment can be dropped into any page.

mod publications;
mod talks;

pub use publications::{render_publication, render_publications_feed};
pub use talks::{render_talk, render_talks_feed};

use pubfeed_domain::{Entry, FeedKind};

use crate::config::RenderConfig;
use crate::feed_script::LoadedFeed;

const LIST_OPEN: &str = "<dl style=\"margin:0;\">\n";
const LIST_CLOSE: &str = "</dl>\n</div>\n";

const ENTRY_TERM_OPEN: &str =
    "<dt style=\"display:flex;align-items:flex-start;margin-bottom:0.25em;\">";
const INDEX_OPEN: &str =
    "<span style=\"display:inline-block;min-width:3.5em;text-align:right;font-family:monospace;\">[";
const TITLE_OPEN: &str = "<span class=\"list-identifier\" style=\"font-size:large;font-weight:bold;margin-left:0.5em;line-height:120%\">";
const DESCRIPTION_OPEN: &str = "<dd style=\"margin:0 0 1em 0; padding:0 0 0 4.2em;\">";
const META_OPEN: &str = "<div class=\"meta\" style=\"line-height:130%;\">\n";

/// Rendered list, ready to be placed into its container element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFeed {
    pub kind: FeedKind,
    pub html: String,
    /// Number of entries shown
    pub rendered: usize,
    /// Publications only: the cutoff hid some entries
    pub extra_entries: bool,
}

impl RenderedFeed {
    /// Id of the element this list belongs in
    pub fn target_id(&self) -> &'static str {
        self.kind.container_id()
    }

    /// The list wrapped in its target element
    pub fn to_element(&self) -> String {
        format!("<div id=\"{}\">\n{}</div>\n", self.target_id(), self.html)
    }
}

/// Render a single entry of either variant
pub fn render_entry(entry: &Entry, display_index: usize, config: &RenderConfig) -> String {
    match entry {
        Entry::Publication(publication) => {
            render_publication(publication, display_index, &config.publications)
        }
        Entry::Talk(talk) => render_talk(talk, display_index, &config.talks),
    }
}

/// Render a loaded feed with the options for its variant
pub fn render_feed(feed: &LoadedFeed, config: &RenderConfig) -> RenderedFeed {
    match feed {
        LoadedFeed::Publications(feed) => render_publications_feed(feed, &config.publications),
        LoadedFeed::Talks(feed) => render_talks_feed(feed, &config.talks),
    }
}

fn container_open(font_family: &str) -> String {
    format!(
        "<div id=\"arxivcontainer\" style=\"font-family:{};margin:.7em;font-size:90%\">\n",
        font_family
    )
}

fn section_heading(heading: &str, extra_style: &str) -> String {
    format!(
        "<div style=\"font-weight:bold; font-size:110%;{} margin-bottom:0.5em;\">{}:</div>\n",
        extra_style, heading
    )
}

/// `<dt>` opening up to and including the title span opening tag
fn entry_head(index_label: &str) -> String {
    let mut html = String::new();
    html.push_str(ENTRY_TERM_OPEN);
    html.push_str(INDEX_OPEN);
    html.push_str(index_label);
    html.push_str("]</span>");
    html.push_str(TITLE_OPEN);
    html
}
