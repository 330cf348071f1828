//! Talk list rendering

use pubfeed_domain::{Feed, FeedKind, TalkEntry};

use super::{
    container_open, entry_head, section_heading, RenderedFeed, DESCRIPTION_OPEN, LIST_CLOSE,
    LIST_OPEN, META_OPEN,
};
use crate::classify::classify_talks;
use crate::config::TalkConfig;
use crate::html::html_fix;
use crate::numbering::DisplayCounter;

/// Contribution titles are always shown in this green
const CONTRIBUTION_COLOR: &str = "#6A994E";

/// Render the whole talks feed: categories in declared order, one counter
pub fn render_talks_feed(feed: &Feed<TalkEntry>, config: &TalkConfig) -> RenderedFeed {
    let talks = classify_talks(feed);
    let total = talks.total();
    let mut counter = DisplayCounter::new(total);

    let mut html = container_open(&config.font_family);
    html.push_str(LIST_OPEN);

    for section in talks.sections.iter().filter(|s| !s.is_empty()) {
        html.push_str(&section_heading(section.category.heading(), ""));
        for entry in &section.entries {
            html.push_str(&render_talk(entry, counter.next_index(), config));
        }
    }

    html.push_str(LIST_CLOSE);
    tracing::debug!("Rendered {} talks", total);

    RenderedFeed {
        kind: FeedKind::Talks,
        html,
        rendered: total,
        extra_entries: false,
    }
}

/// Render one talk as a `<dt>`/`<dd>` pair labelled `[C<index>]`
pub fn render_talk(entry: &TalkEntry, display_index: usize, config: &TalkConfig) -> String {
    let mut html = entry_head(&format!("C{}", display_index));

    let title = html_fix(&entry.title);
    match entry.talk_url.as_deref() {
        Some(url) => html.push_str(&format!(
            "<a href=\"{}\" title=\"Event page\" style=\"text-decoration:none;color:inherit;\" target=\"_blank\">{}</a>",
            url, title
        )),
        None => html.push_str(&title),
    }
    html.push_str("</span></dt>\n");

    html.push_str(DESCRIPTION_OPEN);
    html.push_str(META_OPEN);

    // Details line
    let details: Vec<_> = entry.details().into_iter().map(html_fix).collect();
    if !details.is_empty() {
        html.push_str("<div class=\"list-journal-ref\" style=\"font-weight:normal;font-size:100%;text-decoration:none;\">");
        html.push_str(&details.join(" — "));
        html.push_str("</div>\n");
    }

    if config.include_description {
        if let Some(description) = entry.description.as_deref() {
            html.push_str("<div class=\"list-description\" style=\"font-weight:normal;font-size:100%;margin-top:0.2em;\">");
            html.push_str(&html_fix(description));
            html.push_str("</div>\n");
        }
    }

    html.push_str(&render_attachments(entry, config));

    html.push_str("</div>\n</dd>\n");
    html
}

/// Contribution title, slides and references, first matching layout wins
fn render_attachments(entry: &TalkEntry, config: &TalkConfig) -> String {
    let pdf = entry
        .pdf_url
        .as_deref()
        .map(|url| pdf_link(url, &config.pdf_color));
    let references = entry
        .references
        .as_deref()
        .map(|path| references_link(path, &config.reference_color));

    let mut html = String::new();
    if let Some(cont_title) = entry.cont_title.as_deref() {
        html.push_str(&format!(
            "<div class=\"list-authors\" style=\"font-weight:normal;font-size:100%;color:{};text-decoration:none;\">",
            CONTRIBUTION_COLOR
        ));
        html.push_str("<span style=\"font-style:normal;font-weight:bold;\">Title:</span> <span style=\"font-style:italic;\">");
        html.push_str(&html_fix(cont_title));
        html.push_str("</span>");
        for link in [pdf, references].into_iter().flatten() {
            html.push(' ');
            html.push_str(&link);
        }
        html.push_str("</div>\n");
    } else if let Some(pdf) = pdf {
        html.push_str("<div class=\"list-pdf\" style=\"font-weight:normal;font-size:100%;margin-top:0.2em;\">");
        html.push_str(&pdf);
        if let Some(references) = references {
            html.push(' ');
            html.push_str(&references);
        }
        html.push_str("</div>\n");
    } else if let Some(references) = references {
        html.push_str("<div class=\"list-references\" style=\"font-weight:normal;font-size:100%;margin-top:0.2em;\">");
        html.push_str(&references);
        html.push_str("</div>\n");
    }
    html
}

fn pdf_link(url: &str, color: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" style=\"color:{};text-decoration:none;\">[PDF]</a>",
        url, color
    )
}

fn references_link(path: &str, color: &str) -> String {
    format!(
        "<a href=\"/{}\" style=\"color:{};text-decoration:none;\">[references]</a>",
        path, color
    )
}
