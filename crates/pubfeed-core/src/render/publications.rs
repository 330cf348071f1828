//! Publication list rendering

use pubfeed_domain::{Feed, FeedKind, PublicationCategory, PublicationEntry};
use pubfeed_identifiers::{arxiv_id_from_url, author_search_url, doi_url, leading_year};

use super::{
    container_open, entry_head, section_heading, RenderedFeed, DESCRIPTION_OPEN, LIST_CLOSE,
    LIST_OPEN, META_OPEN,
};
use crate::classify::select_publications;
use crate::config::PublicationConfig;
use crate::html::html_fix;
use crate::numbering::DisplayCounter;

/// Render the publications feed: preprints, separator, journals.
///
/// Both headings and the separator are always present, even when a
/// section is empty.
pub fn render_publications_feed(
    feed: &Feed<PublicationEntry>,
    config: &PublicationConfig,
) -> RenderedFeed {
    let pubs = select_publications(feed, config.max_entries);
    let mut counter = DisplayCounter::new(pubs.selected);

    let mut html = container_open(&config.font_family);
    html.push_str(LIST_OPEN);

    for section in pubs.in_display_order() {
        match section.category {
            PublicationCategory::Preprints => {
                html.push_str(&section_heading(section.category.heading(), ""));
            }
            PublicationCategory::Journals => {
                html.push_str(&format!(
                    "<hr style=\"border:0; border-top:2px solid {}; margin:1em 0;\">\n",
                    config.separator_color
                ));
                html.push_str(&section_heading(
                    section.category.heading(),
                    " margin-top:1em;",
                ));
            }
        }
        for entry in &section.entries {
            html.push_str(&render_publication(entry, counter.next_index(), config));
        }
    }

    html.push_str(LIST_CLOSE);
    tracing::debug!(
        "Rendered {} publications ({} preprints, {} journal articles)",
        pubs.selected,
        pubs.preprints.len(),
        pubs.journals.len()
    );

    RenderedFeed {
        kind: FeedKind::Publications,
        html,
        rendered: pubs.selected,
        extra_entries: pubs.extra_entries,
    }
}

/// Render one publication as a `<dt>`/`<dd>` pair labelled `[<prefix><index>]`
pub fn render_publication(
    entry: &PublicationEntry,
    display_index: usize,
    config: &PublicationConfig,
) -> String {
    let mut html = entry_head(&format!("{}{}", config.list_prefix, display_index));

    let title = html_fix(&entry.title);
    match entry.title_doi() {
        Some(doi) => html.push_str(&format!(
            "<a href=\"{}\" title=\"Journal\" style=\"text-decoration:none;color:inherit;\">{}</a>",
            doi_url(doi),
            title
        )),
        None => html.push_str(&format!(
            "<a href=\"{}\" title=\"Preprint\" style=\"text-decoration:none;color:inherit;\">{}</a>",
            entry.id, title
        )),
    }
    html.push_str("</span>\n</dt>\n");

    html.push_str(DESCRIPTION_OPEN);
    html.push('\n');
    html.push_str(META_OPEN);

    html.push_str("<div class=\"list-authors\" style=\"font-weight:normal;font-size:100%;text-decoration:none;\">");
    html.push_str(&render_authors(&entry.authors, config.bold_name()));
    html.push_str("</div>\n");

    if config.include_journal_ref {
        if let Some(journal_ref) = entry.journal_reference() {
            html.push_str(&render_journal_ref(journal_ref, entry.doi(), &config.journal_color));
        }
    }

    if let Some(arxiv_id) = arxiv_id_from_url(&entry.id) {
        let year = entry
            .updated
            .as_deref()
            .and_then(leading_year)
            .map(|year| format!(" ({})", year))
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"list-arxiv-id\" style=\"font-weight:normal;font-size:100%;\"><a href=\"{}\" title=\"Preprint\" style=\"text-decoration:none;color:{};\">arXiv:{}{}</a></div>\n",
            entry.id, config.arxiv_color, arxiv_id, year
        ));
    }

    if config.include_summary {
        html.push_str("<p>");
        html.push_str(&html_fix(entry.summary.as_deref().unwrap_or_default()));
        html.push_str("</p>\n");
    }

    html.push_str("</div>\n</dd>");
    html
}

/// Comma-separated author list; each name links to its arXiv search,
/// except the emphasized one
fn render_authors(authors: &str, bold_name: Option<&str>) -> String {
    authors
        .split(',')
        .map(str::trim)
        .map(|name| {
            if bold_name == Some(name) {
                format!("<b>{}</b>", html_fix(name))
            } else if !name.is_empty() {
                format!(
                    "<a href=\"{}\" target=\"_blank\" title=\"Author's arXiv\" style=\"text-decoration:none;color:inherit;font-weight:normal;\">{}</a>",
                    author_search_url(name),
                    html_fix(name)
                )
            } else {
                String::new()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_journal_ref(journal_ref: &str, doi: Option<&str>, color: &str) -> String {
    let mut html = format!(
        "<div class=\"list-journal-ref\" style=\"font-weight:normal;font-size:100%;color:{};text-decoration:none;\">",
        color
    );
    let journal_ref = html_fix(journal_ref);
    match doi {
        Some(doi) => html.push_str(&format!(
            "<a href=\"{}\" title=\"Journal\" style=\"color:{};text-decoration:none;\">{}</a>",
            doi_url(doi),
            color,
            journal_ref
        )),
        None => html.push_str(&journal_ref),
    }
    html.push_str("</div>\n");
    html
}
