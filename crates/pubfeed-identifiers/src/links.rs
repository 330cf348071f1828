//! Outbound links for rendered entries

/// DOI resolver used for published entries
pub const DOI_RESOLVER: &str = "https://dx.doi.org/";

/// arXiv author search endpoint
pub const ARXIV_AUTHOR_SEARCH: &str = "https://arxiv.org/search/?query=";

/// Resolver link for a DOI
pub fn doi_url(doi: &str) -> String {
    format!("{}{}", DOI_RESOLVER, doi)
}

/// arXiv search link listing an author's papers
pub fn author_search_url(name: &str) -> String {
    format!(
        "{}{}&searchtype=author",
        ARXIV_AUTHOR_SEARCH,
        encode_uri_component(name)
    )
}

/// Percent-encode a query component the way browsers' `encodeURIComponent` does.
///
/// `urlencoding` escapes everything outside `A-Z a-z 0-9 - _ . ~`; browsers
/// additionally leave `! ' ( ) *` alone, so those escapes are undone to keep
/// links identical to the ones the page scripts produced.
pub fn encode_uri_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
