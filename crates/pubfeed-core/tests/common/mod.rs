//! Test fixture loading utilities

use std::path::PathBuf;

use regex::Regex;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Display indices in the order they appear in rendered HTML
#[allow(dead_code)]
pub fn display_indices(html: &str) -> Vec<usize> {
    let re = Regex::new(r"font-family:monospace;\x22>\[[A-Z]?(\d+)\]</span>").unwrap();
    re.captures_iter(html)
        .map(|c| c[1].parse().unwrap())
        .collect()
}
