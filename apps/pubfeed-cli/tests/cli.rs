use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("crates")
        .join("pubfeed-core")
        .join("test_fixtures")
        .join(name)
}

#[test]
fn convert_requires_both_paths() {
    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("convert").arg("only-input.tsv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn convert_writes_feed_script() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("talks.js");

    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("convert").arg(fixture_path("talks.tsv")).arg(&output);
    cmd.assert().success();

    let script = std::fs::read_to_string(&output).unwrap();
    assert!(script.starts_with("talksFeed({\n  \"entries\": [\n"));
    assert!(script.contains("\"title\": \"Exploring the Cosmos\""));
    assert!(script.ends_with("});"));
}

#[test]
fn render_talks_to_stdout() {
    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("render").arg(fixture_path("table.js"));

    let output_pred = predicate::str::starts_with("<div id=\"arxivcontainer\"")
        .and(predicate::str::contains("Invited Talks:"))
        .and(predicate::str::contains("[C5]"))
        .and(predicate::str::contains("[C6]").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_publications_wrapped_with_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("render.json");
    std::fs::write(
        &config,
        format!(
            r#"{{ "feed_source": {:?}, "publications": {{ "max_entries": 2 }} }}"#,
            fixture_path("jsonarXiv.js").to_string_lossy()
        ),
    )
    .unwrap();
    let output = dir.path().join("pubs.html");

    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("render")
        .arg("--config")
        .arg(&config)
        .arg("--wrap")
        .arg("--output")
        .arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<div id=\"arxivfeed\">\n<div id=\"arxivcontainer\""));
    assert!(html.contains(">[2]</span>"));
    assert!(!html.contains(">[3]</span>"));
}

#[test]
fn render_without_feed_source_fails() {
    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("render");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no feed source"));
}

#[test]
fn render_rejects_unknown_kind() {
    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("render")
        .arg(fixture_path("table.js"))
        .arg("--kind")
        .arg("posters");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown feed kind"));
}

#[test]
fn bib_exports_talks() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("table.bib");

    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("bib").arg(fixture_path("table.js")).arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let bib = std::fs::read_to_string(&output).unwrap();
    assert_eq!(bib.matches("@unpublished{").count(), 6);
    assert!(bib.contains("@unpublished{xy7k2p,\n"));
    assert!(bib.contains("    month = 03,\n    year = 2022,\n"));
}

#[test]
fn tidy_bib_creates_output_directory() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export.bib");
    std::fs::write(
        &input,
        "@misc{p,\n  author = {Smith, Alice and Jones, Bob},\n  url = {https://x},\n  note = {arXiv:2406.00001 [astro-ph]}\n}\n",
    )
    .unwrap();
    let output = dir.path().join("database").join("pubs.bib");

    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("tidy-bib").arg(&input).arg("Smith, Alice").arg(&output);
    cmd.assert().success();

    let bib = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        bib,
        "@misc{p,\n    author = {Smith, Alice and Jones, Bob},\n    note = {arXiv:2406.00001},\n    author+an = {1=highlight},\n    keywords = {preprint},\n}\n"
    );
}

#[test]
fn tidy_bib_keeps_preamble_and_unparsed_entries() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export.bib");
    std::fs::write(
        &input,
        concat!(
            "@preamble{\"\\newcommand{\\FT}{FT}\"}\n\n",
            "@article{a,\n  author = {Smith, Alice},\n  title = {T}\n}\n\n",
            "@book{broken, title = {unclosed\n\n",
            "@misc{m,\n  author = {Jones, Bob and Smith, Alice},\n  note = {arXiv:2401.00002}\n}\n",
        ),
    )
    .unwrap();
    let output = dir.path().join("pubs.bib");

    let mut cmd = cargo_bin_cmd!("pubfeed");
    cmd.arg("tidy-bib").arg(&input).arg("Smith, Alice").arg(&output);
    cmd.assert().success();

    let bib = std::fs::read_to_string(&output).unwrap();
    assert!(bib.starts_with("@preamble{\"\\newcommand{\\FT}{FT}\"}\n\n@article{a,\n"));
    assert!(bib.contains("    author+an = {1=highlight},\n    keywords = {journal},\n}\n\n@book{broken, title = {unclosed\n\n@misc{m,\n"));
    assert!(bib.contains("    author+an = {2=highlight},\n    keywords = {preprint},\n}\n"));
}
