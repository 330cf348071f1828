//! Subcommand implementations

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pubfeed_bibtex::{format_document, format_entries, parse, talks_to_bibtex, tidy_entries};
use pubfeed_core::{
    convert_file, load_feed_file, render_feed, FeedKind, RenderConfig, TalkEntry,
};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Options of the `render` subcommand
pub struct RenderArgs {
    pub feed: Option<PathBuf>,
    pub kind: Option<FeedKind>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub wrap: bool,
}

pub fn convert(input: &Path, output: &Path) -> CommandResult {
    convert_file(input, output)?;
    Ok(())
}

pub fn render(args: RenderArgs) -> CommandResult {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let feed_path = match &args.feed {
        Some(path) => path.clone(),
        None => config.require_feed_source()?.to_path_buf(),
    };

    let script = load_feed_file(&feed_path)?;
    let kind = match args.kind.or_else(|| script.kind()) {
        Some(kind) => kind,
        None => {
            return Err(format!(
                "cannot tell the feed kind from handler '{}'; pass --kind publications or --kind talks",
                script.callback
            )
            .into())
        }
    };

    let feed = script.into_loaded(kind)?;
    let rendered = render_feed(&feed, &config);
    tracing::info!(
        "Rendered {} of {} {} entries",
        rendered.rendered,
        feed.len(),
        kind
    );

    let html = if args.wrap {
        rendered.to_element()
    } else {
        rendered.html
    };

    match &args.output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

pub fn bib(feed: &Path, output: &Path) -> CommandResult {
    let script = load_feed_file(feed)?;
    if script.kind() != Some(FeedKind::Talks) {
        tracing::warn!(
            "{} calls '{}', reading it as a talks feed anyway",
            feed.display(),
            script.callback
        );
    }

    let talks = script.into_feed::<TalkEntry>()?;
    let entries = talks_to_bibtex(&talks.entries);
    fs::write(output, format_entries(&entries))?;

    println!("Saved {}", output.display());
    Ok(())
}

pub fn tidy_bib(input: &Path, author: &str, output: &Path) -> CommandResult {
    let text = fs::read_to_string(input)?;
    let mut document = parse(&text);
    for error in &document.errors {
        tracing::warn!(
            "{}:{}: {}, copied as written",
            input.display(),
            error.line,
            error.message
        );
    }

    document.entries = tidy_entries(std::mem::take(&mut document.entries), author);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, format_document(&document))?;

    println!("Saved {}", output.display());
    Ok(())
}
