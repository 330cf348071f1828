//! pubfeed - publication and talk lists for static sites
//!
//! Renders feed scripts to HTML, converts TSV tables into feed scripts and
//! exports or tidies BibTeX.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pubfeed_core::FeedKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pubfeed")]
#[command(about = "Render publication and talk feeds, convert TSV tables, export BibTeX")]
struct Cli {
    /// Verbose logging on stderr (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a TSV table into a feed script calling `<output stem>Feed`
    Convert {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Render a feed script to an HTML fragment
    Render {
        /// Feed script; defaults to `feed_source` from the configuration
        #[arg(value_name = "FEED")]
        feed: Option<PathBuf>,

        /// Feed variant; detected from the handler name when omitted
        #[arg(long)]
        kind: Option<FeedKind>,

        /// Render configuration (TOML, or JSON with a .json extension)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the fragment to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap the list in its container element
        #[arg(long)]
        wrap: bool,
    },

    /// Export a talks feed as BibTeX
    Bib {
        #[arg(value_name = "FEED")]
        feed: PathBuf,
        #[arg(value_name = "OUTPUT", default_value = "table.bib")]
        output: PathBuf,
    },

    /// Tidy a BibTeX export and highlight one author
    TidyBib {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Author to highlight, as written in the author lists
        #[arg(value_name = "AUTHOR")]
        author: String,
        #[arg(value_name = "OUTPUT", default_value = "database/pubs.bib")]
        output: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Convert { input, output } => commands::convert(&input, &output),
        Command::Render {
            feed,
            kind,
            config,
            output,
            wrap,
        } => commands::render(commands::RenderArgs {
            feed,
            kind,
            config,
            output,
            wrap,
        }),
        Command::Bib { feed, output } => commands::bib(&feed, &output),
        Command::TidyBib {
            input,
            author,
            output,
        } => commands::tidy_bib(&input, &author, &output),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
