// ABOUTME: CLI for reformatting a saved-tabs HTML export into a three-column page.
// ABOUTME: Reads the export, runs the reformat pipeline and writes the result next to it.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tabsheet_reformat::options::{DEFAULT_COLUMNS, DEFAULT_LINK_TARGET};
use tabsheet_reformat::{reformat_html, Options};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Reformat a saved-tabs HTML export into columns with a collapsible metadata block.
#[derive(Parser, Debug)]
#[command(name = "tabsheet")]
#[command(about = "Reformat a saved-tabs HTML export into a three-column page", long_about = None)]
struct Args {
    /// HTML export to read.
    #[arg(default_value = "toFormat.html")]
    input: PathBuf,

    /// Where to write the reformatted page.
    #[arg(short = 'o', long = "output", default_value = "reformatted.html")]
    output: PathBuf,

    /// Number of columns to split the entries into.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Value for the target attribute of every entry link.
    #[arg(long, default_value = DEFAULT_LINK_TARGET)]
    target: String,

    /// Drop entries whose link host contains DOMAIN. May be repeated.
    #[arg(long = "block", value_name = "DOMAIN")]
    block: Vec<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let opts = args
        .block
        .iter()
        .fold(Options::builder(), |b, domain| b.block_domain(domain))
        .columns(args.columns)
        .link_target(&args.target)
        .build()?;

    let start = Instant::now();
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    debug!(path = %args.input.display(), bytes = html.len(), "read input");

    // Nothing is written unless the whole transform succeeds
    let reformatted = reformat_html(&html, &opts)
        .with_context(|| format!("reformatting {}", args.input.display()))?;

    fs::write(&args.output, &reformatted)
        .with_context(|| format!("writing {}", args.output.display()))?;
    debug!(path = %args.output.display(), bytes = reformatted.len(), "wrote output");

    println!(
        "HTML has been reformatted and saved as '{}'",
        args.output.display()
    );

    if args.timing {
        eprintln!("elapsed: {}ms", start.elapsed().as_millis());
    }

    Ok(())
}
