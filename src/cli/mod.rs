//! Command-line interface for book-source-merge
//!
//! With no arguments the built-in source table is merged from the default
//! directories.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::pipeline::run_pipeline;
use crate::progress::ConsoleProgress;

/// Merge and deduplicate Legado book source collections
#[derive(Parser, Debug)]
#[command(name = "book-source-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (book-sources.toml or book-sources.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing the input collections
    #[arg(short = 's', long, value_name = "DIR", env = "BOOK_SOURCES_DIR")]
    pub sources_dir: Option<PathBuf>,

    /// Directory for output files
    #[arg(short = 'o', long, value_name = "DIR", env = "BOOK_SOURCES_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Description stored in the summary report
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Skip writing one file per input collection
    #[arg(long)]
    pub no_individual: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments, run the pipeline, and return the unique record count.
pub fn run() -> Result<usize> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            sources_dir: cli.sources_dir,
            output_dir: cli.output_dir,
            description: cli.description,
            no_individual: cli.no_individual,
        },
    );
    tracing::debug!(?config, "resolved configuration");

    run_pipeline(&config, &mut ConsoleProgress)
}

/// A valid RUST_LOG replaces the default; otherwise WARN, or DEBUG with --verbose.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str().to_ascii_lowercase()))
}
