//! sitegrep command-line entry point
//!
//! A thin adapter: parse arguments, load configuration, run one crawl, and
//! print the result.

use anyhow::Context;
use clap::Parser;
use sitegrep::config::{load_config, Config};
use sitegrep::crawler::crawl;
use sitegrep::output::{print_report, write_markdown_summary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitegrep: find where a text fragment lives on a website
///
/// Crawls breadth-first from START_URL, following only links that stay on
/// the site's origin, and reports every page whose body contains TEXT.
#[derive(Parser, Debug)]
#[command(name = "sitegrep")]
#[command(version)]
#[command(about = "Search a website's internal pages for a text fragment", long_about = None)]
struct Cli {
    /// Text fragment to search for (literal, case-sensitive)
    #[arg(value_name = "TEXT")]
    text: String,

    /// Absolute URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum number of pages to fetch (overrides the config file)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write a markdown summary of the crawl to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    validate_start_url(&cli.start_url)?;

    let limit = cli.limit.unwrap_or(config.crawler.page_limit);

    let result = crawl(&cli.text, &cli.start_url, limit, &config).await?;

    print_report(&result, &cli.text);

    if let Some(path) = &cli.summary {
        write_markdown_summary(&result, &cli.text, path)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrep=info,warn"),
            1 => EnvFilter::new("sitegrep=debug,info"),
            2 => EnvFilter::new("sitegrep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Rejects a start URL before any crawl work begins
///
/// The crawl engine re-checks that the URL has an origin; this boundary
/// check exists to give the user a clear message for the common mistakes
/// (missing scheme, non-HTTP scheme, no host).
fn validate_start_url(raw: &str) -> anyhow::Result<()> {
    let parsed =
        url::Url::parse(raw).with_context(|| format!("invalid start URL '{}'", raw))?;

    anyhow::ensure!(
        parsed.scheme() == "http" || parsed.scheme() == "https",
        "start URL '{}' must use http or https",
        raw
    );
    anyhow::ensure!(parsed.host_str().is_some(), "start URL '{}' must include a host", raw);

    Ok(())
}
