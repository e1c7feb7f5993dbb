//! feedsearch: search RSS and other feeds concurrently
//!
//! This is the main entry point for the command-line tool.

use anyhow::Result;
use clap::Parser;
use feedsearch::{
    config::{self, OutputFormat},
    display,
    feeds::JsonFeedSource,
    network::HttpClient,
    MatcherRegistry, Search,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "feedsearch")]
#[command(version)]
#[command(about = "Search RSS and other feeds concurrently")]
#[command(after_help = "ENVIRONMENT VARIABLES:
    FEEDSEARCH_SETTINGS_PATH    Path to settings.yml
    FEEDSEARCH_FEEDS_FILE       Path to the JSON feed list
    FEEDSEARCH_OUTPUT           Output format (text/json)
    FEEDSEARCH_LOG_LEVEL        Log filter when RUST_LOG is unset
    FEEDSEARCH_REQUEST_TIMEOUT  Per-request timeout in seconds")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the JSON feed list
    #[arg(short, long, value_name = "FILE")]
    feeds: Option<PathBuf>,

    /// Print one JSON object per result
    #[arg(long)]
    json: bool,

    /// Regular expression matched against feed items
    term: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings_path = config::locate(args.config);
    let mut settings = config::load(settings_path.as_deref())?;
    if let Some(feeds) = args.feeds {
        settings.feeds.data_file = feeds;
    }
    if args.json {
        settings.output.format = OutputFormat::Json;
    }

    // Initialize logging; stdout is reserved for results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.general.log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting feedsearch v{}", feedsearch::VERSION);
    match &settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let registry = MatcherRegistry::with_builtin(client)?;
    info!("Registered {} matchers", registry.len());

    let source = JsonFeedSource::new(&settings.feeds.data_file);
    let search = Search::new(Arc::new(source), Arc::new(registry));
    let sink = display::stdout_sink(settings.output.format);

    let report = search.run(&args.term, sink.as_ref()).await?;
    for failure in &report.failures {
        warn!("{}: {}", failure.feed, failure.error);
    }
    for stats in search.metrics().feed_type_summary() {
        info!(
            "Feed type {}: {} searched, {} failed, {:?} average",
            stats.feed_type, stats.searches, stats.failures, stats.avg_time
        );
    }

    Ok(())
}
