//! Simple Crawler main entry point
//!
//! This is the command-line interface for the breadth-first crawler.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use simple_crawler::config::{load_config_with_hash, CrawlConfig};
use simple_crawler::crawler::crawl;
use simple_crawler::output::print_statistics;
use simple_crawler::url::Origin;
use simple_crawler::ConfigError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Simple Crawler: a polite breadth-first web crawler
///
/// Starts from a seed URL and follows links matching a regular expression,
/// respecting robots.txt and a fixed delay between requests. Pages are saved
/// as raw HTML and/or visible text.
#[derive(Parser, Debug)]
#[command(name = "simple-crawler")]
#[command(version)]
#[command(about = "A polite breadth-first web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        Err(e) => {
            match &e {
                ConfigError::UnparsableSeed(_) => tracing::error!("{}", e),
                _ => tracing::error!("Failed to load {}: {}", cli.config.display(), e),
            }
            return ExitCode::from(exit_status_for(&e));
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return ExitCode::SUCCESS;
    }

    match handle_crawl(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Crawl failed: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Process exit status for a configuration error
///
/// An unparsable seed ends the run early but is not treated as a failure.
fn exit_status_for(error: &ConfigError) -> u8 {
    match error {
        ConfigError::UnparsableSeed(_) => 0,
        _ => 1,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("simple_crawler=info,warn"),
            1 => EnvFilter::new("simple_crawler=debug,info"),
            2 => EnvFilter::new("simple_crawler=trace,debug"),
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

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &CrawlConfig) {
    println!("=== Simple Crawler Dry Run ===\n");

    println!("Seed:");
    println!("  URL: {}", config.seed_url);
    if let Ok(origin) = Origin::from_seed(&config.seed_url) {
        println!("  Robots.txt: {}", origin.robots_url());
    }

    println!("\nCrawler:");
    println!("  Scope pattern: {}", config.url_regex);
    println!("  Delay between requests: {}ms", config.sleep_time);
    println!("  Request timeout: {}s", config.request_timeout);
    println!("  User agent: {}", config.user_agent);
    println!(
        "  Robots matching: {}",
        if config.robots_prefix_match {
            "prefix"
        } else {
            "exact"
        }
    );

    println!("\nOutput:");
    if config.save_html {
        println!("  Raw HTML -> {}/", config.html_dir);
    }
    if config.save_text {
        println!("  Visible text -> {}/", config.text_dir);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: CrawlConfig) -> anyhow::Result<()> {
    let seed = config.seed_url.clone();
    let stats = crawl(config)
        .await
        .with_context(|| format!("crawl from {} aborted", seed))?;

    print_statistics(&stats);
    Ok(())
}
