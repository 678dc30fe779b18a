//! Policy-Scout main entry point
//!
//! This is the command-line interface for the Policy-Scout surveyor.

use clap::Parser;
use policy_scout::config::{load_config_with_hash, validate, Config};
use policy_scout::output::print_report;
use policy_scout::scrape::run;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Policy-Scout: a single-site privacy policy surveyor
///
/// Policy-Scout records the external resources and hyperlinks of a site's
/// homepage, follows its "Privacy Policy" link and counts the words visible
/// on that page.
#[derive(Parser, Debug)]
#[command(name = "policy-scout")]
#[command(version)]
#[command(about = "A single-site privacy policy surveyor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Homepage to scrape
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Exact text of the link to follow
    #[arg(long, value_name = "TEXT")]
    search_text: Option<String>,

    /// Last visible string of the followed page
    #[arg(long, value_name = "TEXT")]
    terminator: Option<String>,

    /// Directory for resources.json, links.json and frequency.json
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.scrape.page_url = url.clone();
        }
        if let Some(text) = &self.search_text {
            config.scrape.search_text = text.clone();
        }
        if let Some(terminator) = &self.terminator {
            config.scrape.terminator = terminator.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    cli.apply_overrides(&mut config);
    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("policy_scout=info,warn"),
            1 => EnvFilter::new("policy_scout=debug,info"),
            2 => EnvFilter::new("policy_scout=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Policy-Scout Dry Run ===\n");

    println!("Scrape:");
    println!("  Homepage: {}", config.scrape.page_url);
    println!("  Link text: {}", config.scrape.search_text);
    println!("  Terminator: {}", config.scrape.terminator);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  Max redirects: {}", config.fetch.max_redirects);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nOutput directory: {}", config.output.directory);
    for name in [
        &config.output.resources_name,
        &config.output.links_name,
        &config.output.frequency_name,
    ] {
        println!("  - {}.json", name);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Scraping {} (link: '{}', terminator: '{}')",
        config.scrape.page_url,
        config.scrape.search_text,
        config.scrape.terminator
    );

    match run(config).await {
        Ok(report) => {
            tracing::info!("Scrape completed successfully");
            if !quiet {
                print_report(&report);
            }
            println!("DONE");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
