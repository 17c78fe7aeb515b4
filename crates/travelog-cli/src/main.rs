//! travelog — command-line interface for travelog-core
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing file, bad JSON, invalid rating, bad config)
//!   2 - `lint` found cities with more than one manual rating

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use travelog_cli::args::{CliArgs, Commands};
use travelog_cli::config::{Config, Settings, DEFAULT_CONFIG_FILE};
use travelog_core::prelude::*;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(args.verbose);
    debug!("Arguments: {:?}", args);

    let config_path = args.config.clone();
    let load_config = || -> Result<Config> {
        let config = Config::load(config_path.as_deref())?;
        debug!("Config: {:?}", config);
        Ok(config)
    };

    match args.command {
        Commands::Aggregate {
            ref input,
            ref city,
            ..
        } => {
            let settings = Settings::resolve(&args.command, &load_config()?);
            let mut summaries = load_summaries(input, settings.scale)?;
            if settings.newest_first {
                summaries = newest_first(summaries);
            }
            if let Some(q) = city.as_deref() {
                summaries.retain(|s| s.name_contains(q));
            }

            if settings.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if summaries.is_empty() {
                println!("No cities found.");
            } else {
                for s in &summaries {
                    print_summary(s);
                }
            }
        }

        Commands::Stats { ref input, .. } => {
            let settings = Settings::resolve(&args.command, &load_config()?);
            let summaries = load_summaries(input, settings.scale)?;
            let stats = VisitStats::from_summaries(&summaries);
            println!("Visited-city statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Rated: {}", stats.rated);
            println!("  Been there: {}", stats.been_there);
            match stats.mean_rating {
                Some(mean) => println!("  Mean rating: {mean:.1}"),
                None => println!("  Mean rating: -"),
            }
        }

        Commands::Country { ref query } => {
            let res = resolve_country(query);
            if res.resolved {
                println!(
                    "{query} -> {} ({})",
                    res.code,
                    country_name(&res.code).unwrap_or("unknown code")
                );
            } else {
                eprintln!("No country found for: {query} (falls back to {})", res.code);
            }
        }

        Commands::Lint { ref input } => {
            let records = load_records_from_path(input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let dups = CityAggregator::new().duplicate_notes(&records);
            if dups.is_empty() {
                println!("OK: at most one manual rating per city ({} records)", records.len());
            } else {
                for key in &dups {
                    warn!(key = %key, "more than one manual rating");
                    println!("duplicate manual rating: {key}");
                }
                std::process::exit(2);
            }
        }

        Commands::InitConfig => handle_init_config()?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_summaries(input: &Path, scale: RatingScale) -> Result<Vec<GroupedCitySummary>> {
    let raw = load_records_from_path(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let records = ingest_records(raw, scale)?;
    let summaries = aggregate_cities(&records);
    info!(
        records = records.len(),
        cities = summaries.len(),
        %scale,
        "aggregated"
    );
    Ok(summaries)
}

fn print_summary(s: &GroupedCitySummary) {
    let rating = s.display_rating().unwrap_or_else(|| "-".to_string());
    let visited = if s.has_been_there { " ✓" } else { "" };
    println!("{} ({}){visited}", s.name, s.country_code);
    println!("  Rating: {rating}  {}", s.source_text);
}

/// Handle `init-config`: write a default travelog.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        eprintln!("{DEFAULT_CONFIG_FILE} already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }
    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {DEFAULT_CONFIG_FILE}"))?;
    println!("Created {DEFAULT_CONFIG_FILE} with default settings.");
    Ok(())
}
