mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use datasources::{WeatherApiClient, WeatherProvider};
use error::{PlantcastError, Result};
use logic::{season, soil, ForecastRanker, PlantingScoreEngine, WeatherGateway};
use models::{PlantingAdvisory, WeatherSnapshot};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Tips shown on the advisory; the full list stays available to library
/// consumers.
const MAX_DISPLAYED_TIPS: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags set the floor, RUST_LOG overrides
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if matches!(cli.command, Commands::Init) {
        let (_, path) = Config::setup_interactive()?;
        println!("Setup complete. Config written to {}", path.display());
        println!("Run `plantcast advise` to get your first advisory.");
        return Ok(());
    }

    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Advise { location } => advise(&config, location).await,
        Commands::Forecast { location, days } => forecast(&config, location, days).await,
        Commands::Check => check(&config).await,
        Commands::Init => Ok(()), // handled before config load
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn advise(config: &Config, location: Option<String>) -> Result<()> {
    let location = location.unwrap_or_else(|| config.garden.default_location.clone());
    let provider = Arc::new(WeatherApiClient::new(config.weatherapi.clone()));
    let gateway = WeatherGateway::new(provider, config.cache.ttl_minutes);

    let snapshot = match gateway.get(&location).await {
        Ok(snapshot) => snapshot,
        // A typo in the location should be corrected, not papered over.
        Err(PlantcastError::NotFound(loc)) => return Err(PlantcastError::NotFound(loc)),
        Err(e) => {
            tracing::warn!(error = %e, "upstream unavailable, falling back to typical conditions");
            WeatherSnapshot::synthetic_default(&location, chrono::Utc::now())
        }
    };

    let advisory = PlantingScoreEngine::new().score(&snapshot);
    print_advisory(&snapshot, &advisory);
    Ok(())
}

fn print_advisory(snapshot: &WeatherSnapshot, advisory: &PlantingAdvisory) {
    println!();
    println!("Planting conditions for {}", snapshot.location);
    if snapshot.synthetic {
        println!("(live weather unavailable - showing typical conditions, not a reading)");
    }
    println!();

    println!("Score: {}/100", advisory.score);
    println!("{}", advisory.advice);
    println!();

    for assessment in &advisory.assessments {
        println!(
            "  {:<13} {:<10} {:<9} {}",
            assessment.factor, assessment.value, assessment.status, assessment.feedback
        );
    }
    println!();

    if !advisory.tips.is_empty() {
        println!("Tips:");
        for tip in advisory.tips.iter().take(MAX_DISPLAYED_TIPS) {
            println!("  - {}", tip);
        }
        println!();
    }

    println!("Best time to plant: {}", advisory.window);

    let now = chrono::Local::now().naive_local();
    let soil_temp = soil::estimate(snapshot.temperature_c, now);
    println!("Estimated soil temperature: {:.0}°C (estimate, not a reading)", soil_temp);
    println!();

    let season = season::season_of(now.date());
    println!("{} notes:", season);
    for tip in season::seasonal_tips(season) {
        println!("  - {}", tip);
    }
    println!(
        "Good picks right now: {}",
        season::recommended_plants(season).join(", ")
    );
    println!();
}

async fn forecast(config: &Config, location: Option<String>, days: u8) -> Result<()> {
    let location = location.unwrap_or_else(|| config.garden.default_location.clone());
    let provider = Arc::new(WeatherApiClient::new(config.weatherapi.clone()));
    let gateway = WeatherGateway::new(provider, config.cache.ttl_minutes);

    let mut days = gateway.forecast(&location, days).await?;
    ForecastRanker::rank(&mut days);

    println!();
    println!("Planting outlook for {}", location);
    println!();
    for day in &days {
        println!(
            "  {}  {:>2}-{:<2}°C  {:<20} {}/8  {}",
            day.date,
            day.low_temp_c.round(),
            day.high_temp_c.round(),
            day.description,
            day.planting_score,
            day.recommendation
        );
    }
    println!();
    Ok(())
}

async fn check(config: &Config) -> Result<()> {
    println!("Config: OK ({})", config.garden.default_location);

    let client = WeatherApiClient::new(config.weatherapi.clone());
    match client.test_connection().await {
        Ok(()) => {
            println!("WeatherAPI: OK");
            Ok(())
        }
        Err(e) => {
            println!("WeatherAPI: FAILED ({})", e);
            Err(e)
        }
    }
}
