//! CLI administration tool for car-insurance.
//!
//! Provides commands for inspecting cars and policies and for running the
//! expiry check by hand, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List all cars
//! cargo run --bin admin -- cars
//!
//! # List policies that ended before a date (default: today)
//! cargo run --bin admin -- expired --before 2025-01-01
//!
//! # Run one expiry check
//! cargo run --bin admin -- expiry tick
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`), plus
//! `EXPIRY_UTC_OFFSET_HOURS` for the expiry commands.

use car_insurance::application::services::ExpiryScheduler;
use car_insurance::config::Config;
use car_insurance::domain::repositories::{CarRepository, PolicyRepository};
use car_insurance::infrastructure::persistence::{PgCarRepository, PgPolicyRepository};
use car_insurance::server::connect_pool;
use car_insurance::utils::dates::parse_iso_date;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing car-insurance.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List all cars
    Cars,

    /// List policies that ended before a date
    Expired {
        /// Cutoff date, YYYY-MM-DD (default: today in the expiry offset)
        #[arg(short, long)]
        before: Option<String>,
    },

    /// Expiry check operations
    Expiry {
        #[command(subcommand)]
        action: ExpiryAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Expiry check subcommands.
#[derive(Subcommand)]
enum ExpiryAction {
    /// Run one expiry check and log newly expired policies
    Tick,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Cars => list_cars(&pool).await?,
        Commands::Expired { before } => list_expired(&pool, &config, before).await?,
        Commands::Expiry { action } => handle_expiry_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Lists all cars with their owners.
///
/// # Output Format
///
/// ```text
/// 🚗 Cars
///
///   ID  VIN          Make / Model              Year  Owner
///   ───────────────────────────────────────────────────────────────────
///   1   VIN12345     Dacia Logan               2018  Ana Pop
/// ```
async fn list_cars(pool: &PgPool) -> Result<()> {
    println!("{}", "🚗 Cars".bright_blue().bold());
    println!();

    let repo = PgCarRepository::new(Arc::new(pool.clone()));
    let cars = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list cars: {}", e))?;

    if cars.is_empty() {
        println!("{}", "  No cars found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<12} {:<25} {:<5} {}",
        "ID".bright_white().bold(),
        "VIN".bright_white().bold(),
        "Make / Model".bright_white().bold(),
        "Year".bright_white().bold(),
        "Owner".bright_white().bold()
    );
    println!("  {}", "─".repeat(67).bright_black());

    for car in &cars {
        let owner = car
            .owner
            .as_ref()
            .map(|o| o.name.as_str())
            .unwrap_or("-");

        println!(
            "  {:<3} {:<12} {:<25} {:<5} {}",
            car.id.to_string().bright_black(),
            car.vin.cyan(),
            format!("{} {}", car.make, car.model),
            car.year_of_manufacture,
            owner
        );
    }

    println!();
    println!("  Total: {}", cars.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Lists policies whose end date is strictly before the cutoff.
async fn list_expired(pool: &PgPool, config: &Config, before: Option<String>) -> Result<()> {
    let cutoff = match before {
        Some(raw) => parse_iso_date(&raw)?,
        None => today(config)?,
    };

    println!(
        "{} {}",
        "⌛ Policies expired before".bright_blue().bold(),
        cutoff.to_string().bright_white().bold()
    );
    println!();

    let repo = PgPolicyRepository::new(Arc::new(pool.clone()));
    let policies = repo
        .find_expired_before(cutoff)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to query policies: {}", e))?;

    if policies.is_empty() {
        println!("{}", "  No expired policies".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<6} {:<25} {:<12} {:<12}",
        "ID".bright_white().bold(),
        "Car".bright_white().bold(),
        "Provider".bright_white().bold(),
        "Start".bright_white().bold(),
        "End".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for policy in &policies {
        let end = policy
            .end_date
            .map(|d| d.to_string())
            .unwrap_or_default();

        println!(
            "  {:<5} {:<6} {:<25} {:<12} {}",
            policy.id.to_string().bright_black(),
            policy.car_id,
            policy.provider.cyan(),
            policy.start_date,
            end.red()
        );
    }

    println!();
    println!(
        "  Total: {}",
        policies.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches expiry check commands.
async fn handle_expiry_action(action: ExpiryAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        ExpiryAction::Tick => {
            println!("{}", "⏱️  Running expiry check...".bright_blue());

            let repo = Arc::new(PgPolicyRepository::new(Arc::new(pool.clone())));
            let scheduler = ExpiryScheduler::new(repo, config.expiry_offset()?);

            let count = scheduler
                .tick()
                .await
                .map_err(|e| anyhow::anyhow!("Expiry check failed: {}", e))?;

            println!(
                "{} {}",
                "✅ Newly expired policies logged:".green().bold(),
                count.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let cars: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
                .fetch_one(pool)
                .await?;
            let policies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM insurance_policies")
                .fetch_one(pool)
                .await?;
            let claims: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Cars:       {}", cars.to_string().bright_green().bold());
            println!("  Policies:   {}", policies.to_string().bright_green().bold());
            println!("  Claims:     {}", claims.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Today's calendar date in the configured expiry offset.
fn today(config: &Config) -> Result<NaiveDate> {
    let offset = config
        .expiry_offset()
        .context("Invalid EXPIRY_UTC_OFFSET_HOURS")?;
    Ok(Utc::now().with_timezone(&offset).date_naive())
}
