//! CLI administration tool for trade-in-pricing.
//!
//! Loads the historical sales feed, runs price lookups against the live
//! database, and performs database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Load a sales CSV feed
//! cargo run --bin admin -- import sales.csv
//!
//! # Estimate an offer
//! cargo run --bin admin -- price 1HGCM82633A004352 2003
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Generate a SESSION_SIGNING_SECRET
//! cargo run --bin admin -- secret
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use trade_in_pricing::application::services::{
    ImportService, PricingOutcome, PricingQuery, PricingService,
};
use trade_in_pricing::application::services::import_service::parse_sales_csv;
use trade_in_pricing::config::{Config, mask_connection_string};
use trade_in_pricing::domain::repositories::{SaleRecordRepository, SettingsRepository};
use trade_in_pricing::infrastructure::persistence::{PgSaleRecordRepository, PgSettingsRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing trade-in-pricing.
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
    /// Import historical sales from a CSV feed
    Import {
        /// Path to the CSV file (`vin,year,make,model,sale_price`)
        path: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Estimate an offer for a VIN and model year
    Price {
        vin: String,
        year: i32,

        /// Make to fall back on when the VIN manufacturer is unknown
        #[arg(short, long)]
        make: Option<String>,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Print a random value for SESSION_SIGNING_SECRET
    Secret,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { path, yes } => import_sales(connect().await?, path, yes).await?,
        Commands::Price { vin, year, make } => {
            price_lookup(connect().await?, vin, year, make).await?
        }
        Commands::Stats => handle_stats(connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &*connect().await?).await?,
        Commands::Secret => print_secret()?,
    }

    Ok(())
}

/// Connects using `DATABASE_URL` or the `DB_*` components.
async fn connect() -> Result<Arc<PgPool>> {
    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to database {}",
            mask_connection_string(&database_url)
        )
    })?;
    Ok(Arc::new(pool))
}

/// Imports a sales feed with a confirmation step.
///
/// # Flow
///
/// 1. Parse and validate every line
/// 2. Show how many rows will be stored and skipped
/// 3. Confirm (unless `--yes` flag)
/// 4. Insert in batches
async fn import_sales(pool: Arc<PgPool>, path: PathBuf, skip_confirm: bool) -> Result<()> {
    println!("{}", "📥 Import Sales Feed".bright_blue().bold());
    println!();

    let file = File::open(&path).with_context(|| format!("Cannot open {}", path.display()))?;
    let (records, report) = parse_sales_csv(BufReader::new(file));

    println!("  File:     {}", path.display().to_string().cyan());
    println!("  Lines:    {}", report.read.to_string().bright_white());
    println!("  Valid:    {}", records.len().to_string().bright_green());
    println!("  Skipped:  {}", report.skipped.to_string().yellow());
    println!();

    if records.is_empty() {
        println!("{}", "⚠️  Nothing to import".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} sale records?", records.len()))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = ImportService::new(Arc::new(PgSaleRecordRepository::new(pool)));
    let report = service
        .import_records(records, report)
        .await
        .map_err(|e| anyhow::anyhow!("Import failed: {}", e))?;

    println!();
    println!(
        "{} {} records imported",
        "✅".green(),
        report.imported.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Runs the estimator against the database and prints both prices.
///
/// # Output Format
///
/// ```text
/// 💲 Price Lookup
///
///   VIN:          1HGCM82633A004352
///   Year:         2003
///   Tier:         vin_prefix (12 comparables)
///   Raw price:    4200
///   Offer:        3210
/// ```
async fn price_lookup(
    pool: Arc<PgPool>,
    vin: String,
    year: i32,
    make: Option<String>,
) -> Result<()> {
    println!("{}", "💲 Price Lookup".bright_blue().bold());
    println!();

    let sales: Arc<dyn SaleRecordRepository> = Arc::new(PgSaleRecordRepository::new(pool.clone()));
    let settings: Arc<dyn SettingsRepository> = Arc::new(PgSettingsRepository::new(pool));
    let service = PricingService::new(sales, settings.clone());

    let query = PricingQuery {
        make_hint: make,
        ..PricingQuery::new(vin, year)
    };

    println!("  VIN:          {}", query.vin.cyan());
    println!("  Year:         {}", query.year.to_string().cyan());

    let PricingOutcome::Found {
        price,
        tier,
        comparables,
    } = service.estimate(&query).await
    else {
        println!();
        println!(
            "{}",
            "⚠️  No comparable sales; offer needs manual review".yellow()
        );
        return Ok(());
    };

    println!(
        "  Tier:         {} ({} comparables)",
        tier.as_str().bright_white(),
        comparables
    );
    println!("  Raw price:    {}", price.to_string().bright_white().bold());

    match settings.get().await {
        Ok(current) => println!(
            "  Offer:        {}",
            current.apply(price).to_string().bright_green().bold()
        ),
        Err(e) => println!("  Offer:        {} ({})", "unavailable".red(), e),
    }
    println!();

    Ok(())
}

/// Displays the sale record count and current offer settings.
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let sales = PgSaleRecordRepository::new(pool.clone());
    let settings = PgSettingsRepository::new(pool);

    let total = sales
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count sale records: {}", e))?;
    println!(
        "  Sale records:    {}",
        total.to_string().bright_green().bold()
    );

    let current = settings
        .get()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load settings: {}", e))?;
    println!(
        "  Margin:          {} {}",
        current.margin.kind().cyan(),
        current.margin.value().to_string().bright_white()
    );
    println!(
        "  Service charge:  {}",
        current.service_charge.to_string().bright_white()
    );
    println!(
        "  Updated:         {}",
        current
            .updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Prints 32 random bytes as lowercase hex, with nothing else on stdout.
fn print_secret() -> Result<()> {
    let mut buffer = [0u8; 32];
    getrandom::fill(&mut buffer).map_err(|e| anyhow::anyhow!("Failed to gather entropy: {}", e))?;
    println!("{}", hex::encode(buffer));
    Ok(())
}
