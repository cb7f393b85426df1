//! CLI administration tool for shortkey.
//!
//! Works directly against the database, using the same service as the HTTP
//! server, so short URLs can be managed without going through the API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- url create https://example.com/path
//!
//! # Show a mapping by its secret key
//! cargo run --bin admin -- url info AbC12_x9Yz8WvU
//!
//! # Deactivate a mapping
//! cargo run --bin admin -- url deactivate AbC12_x9Yz8WvU
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components), `BASE_URL`, `KEY_LENGTH`.

use shortkey::application::services::UrlService;
use shortkey::config::{self, Config};
use shortkey::domain::entities::UrlInfo;
use shortkey::infrastructure::persistence::PgUrlRepository;
use shortkey::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing shortkey.
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
    /// Manage short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Shorten a URL
    Create {
        /// Target URL to redirect to
        target_url: String,
    },

    /// Show a mapping by its secret key
    Info {
        /// Secret admin key
        secret_key: String,
    },

    /// Deactivate a mapping by its secret key
    Deactivate {
        /// Secret admin key
        secret_key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    // Store failures are logged through `tracing`; print them to stderr.
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::new(repository, config.service_settings());

    match action {
        UrlAction::Create { target_url } => {
            let info = service.shorten(target_url).await?;
            println!("{}", "Short URL created".green().bold());
            println!();
            print_info(&info);
            println!();
            println!(
                "{}",
                "Keep the admin URL private: it is the only way to manage this link."
                    .yellow()
            );
        }
        UrlAction::Info { secret_key } => {
            let info = service.get_admin_info(&secret_key).await?;
            print_info(&info);
        }
        UrlAction::Deactivate { secret_key, yes } => {
            let info = service.get_admin_info(&secret_key).await?;
            print_info(&info);
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Deactivate this short URL?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let message = service.deactivate(&secret_key).await?;
            println!("{}", message.green().bold());
        }
    }

    Ok(())
}

fn print_info(info: &UrlInfo) {
    let status = if info.is_active {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    };

    println!("  Target:    {}", info.target_url.cyan());
    println!("  Short URL: {}", info.public_url.bright_white().bold());
    println!("  Admin URL: {}", info.admin_url.bright_yellow());
    println!("  Clicks:    {}", info.clicks.to_string().bright_green());
    println!("  Status:    {}", status);
}

/// Displays mapping and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let (total, active, clicks): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COUNT(*) FILTER (WHERE is_active),
            COALESCE(SUM(clicks), 0)::BIGINT
        FROM urls
        "#,
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Short URLs:  {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Active:      {}",
        active.to_string().bright_green().bold()
    );
    println!(
        "  Inactive:    {}",
        (total - active).to_string().bright_black()
    );
    println!(
        "  Clicks:      {}",
        clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations").run(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
