//! CLI administration tool for the CAS test helpers.
//!
//! Works directly against the resource database, for cleaning up after
//! test runs without going through the HTTP endpoints.
//!
//! # Usage
//!
//! ```bash
//! # List all registered resources
//! cargo run --bin admin -- resources list
//!
//! # Delete dynamically created resources
//! cargo run --bin admin -- resources purge --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use cas_test_helpers::application::services::ResourceService;
use cas_test_helpers::config::{Config, mask_connection_string};
use cas_test_helpers::domain::entities::RegisteredResource;
use cas_test_helpers::infrastructure::persistence::PgResourceRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing CAS stub test data.
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
    /// Inspect and clean up registered resources
    Resources {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Resource subcommands.
#[derive(Subcommand)]
enum ResourceAction {
    /// List all registered resources
    List,

    /// Delete resources without a friendly name
    Purge {
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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    let service = ResourceService::new(Arc::new(PgResourceRepository::new(Arc::new(pool))));

    match cli.command {
        Commands::Resources { action } => match action {
            ResourceAction::List => list_resources(&service).await?,
            ResourceAction::Purge { yes } => purge_resources(&service, yes).await?,
        },
        Commands::Db { action } => match action {
            DbAction::Check => check_database(&service, &database_url).await?,
        },
    }

    Ok(())
}

/// Lists all resources, marking which ones a purge would delete.
///
/// ```text
/// Registered Resources
///
///   Resource ID                            Name                      Friendly name        Kind
///   ──────────────────────────────────────────────────────────────────────────────────────────
///   0b9c...                                Workplace Pension         Seeded A             FIXTURE
///   7f21...                                Test Pension              -                    DYNAMIC
/// ```
async fn list_resources(service: &ResourceService<PgResourceRepository>) -> Result<()> {
    println!("{}", "Registered Resources".bright_blue().bold());
    println!();

    let resources = service
        .list_resources()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list resources: {}", e))?;

    if resources.is_empty() {
        println!("{}", "  No resources found".yellow());
        return Ok(());
    }

    println!(
        "  {:<38} {:<25} {:<20} {:<8}",
        "Resource ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Friendly name".bright_white().bold(),
        "Kind".bright_white().bold()
    );
    println!("  {}", "─".repeat(94).bright_black());

    for resource in &resources {
        println!(
            "  {:<38} {:<25} {:<20} {}",
            resource.resource_id.bright_black(),
            resource.name.cyan(),
            resource.friendly_name.as_deref().unwrap_or("-"),
            kind_label(resource)
        );
    }

    let dynamic = resources.iter().filter(|r| r.is_dynamic()).count();
    println!();
    println!(
        "  Total: {}  Dynamic: {}",
        resources.len().to_string().bright_white().bold(),
        dynamic.to_string().yellow().bold()
    );
    println!();

    Ok(())
}

fn kind_label(resource: &RegisteredResource) -> ColoredString {
    if resource.is_dynamic() {
        "DYNAMIC".yellow()
    } else {
        "FIXTURE".green()
    }
}

/// Deletes dynamic resources after confirmation.
async fn purge_resources(
    service: &ResourceService<PgResourceRepository>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Purge Dynamic Resources".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every resource without a friendly name?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .delete_dynamic_resources()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete resources: {}", e))?;

    println!(
        "{} {}",
        "Deleted resources:".green().bold(),
        deleted.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Checks database connectivity and reports the resource count.
async fn check_database(
    service: &ResourceService<PgResourceRepository>,
    database_url: &str,
) -> Result<()> {
    println!("{}", "Database Check".bright_blue().bold());
    println!();
    println!("  URL: {}", mask_connection_string(database_url).bright_black());

    match service.count_resources().await {
        Ok(count) => {
            println!("  Status: {}", "UP".green().bold());
            println!("  Resources: {}", count.to_string().bright_white().bold());
            Ok(())
        }
        Err(e) => {
            println!("  Status: {}", "DOWN".red().bold());
            anyhow::bail!("Database check failed: {e}")
        }
    }
}
