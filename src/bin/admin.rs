//! CLI administration tool for trivia-api.
//!
//! Categories are read-only over HTTP; this tool adds them, and reports
//! question counts and database status.
//!
//! # Usage
//!
//! ```bash
//! # List categories
//! cargo run --bin admin -- category list
//!
//! # Add a category (prompts when --type is omitted)
//! cargo run --bin admin -- category add --type "Music"
//!
//! # Question counts per category
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use trivia_api::application::services::CategoryService;
use trivia_api::infrastructure::persistence::PgCategoryRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing trivia-api.
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
    /// Manage question categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Show question counts per category
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Category management subcommands.
#[derive(Subcommand)]
enum CategoryAction {
    /// List all categories
    List,

    /// Add a category
    Add {
        /// Display label (e.g., "Music")
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Category { action } => handle_category_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches category management commands.
async fn handle_category_action(action: CategoryAction, pool: &PgPool) -> Result<()> {
    let service = CategoryService::new(Arc::new(PgCategoryRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        CategoryAction::List => list_categories(&service).await?,
        CategoryAction::Add { kind, yes } => add_category(&service, kind, yes).await?,
    }

    Ok(())
}

/// Lists all categories.
///
/// # Output Format
///
/// ```text
/// 📋 Categories
///
///   ID   Type
///   ──────────────────────────────
///   1    Science
///   2    Art
/// ```
async fn list_categories(service: &CategoryService) -> Result<()> {
    println!("{}", "📋 Categories".bright_blue().bold());
    println!();

    let categories = service
        .list_categories()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list categories: {}", e))?;

    if categories.is_empty() {
        println!("{}", "  No categories found".yellow());
        println!();
        println!(
            "  Add one with: {} admin category add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {}",
        "ID".bright_white().bold(),
        "Type".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for category in &categories {
        println!(
            "  {:<4} {}",
            category.id.to_string().bright_black(),
            category.kind.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        categories.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Adds a category, prompting for the label and confirmation as needed.
async fn add_category(
    service: &CategoryService,
    kind: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Add Category".bright_blue().bold());
    println!();

    let kind = match kind {
        Some(k) => k,
        None => Input::new().with_prompt("Category type").interact_text()?,
    };

    println!("  Type: {}", kind.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this category?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let category = service
        .create_category(kind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create category: {}", e))?;

    println!(
        "{} {}",
        "✅ Category created with ID".green().bold(),
        category.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays question counts, overall and per category.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let questions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    let per_category: Vec<(i64, String, i64)> = sqlx::query_as(
        r#"
        SELECT c.id, c.type, COUNT(q.id)
        FROM categories c
        LEFT JOIN questions q ON q.category = c.id
        GROUP BY c.id, c.type
        ORDER BY c.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    println!(
        "  Questions: {}",
        questions_count.to_string().bright_green().bold()
    );
    println!();

    for (id, kind, count) in &per_category {
        println!(
            "  {:<4} {:<20} {}",
            id.to_string().bright_black(),
            kind.cyan(),
            count.to_string().bright_green()
        );
    }

    let categorized: i64 = per_category.iter().map(|(_, _, n)| n).sum();
    if categorized < questions_count {
        println!();
        println!(
            "  {} {}",
            "⚠️  Questions with unknown category:".yellow(),
            (questions_count - categorized).to_string().yellow().bold()
        );
    }
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
