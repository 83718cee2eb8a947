//! CLI administration tool for hashlink.
//!
//! Runs the shortening operations directly against the configured store,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every mapping
//! cargo run --bin admin -- links
//!
//! # Show the 10 most shortened domains
//! cargo run --bin admin -- domains --limit 10
//!
//! # Shorten or resolve a URL
//! cargo run --bin admin -- shorten https://example.com/page
//! cargo run --bin admin -- resolve 3641c5f2
//!
//! # Delete only this service's keys
//! cargo run --bin admin -- reset --scope namespace
//!
//! # Check store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`REDIS_URL`, `STORE_BACKEND`,
//! `STORE_TIMEOUT_MS`, `BASE_URL`, `RESET_SCOPE`, ...).

use hashlink::application::services::{ResetScope, ShortenerService, short_url};
use hashlink::config::{self, Config};
use hashlink::domain::ShortKey;
use hashlink::domain::store::KeyValueStore;
use hashlink::server::connect_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing hashlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all stored mappings
    Links,

    /// Show the most shortened domains
    Domains {
        /// Number of domains to show (defaults to TOP_DOMAINS_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Shorten a URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Resolve a short key to its URL
    Resolve {
        /// 8-character short key
        key: String,
    },

    /// Delete all mappings and domain counts
    Reset {
        /// Override RESET_SCOPE (`database` or `namespace`)
        #[arg(short, long)]
        scope: Option<ResetScope>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let store = connect_store(&config).await?;

    match cli.command {
        Commands::Links => list_links(&store).await?,
        Commands::Domains { limit } => {
            show_domains(&store, limit.unwrap_or(config.top_domains_limit)).await?
        }
        Commands::Shorten { url } => shorten(&store, &config, &url).await?,
        Commands::Resolve { key } => resolve(&store, &key).await?,
        Commands::Reset { scope, yes } => {
            reset(&store, scope.unwrap_or(config.reset_scope), yes).await?
        }
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&store, &config).await?,
        },
    }

    Ok(())
}

fn service(store: &Arc<dyn KeyValueStore>) -> ShortenerService {
    ShortenerService::new(store.clone())
}

/// Lists every mapping.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Key       URL
///   ──────────────────────────────────────────────
///   3641c5f2  https://example.com/page
/// ```
async fn list_links(store: &Arc<dyn KeyValueStore>) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let mappings = service(store)
        .view_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {}",
        "Key".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (storage_key, url) in &mappings {
        let key = ShortKey::from_storage_key(storage_key)
            .map(ShortKey::into_inner)
            .unwrap_or_else(|| storage_key.clone());
        println!("  {:<9} {}", key.cyan(), url);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows the top domains by shorten count.
async fn show_domains(store: &Arc<dyn KeyValueStore>, limit: usize) -> Result<()> {
    println!("{}", "📊 Top Domains".bright_blue().bold());
    println!();

    let top = service(store)
        .top_domains(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load domains: {}", e))?;

    if top.is_empty() {
        println!("{}", "  No domains recorded yet".yellow());
        return Ok(());
    }

    for (rank, entry) in top.iter().enumerate() {
        println!(
            "  {:>2}. {:<40} {}",
            (rank + 1).to_string().bright_black(),
            entry.member.cyan(),
            entry.score.to_string().bright_white().bold()
        );
    }
    println!();

    Ok(())
}

async fn shorten(store: &Arc<dyn KeyValueStore>, config: &Config, url: &str) -> Result<()> {
    let key = service(store)
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!("  Key:   {}", key.as_str().bright_yellow());
    if config.base_url.is_some() {
        println!(
            "  Link:  {}",
            short_url(config.base_url.as_deref(), key.as_str()).cyan()
        );
    }

    Ok(())
}

async fn resolve(store: &Arc<dyn KeyValueStore>, key: &str) -> Result<()> {
    let url = service(store)
        .redirect(key)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", key, e))?;

    println!("  {} → {}", key.bright_yellow(), url.cyan());

    Ok(())
}

/// Deletes all records after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - `database` scope flushes every key in the Redis database
async fn reset(store: &Arc<dyn KeyValueStore>, scope: ResetScope, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Reset".bright_blue().bold());
    println!();

    match scope {
        ResetScope::Database => println!(
            "{}",
            "⚠️  This flushes the ENTIRE store database, including keys owned by other services."
                .red()
                .bold()
        ),
        ResetScope::Namespace => println!(
            "{}",
            "⚠️  This deletes every url:* mapping and the domains counter.".yellow()
        ),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete all records?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service(store)
        .with_reset_scope(scope)
        .delete_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete records: {}", e))?;

    println!("{}", "✅ All records have been deleted.".green().bold());
    println!();

    Ok(())
}

async fn check_store(store: &Arc<dyn KeyValueStore>, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    match store.ping().await {
        Ok(()) => {
            println!("{}", "✅ Store is reachable".green().bold());
            println!("  Backend: {:?}", config.store_backend);
        }
        Err(e) => {
            println!("{}", "❌ Store check failed".red().bold());
            println!("  Error: {}", e.to_string().red());
            std::process::exit(1);
        }
    }

    Ok(())
}
