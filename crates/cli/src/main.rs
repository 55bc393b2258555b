//! Kridha CLI - Configuration checks and store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate storefront and admin configuration
//! kridha-cli check
//!
//! # Inspect the catalog backend
//! kridha-cli catalog products
//! kridha-cli catalog collections
//!
//! # Inspect or reset the persisted cart
//! kridha-cli cart show
//! kridha-cli cart clear
//! ```
//!
//! # Commands
//!
//! - `check` - Validate environment configuration for both apps
//! - `catalog` - Fetch products or collections from the backend
//! - `cart` - Inspect or clear the durable cart file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kridha-cli")]
#[command(author, version, about = "Kridha store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate environment configuration
    Check,
    /// Inspect the catalog backend
    Catalog {
        #[command(subcommand)]
        target: CatalogTarget,
    },
    /// Inspect or reset the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogTarget {
    /// Fetch and print all products
    Products,
    /// Fetch and print all collections
    Collections,
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the persisted cart lines
    Show,
    /// Empty the persisted cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check => commands::check::run()?,
        Commands::Catalog { target } => match target {
            CatalogTarget::Products => commands::catalog::products().await?,
            CatalogTarget::Collections => commands::catalog::collections().await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
    }
    Ok(())
}
